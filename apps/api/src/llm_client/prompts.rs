// Shared prompt fragments for remote completion calls.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Appended to every system prompt: plain text only.
pub const PLAIN_TEXT_INSTRUCTION: &str = "\
    Respond with the proposal text only. \
    Do NOT add headings, a subject line, markdown formatting, or code fences. \
    Do NOT include explanations or notes about the proposal.";

/// Added when the user prefers shorter proposals.
pub const CONCISE_INSTRUCTION: &str = "\
    Keep the proposal tight: short paragraphs, no filler sentences, no repeated claims.";

/// Added when the user prefers prose over lists.
pub const PROSE_ONLY_INSTRUCTION: &str = "\
    Write in paragraphs only. Do NOT use bullet points or numbered lists.";

/// Added when the user allows a short list for the clarifying questions.
pub const QUESTIONS_AS_LIST_INSTRUCTION: &str = "\
    You may present the clarifying questions as a short bulleted list.";
