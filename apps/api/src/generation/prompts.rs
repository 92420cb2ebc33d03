// Prompt constants for the remote completion path.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for proposal writing.
pub const PROPOSAL_SYSTEM: &str = "You are an expert freelance proposal writer. \
    You write warm, specific cover letters that answer the client's job post directly. \
    Never invent credentials, portfolio items, or prices that are not in the brief.";

/// Proposal prompt template. Filled with `synthesizer::render_template`.
/// Placeholders: {job_title}, {job_description}, {client_requirements}, {experience},
/// {tone}, {category}, {communication}, {skills}, {benefits}, {needs_summary},
/// {target_words}, {display_name}
pub const PROPOSAL_PROMPT_TEMPLATE: &str = r#"Write a proposal for the following job post.

JOB TITLE:
{job_title}

JOB DESCRIPTION:
{job_description}

CLIENT REQUIREMENTS:
{client_requirements}

MY EXPERIENCE:
{experience}

WRITING BRIEF:
- Tone: {tone}
- My specialty: {category}
- Next step to propose: {communication}
- Skills from the post worth naming: {skills}
- Value I can offer: {benefits}
- What the client needs: {needs_summary}

STRUCTURE:
1. A greeting that fits the tone
2. Show that I understood the job and what the client needs
3. My relevant experience and skills
4. The value I bring to this project
5. The proposed next step
6. Two or three clarifying questions
7. A sign-off with my name: {display_name}

Aim for about {target_words} words."#;

pub const CALL_NEXT_STEP: &str = "a short introduction call";
pub const CHAT_NEXT_STEP: &str = "an immediate chat to get started";

/// Stands in for an empty brief field so the model sees an explicit marker.
pub const NOT_PROVIDED: &str = "(not provided)";
