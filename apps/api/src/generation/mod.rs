// Proposal generation engine.
// Implements: keyword/need extraction, tone and category tables, draft synthesis, length fitting.
// Remote completion calls go through llm_client; this module never touches storage.

pub mod category;
pub mod extractor;
pub mod generator;
pub mod handlers;
pub mod length_fit;
pub mod prompts;
pub mod synthesizer;
pub mod tone;
