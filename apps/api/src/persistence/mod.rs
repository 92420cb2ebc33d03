// Persistence: saved proposals, user settings, and the completion credential.
// Everything goes through the KeyValueStore capability; the generation core never sees it.

pub mod credential;
pub mod handlers;
pub mod proposals;
pub mod settings;
pub mod store;

pub const SAVED_PROPOSALS_KEY: &str = "savedProposals";
pub const SETTINGS_KEY: &str = "userSettings";
pub const CREDENTIAL_KEY: &str = "groq_api_key";
/// Older credential keys, read when `CREDENTIAL_KEY` is unset and cleared on removal.
pub const LEGACY_CREDENTIAL_KEYS: [&str; 2] = ["deepseek_api_key", "openai_api_key"];
