use serde::{Deserialize, Serialize};

/// Signature name used when the user has not saved settings yet.
pub const DEFAULT_DISPLAY_NAME: &str = "Sazz";
pub const DEFAULT_BIO: &str =
    "Experienced freelance developer specializing in web development and design.";

/// Per-user preferences persisted under the `userSettings` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettings {
    /// Name printed in the proposal signature.
    pub display_name: String,
    /// Default experience blurb, used when a request carries no background of its own.
    pub bio: String,
    pub prefer_concise_output: bool,
    pub avoid_bulleted_lists: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            bio: DEFAULT_BIO.to_string(),
            prefer_concise_output: true,
            avoid_bulleted_lists: true,
        }
    }
}

/// A proposal the user chose to keep. Stored newest first under `savedProposals`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedProposal {
    /// Unix-millis timestamp at save time, rendered as a string.
    pub id: String,
    pub content: String,
    /// Calendar date of the save, `YYYY-MM-DD`.
    pub date: String,
}
