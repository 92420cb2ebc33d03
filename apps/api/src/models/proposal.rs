use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub const MIN_TARGET_WORDS: usize = 100;
pub const MAX_TARGET_WORDS: usize = 300;
/// Matches the starting position of the length slider in the form.
pub const DEFAULT_TARGET_WORDS: usize = 150;

/// Voice of the generated proposal. Closed set: anything else is rejected at validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    Confident,
    Formal,
}

impl Tone {
    pub const ALL: [Tone; 4] = [
        Tone::Professional,
        Tone::Friendly,
        Tone::Confident,
        Tone::Formal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Friendly => "friendly",
            Tone::Confident => "confident",
            Tone::Formal => "formal",
        }
    }
}

impl FromStr for Tone {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Tone::ALL
            .into_iter()
            .find(|t| t.as_str() == key)
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "Unsupported tone '{}'. Expected one of: professional, friendly, confident, formal",
                    s.trim()
                ))
            })
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The freelancer's declared specialty. Open-ended: unknown keys are kept as `Other`
/// and rendered with generic phrasing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExperienceCategory {
    #[default]
    Website,
    UiUx,
    GraphicDesign,
    LogoBranding,
    Cms,
    WebappMobile,
    Development,
    Other(String),
}

impl ExperienceCategory {
    pub const KNOWN: [ExperienceCategory; 7] = [
        ExperienceCategory::Website,
        ExperienceCategory::UiUx,
        ExperienceCategory::GraphicDesign,
        ExperienceCategory::LogoBranding,
        ExperienceCategory::Cms,
        ExperienceCategory::WebappMobile,
        ExperienceCategory::Development,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ExperienceCategory::Website => "website",
            ExperienceCategory::UiUx => "ui-ux",
            ExperienceCategory::GraphicDesign => "graphic-design",
            ExperienceCategory::LogoBranding => "logo-branding",
            ExperienceCategory::Cms => "cms",
            ExperienceCategory::WebappMobile => "webapp-mobile",
            ExperienceCategory::Development => "development",
            ExperienceCategory::Other(key) => key,
        }
    }
}

impl From<&str> for ExperienceCategory {
    fn from(s: &str) -> Self {
        let key = s.trim().to_ascii_lowercase();
        ExperienceCategory::KNOWN
            .into_iter()
            .find(|c| c.as_str() == key)
            .unwrap_or(ExperienceCategory::Other(key))
    }
}

impl From<String> for ExperienceCategory {
    fn from(s: String) -> Self {
        ExperienceCategory::from(s.as_str())
    }
}

impl From<ExperienceCategory> for String {
    fn from(c: ExperienceCategory) -> Self {
        c.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommunicationPreference {
    #[default]
    Call,
    Chat,
}

impl FromStr for CommunicationPreference {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" => Ok(CommunicationPreference::Call),
            "chat" => Ok(CommunicationPreference::Chat),
            other => Err(AppError::Validation(format!(
                "Unsupported communication preference '{other}'. Expected 'call' or 'chat'"
            ))),
        }
    }
}

/// Raw form payload as submitted by the front end. Every field is optional here;
/// `ProposalRequest::try_from` decides what is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProposalForm {
    pub job_title: String,
    pub job_description: String,
    pub client_requirements: String,
    pub experience_background: String,
    pub tone: Option<String>,
    pub experience_category: Option<String>,
    pub communication_preference: Option<String>,
    pub target_word_count: Option<i64>,
}

/// A validated generation request. Immutable for the duration of one generation call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalRequest {
    pub job_title: String,
    pub job_description: String,
    pub client_requirements: String,
    pub experience_background: String,
    pub tone: Tone,
    pub experience_category: ExperienceCategory,
    pub communication_preference: CommunicationPreference,
    pub target_word_count: usize,
}

impl TryFrom<ProposalForm> for ProposalRequest {
    type Error = AppError;

    fn try_from(form: ProposalForm) -> Result<Self, Self::Error> {
        // The title is embedded mid-sentence, so line breaks inside it must not survive.
        let job_title = form.job_title.split_whitespace().collect::<Vec<_>>().join(" ");
        if job_title.is_empty() {
            return Err(AppError::Validation("jobTitle cannot be empty".to_string()));
        }

        let tone = match form.tone.as_deref() {
            Some(raw) if !raw.trim().is_empty() => raw.parse::<Tone>()?,
            _ => Tone::default(),
        };

        let experience_category = match form.experience_category.as_deref() {
            Some(raw) if !raw.trim().is_empty() => ExperienceCategory::from(raw),
            _ => ExperienceCategory::default(),
        };

        let communication_preference = match form.communication_preference.as_deref() {
            Some(raw) if !raw.trim().is_empty() => raw.parse::<CommunicationPreference>()?,
            _ => CommunicationPreference::default(),
        };

        let target_word_count = match form.target_word_count {
            None => DEFAULT_TARGET_WORDS,
            Some(n) if (MIN_TARGET_WORDS as i64..=MAX_TARGET_WORDS as i64).contains(&n) => {
                n as usize
            }
            Some(n) => {
                return Err(AppError::Validation(format!(
                    "targetWordCount must be between {MIN_TARGET_WORDS} and {MAX_TARGET_WORDS}, got {n}"
                )))
            }
        };

        Ok(ProposalRequest {
            job_title,
            job_description: form.job_description.trim().to_string(),
            client_requirements: form.client_requirements.trim().to_string(),
            experience_background: form.experience_background.trim().to_string(),
            tone,
            experience_category,
            communication_preference,
            target_word_count,
        })
    }
}
