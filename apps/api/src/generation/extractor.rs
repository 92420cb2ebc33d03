//! Keyword/need extractor. Scans a free-text job description for known skill terms and
//! situational cues. Pure functions of their inputs; no LLM call.

use serde::{Deserialize, Serialize};

use crate::generation::category::category_benefits;
use crate::models::proposal::ExperienceCategory;

const MAX_SKILLS: usize = 4;
const MAX_BENEFITS: usize = 3;

/// Skill vocabulary in declaration order. Matches are reported in this order and casing,
/// not in order of appearance in the description.
const SKILL_VOCABULARY: &[&str] = &[
    "design",
    "development",
    "UI",
    "UX",
    "branding",
    "logo",
    "website",
    "app",
    "mobile",
    "responsive",
    "WordPress",
    "Webflow",
    "Wix",
    "Framer",
    "graphics",
    "illustration",
    "animation",
    "wireframing",
    "prototyping",
];

/// A group of description keywords that, when any is present, contributes one phrase.
struct Cue {
    keywords: &'static [&'static str],
    phrase: &'static str,
}

/// Situational benefits, appended after the category pair in this order.
const SITUATIONAL_BENEFITS: &[Cue] = &[
    Cue {
        keywords: &["responsive", "mobile"],
        phrase: "ensuring fully responsive design that works flawlessly on all devices",
    },
    Cue {
        keywords: &["deadline", "urgent"],
        phrase: "meeting your tight deadlines while maintaining high quality standards",
    },
    Cue {
        keywords: &["revisions", "feedback"],
        phrase: "maintaining a collaborative approach with regular updates and revisions",
    },
    Cue {
        keywords: &["seo", "search engine"],
        phrase: "implementing SEO-friendly design and development practices",
    },
];

const NEEDS_LEAD_IN: &str = "From your description, I understand that you need";

/// Returned by `summarize_needs` when no description was supplied.
pub const GENERIC_NEEDS_SUMMARY: &str =
    "I understand you are looking for a skilled professional to deliver high-quality results for your project.";

/// Priority cascade for the main need. First matching group wins.
const NEED_FOCUS: &[Cue] = &[
    Cue {
        keywords: &["responsive", "mobile"],
        phrase: "a responsive solution that works seamlessly across all devices",
    },
    Cue {
        keywords: &["branding", "logo"],
        phrase: "a distinctive brand identity that sets you apart from competitors",
    },
    Cue {
        keywords: &["website", "web"],
        phrase: "a professional website that represents your business online",
    },
    Cue {
        keywords: &["app", "mobile app"],
        phrase: "a reliable application with a polished user experience",
    },
];

const FALLBACK_NEED_FOCUS: &str = "a skilled professional who can deliver quality results";

const URGENCY_CUE: Cue = Cue {
    keywords: &["urgent", "deadline", "asap", "quickly"],
    phrase: "delivered on a tight timeline",
};

const QUALITY_CUE: Cue = Cue {
    keywords: &["quality", "professional", "expert", "attention to detail", "high-end"],
    phrase: "with close attention to quality and detail",
};

impl Cue {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|kw| lowered.contains(kw))
    }
}

/// Everything the synthesizer learns from the job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub matched_skills: Vec<String>,
    pub inferred_benefits: Vec<String>,
    pub needs_summary: String,
}

/// Runs all three extractors over one description.
pub fn extract(description: &str, category: &ExperienceCategory) -> ExtractionResult {
    ExtractionResult {
        matched_skills: extract_skills(description),
        inferred_benefits: extract_benefits(description, category),
        needs_summary: summarize_needs(description),
    }
}

/// Case-insensitive substring match against the skill vocabulary, capped at 4.
pub fn extract_skills(description: &str) -> Vec<String> {
    let lowered = description.to_lowercase();
    SKILL_VOCABULARY
        .iter()
        .filter(|skill| lowered.contains(&skill.to_lowercase()))
        .take(MAX_SKILLS)
        .map(|skill| skill.to_string())
        .collect()
}

/// Category pair first, then one phrase per matching situational group; capped at 3.
///
/// An empty description yields no benefits at all. The synthesizer supplies its own
/// fallback phrasing in that case.
pub fn extract_benefits(description: &str, category: &ExperienceCategory) -> Vec<String> {
    if description.trim().is_empty() {
        return Vec::new();
    }

    let lowered = description.to_lowercase();
    let category_phrases = category_benefits(category).into_iter().flatten();
    let situational = SITUATIONAL_BENEFITS
        .iter()
        .filter(|cue| cue.matches(&lowered))
        .map(|cue| cue.phrase);

    category_phrases
        .chain(situational)
        .take(MAX_BENEFITS)
        .map(str::to_string)
        .collect()
}

/// One sentence describing what the client appears to need.
pub fn summarize_needs(description: &str) -> String {
    if description.trim().is_empty() {
        return GENERIC_NEEDS_SUMMARY.to_string();
    }

    let lowered = description.to_lowercase();
    let focus = NEED_FOCUS
        .iter()
        .find(|cue| cue.matches(&lowered))
        .map(|cue| cue.phrase)
        .unwrap_or(FALLBACK_NEED_FOCUS);

    let mut summary = format!("{NEEDS_LEAD_IN} {focus}");
    if URGENCY_CUE.matches(&lowered) {
        summary.push_str(", ");
        summary.push_str(URGENCY_CUE.phrase);
    }
    if QUALITY_CUE.matches(&lowered) {
        summary.push_str(", ");
        summary.push_str(QUALITY_CUE.phrase);
    }
    summary.push('.');
    summary
}
