//! Proposal synthesizer: assembles the untrimmed draft from tone phrases, the category
//! table, and the extraction result.
//!
//! The draft is an ordered list of named paragraphs. Each paragraph is produced by a pure
//! builder that fills a fixed template; paragraphs are joined with a blank line. A builder
//! that renders nothing is a template bug and surfaces as `AppError::Configuration`.

use crate::errors::AppError;
use crate::generation::category::{category_benefits, category_description};
use crate::generation::extractor::ExtractionResult;
use crate::generation::tone::{tone_phrases, TonePhrases};
use crate::models::proposal::{CommunicationPreference, ProposalRequest};
use crate::models::settings::{UserSettings, DEFAULT_DISPLAY_NAME};

/// Separator between paragraphs in the draft.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Used when neither extraction nor the category table yields a benefit.
const GENERIC_BENEFIT: &str = "delivering high-quality work within the expected timeframe";

// ────────────────────────────────────────────────────────────────────────────
// Templates
// ────────────────────────────────────────────────────────────────────────────

const GREETING_TEMPLATE: &str = "{greeting}";

const INTRO_TEMPLATE: &str = "{intro} {job_title} job. It instantly grabbed my attention. {needs_summary}";

const REQUIREMENTS_TEMPLATE: &str =
    "You mentioned that you are looking for {client_requirements}, and that is exactly where I can help.";

const WORK_EXAMPLES_TEMPLATE: &str = "As a {category} specialist with 7+ years of experience and more than 150 satisfied clients, \
    I have completed numerous {category} projects with 5-star reviews and positive feedback. \
    Two examples that relate directly to your job post are attached to this proposal for you.";

const EXPERIENCE_TEMPLATE: &str = "{transition} {skills}, along with a track record of delivering projects on time \
    and a strong commitment to client satisfaction.";

const VALUE_TEMPLATE: &str = "I can bring tremendous value to your project by {benefits}.";

const CALL_TEMPLATE: &str = "Let's schedule a quick 10-minute introduction call so that we can discuss your project \
    in more detail and make sure I am the perfect fit. I have today open from 10 AM to 2 PM (EST). \
    If those times don't work for you, just let me know what works best and I will adjust my schedule \
    around your availability.";

const CHAT_TEMPLATE: &str = "I am online right now and happy to start a chat immediately, so feel free to message me \
    and we can go over your project in detail and get started without delay.";

const QUESTIONS_PROSE_TEMPLATE: &str = "During our conversation, I'd like to understand your timeline for this project, \
    any specific design preferences you have, and what would make this project a success in your view. {closing}";

const QUESTIONS_BULLETED_TEMPLATE: &str = "A few questions to get us started:\n\
    - What is your timeline for this project?\n\
    - Do you have any specific design preferences?\n\
    - What would make this project a success in your view?\n\
    {closing}";

const SIGNATURE_TEMPLATE: &str = "{sign_off}\n{display_name}";

// ────────────────────────────────────────────────────────────────────────────
// Style
// ────────────────────────────────────────────────────────────────────────────

/// Presentation choices that come from user settings rather than the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisStyle {
    pub display_name: String,
    /// Experience elaboration used when the request carries none.
    pub default_background: String,
    pub bulleted_questions: bool,
}

impl From<&UserSettings> for SynthesisStyle {
    fn from(settings: &UserSettings) -> Self {
        Self {
            display_name: settings.display_name.trim().to_string(),
            default_background: settings.bio.trim().to_string(),
            bulleted_questions: !settings.avoid_bulleted_lists,
        }
    }
}

impl Default for SynthesisStyle {
    fn default() -> Self {
        SynthesisStyle::from(&UserSettings::default())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Assembly
// ────────────────────────────────────────────────────────────────────────────

/// Everything a paragraph builder may read.
struct DraftContext<'a> {
    request: &'a ProposalRequest,
    extraction: &'a ExtractionResult,
    style: &'a SynthesisStyle,
    tone: TonePhrases,
}

type ParagraphBuilder = fn(&DraftContext<'_>) -> Result<String, AppError>;

/// Draft order: greeting, needs, credibility, skills, value, call to action,
/// clarifying questions, signature.
const PARAGRAPHS: &[(&str, ParagraphBuilder)] = &[
    ("greeting", greeting_paragraph),
    ("intro", intro_paragraph),
    ("work_examples", work_examples_paragraph),
    ("experience", experience_paragraph),
    ("value", value_paragraph),
    ("call_to_action", call_to_action_paragraph),
    ("questions", questions_paragraph),
    ("signature", signature_paragraph),
];

/// Builds the untrimmed draft with the default style.
#[cfg(test)]
pub fn synthesize(
    request: &ProposalRequest,
    extraction: &ExtractionResult,
) -> Result<String, AppError> {
    synthesize_with_style(request, extraction, &SynthesisStyle::default())
}

/// Builds the untrimmed draft. Deterministic for identical inputs.
pub fn synthesize_with_style(
    request: &ProposalRequest,
    extraction: &ExtractionResult,
    style: &SynthesisStyle,
) -> Result<String, AppError> {
    let ctx = DraftContext {
        request,
        extraction,
        style,
        tone: tone_phrases(request.tone),
    };

    let mut paragraphs = Vec::with_capacity(PARAGRAPHS.len());
    for (name, build) in PARAGRAPHS {
        let text = build(&ctx)?;
        if text.trim().is_empty() {
            return Err(AppError::Configuration(format!(
                "paragraph '{name}' rendered empty"
            )));
        }
        paragraphs.push(text);
    }

    Ok(paragraphs.join(PARAGRAPH_SEPARATOR))
}

fn greeting_paragraph(ctx: &DraftContext<'_>) -> Result<String, AppError> {
    render_template(GREETING_TEMPLATE, &[("greeting", ctx.tone.greeting)])
}

fn intro_paragraph(ctx: &DraftContext<'_>) -> Result<String, AppError> {
    let mut text = render_template(
        INTRO_TEMPLATE,
        &[
            ("intro", ctx.tone.intro),
            ("job_title", ctx.request.job_title.as_str()),
            ("needs_summary", ctx.extraction.needs_summary.as_str()),
        ],
    )?;

    let requirements = trim_sentence(&ctx.request.client_requirements);
    if !requirements.is_empty() {
        text.push(' ');
        text.push_str(&render_template(
            REQUIREMENTS_TEMPLATE,
            &[("client_requirements", requirements)],
        )?);
    }
    Ok(text)
}

fn work_examples_paragraph(ctx: &DraftContext<'_>) -> Result<String, AppError> {
    render_template(
        WORK_EXAMPLES_TEMPLATE,
        &[(
            "category",
            category_description(&ctx.request.experience_category),
        )],
    )
}

fn experience_paragraph(ctx: &DraftContext<'_>) -> Result<String, AppError> {
    let skills = if ctx.extraction.matched_skills.is_empty() {
        category_description(&ctx.request.experience_category).to_string()
    } else {
        join_list(&ctx.extraction.matched_skills)
    };

    let mut text = render_template(
        EXPERIENCE_TEMPLATE,
        &[("transition", ctx.tone.transition), ("skills", skills.as_str())],
    )?;

    let background = if ctx.request.experience_background.is_empty() {
        ctx.style.default_background.as_str()
    } else {
        ctx.request.experience_background.as_str()
    };
    if !background.is_empty() {
        text.push(' ');
        text.push_str(&as_sentence(background));
    }
    Ok(text)
}

fn value_paragraph(ctx: &DraftContext<'_>) -> Result<String, AppError> {
    let benefits = if !ctx.extraction.inferred_benefits.is_empty() {
        ctx.extraction.inferred_benefits.join(", and ")
    } else if let Some(pair) = category_benefits(&ctx.request.experience_category) {
        pair.join(", and ")
    } else {
        GENERIC_BENEFIT.to_string()
    };
    render_template(VALUE_TEMPLATE, &[("benefits", benefits.as_str())])
}

fn call_to_action_paragraph(ctx: &DraftContext<'_>) -> Result<String, AppError> {
    let template = match ctx.request.communication_preference {
        CommunicationPreference::Call => CALL_TEMPLATE,
        CommunicationPreference::Chat => CHAT_TEMPLATE,
    };
    render_template(template, &[])
}

fn questions_paragraph(ctx: &DraftContext<'_>) -> Result<String, AppError> {
    let template = if ctx.style.bulleted_questions {
        QUESTIONS_BULLETED_TEMPLATE
    } else {
        QUESTIONS_PROSE_TEMPLATE
    };
    render_template(template, &[("closing", ctx.tone.closing)])
}

fn signature_paragraph(ctx: &DraftContext<'_>) -> Result<String, AppError> {
    let name = if ctx.style.display_name.is_empty() {
        DEFAULT_DISPLAY_NAME
    } else {
        ctx.style.display_name.as_str()
    };
    render_template(
        SIGNATURE_TEMPLATE,
        &[("sign_off", ctx.tone.sign_off), ("display_name", name)],
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Fills `{name}` placeholders from `vars` in a single pass, so braces inside
/// interpolated user text are never re-interpreted.
///
/// A placeholder with no value, or an unterminated `{`, is a template bug and returns
/// `AppError::Configuration`.
pub fn render_template(template: &str, vars: &[(&str, &str)]) -> Result<String, AppError> {
    let mut out = String::with_capacity(template.len() + 128);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after.find('}').ok_or_else(|| {
            AppError::Configuration(format!("unterminated placeholder in template: {template:?}"))
        })?;
        let name = &after[..close];
        let value = vars
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| {
                AppError::Configuration(format!("no value for placeholder '{name}'"))
            })?;
        out.push_str(value);
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

/// "a", "a and b", "a, b, and c".
fn join_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

/// Strips trailing sentence punctuation so the text can be embedded mid-sentence.
fn trim_sentence(text: &str) -> &str {
    text.trim().trim_end_matches(['.', '!', '?', ';', ',']).trim_end()
}

/// Ensures user-supplied text ends like a sentence.
fn as_sentence(text: &str) -> String {
    let text = text.trim();
    if text.ends_with(['.', '!', '?']) {
        text.to_string()
    } else {
        format!("{text}.")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::extractor::{extract, GENERIC_NEEDS_SUMMARY};
    use crate::models::proposal::{ExperienceCategory, Tone};

    fn request(description: &str, category: ExperienceCategory) -> ProposalRequest {
        ProposalRequest {
            job_title: "WordPress Developer Needed".to_string(),
            job_description: description.to_string(),
            client_requirements: String::new(),
            experience_background: String::new(),
            tone: Tone::Professional,
            experience_category: category,
            communication_preference: CommunicationPreference::Call,
            target_word_count: 150,
        }
    }

    fn draft_for(req: &ProposalRequest) -> String {
        let extraction = extract(&req.job_description, &req.experience_category);
        synthesize(req, &extraction).unwrap()
    }

    fn paragraphs(draft: &str) -> Vec<&str> {
        draft.split(PARAGRAPH_SEPARATOR).collect()
    }

    #[test]
    fn test_draft_has_eight_paragraphs_in_order() {
        let req = request("Need a responsive WordPress site with SEO", ExperienceCategory::Cms);
        let draft = draft_for(&req);
        let parts = paragraphs(&draft);
        assert_eq!(parts.len(), PARAGRAPHS.len());
        assert_eq!(parts[0], "Hello,");
        assert!(parts[1].starts_with("Thank you for sharing the details of your WordPress Developer Needed job."));
        assert!(parts[3].contains("responsive and WordPress"));
        assert!(parts[5].contains("10-minute introduction call"));
        assert_eq!(parts[7], "Best regards,\nSazz");
    }

    #[test]
    fn test_every_tone_and_category_synthesizes() {
        let mut categories = ExperienceCategory::KNOWN.to_vec();
        categories.push(ExperienceCategory::Other("voice-over".to_string()));
        for tone in Tone::ALL {
            for category in &categories {
                let mut req = request("Mobile app with a logo", category.clone());
                req.tone = tone;
                let extraction = extract(&req.job_description, &req.experience_category);
                let draft = synthesize(&req, &extraction);
                assert!(draft.is_ok(), "{tone}/{} failed: {draft:?}", category.as_str());
                assert!(!draft.unwrap().contains("\n\n\n"), "no empty paragraphs");
            }
        }
    }

    #[test]
    fn test_empty_description_uses_fallbacks() {
        let req = request("", ExperienceCategory::Cms);
        let extraction = extract("", &req.experience_category);
        assert_eq!(extraction.needs_summary, GENERIC_NEEDS_SUMMARY);
        assert!(extraction.matched_skills.is_empty());
        assert!(extraction.inferred_benefits.is_empty());

        let draft = synthesize(&req, &extraction).unwrap();
        let pair = category_benefits(&ExperienceCategory::Cms).unwrap();
        assert!(draft.contains(GENERIC_NEEDS_SUMMARY));
        assert!(draft.contains(pair[0]), "category pair still offered");
        assert!(draft.contains(pair[1]));
        assert!(draft.contains("expertise in content management systems"));
    }

    #[test]
    fn test_unknown_category_without_description_uses_generic_benefit() {
        let req = request("", ExperienceCategory::Other("podcasting".to_string()));
        let draft = draft_for(&req);
        assert!(draft.contains(GENERIC_BENEFIT));
        assert!(draft.contains("design and development specialist"));
    }

    #[test]
    fn test_chat_preference_changes_call_to_action() {
        let mut req = request("Landing page", ExperienceCategory::Website);
        req.communication_preference = CommunicationPreference::Chat;
        let draft = draft_for(&req);
        assert!(draft.contains("start a chat immediately"));
        assert!(!draft.contains("introduction call"));
    }

    #[test]
    fn test_client_requirements_and_background_are_embedded() {
        let mut req = request("Landing page", ExperienceCategory::Website);
        req.client_requirements = "Figma handoff experience.".to_string();
        req.experience_background = "I shipped 40 marketing sites last year".to_string();
        let draft = draft_for(&req);
        assert!(draft.contains("looking for Figma handoff experience, and that is"));
        assert!(draft.contains("I shipped 40 marketing sites last year."));
    }

    #[test]
    fn test_style_controls_signature_background_and_bullets() {
        let req = request("Landing page", ExperienceCategory::Website);
        let extraction = extract(&req.job_description, &req.experience_category);
        let style = SynthesisStyle {
            display_name: "Rin Tanaka".to_string(),
            default_background: "Ten years of Webflow builds.".to_string(),
            bulleted_questions: true,
        };
        let draft = synthesize_with_style(&req, &extraction, &style).unwrap();
        assert!(draft.ends_with("Best regards,\nRin Tanaka"));
        assert!(draft.contains("Ten years of Webflow builds."));
        assert!(draft.contains("\n- What is your timeline for this project?"));
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let req = request("Urgent responsive site", ExperienceCategory::Development);
        assert_eq!(draft_for(&req), draft_for(&req));
    }

    #[test]
    fn test_render_template_fills_placeholders() {
        let out = render_template("{a} and {b}", &[("a", "x"), ("b", "y")]).unwrap();
        assert_eq!(out, "x and y");
    }

    #[test]
    fn test_render_template_does_not_expand_user_braces() {
        let out = render_template("Title: {t}", &[("t", "{not_a_placeholder}")]).unwrap();
        assert_eq!(out, "Title: {not_a_placeholder}");
    }

    #[test]
    fn test_render_template_missing_value_is_configuration_error() {
        let err = render_template("Hi {name}", &[]).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
        let err = render_template("Hi {name", &[("name", "x")]).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn test_join_list() {
        let items = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert_eq!(join_list(&items(&["a"])), "a");
        assert_eq!(join_list(&items(&["a", "b"])), "a and b");
        assert_eq!(join_list(&items(&["a", "b", "c"])), "a, b, and c");
    }
}
