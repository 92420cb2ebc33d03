//! Proposal generation: the entry point that turns a validated `ProposalRequest` into a
//! `GeneratedProposal`.
//!
//! Template path: extract → synthesize → fit.
//! Remote path: extract → one completion call → fit. A missing credential fails before the
//! call; a failed call either falls back to the template path or propagates, per
//! `CompletionConfig::failure_policy`.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::{CompletionConfig, FailurePolicy};
use crate::errors::AppError;
use crate::generation::category::category_description;
use crate::generation::extractor::{extract, ExtractionResult};
use crate::generation::length_fit::{fit, word_count};
use crate::generation::prompts::{
    CALL_NEXT_STEP, CHAT_NEXT_STEP, NOT_PROVIDED, PROPOSAL_PROMPT_TEMPLATE, PROPOSAL_SYSTEM,
};
use crate::generation::synthesizer::{render_template, synthesize_with_style, SynthesisStyle};
use crate::llm_client::prompts::{
    CONCISE_INSTRUCTION, PLAIN_TEXT_INSTRUCTION, PROSE_ONLY_INSTRUCTION,
    QUESTIONS_AS_LIST_INSTRUCTION,
};
use crate::llm_client::{CompletionClient, CompletionRequest};
use crate::models::proposal::{CommunicationPreference, ProposalRequest};
use crate::models::settings::UserSettings;

/// Attached to a proposal produced by the template path after a remote failure.
pub const FALLBACK_NOTICE: &str =
    "The completion service was unavailable, so this proposal was written from the built-in templates.";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    #[default]
    Template,
    Remote,
}

/// Which path actually produced the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalSource {
    Template,
    Remote,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedProposal {
    pub content: String,
    pub word_count: usize,
    pub source: ProposalSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    pub extraction: ExtractionResult,
}

/// The remote completion collaborator and its settings, borrowed for one call.
pub struct RemoteCompletion<'a> {
    pub client: &'a dyn CompletionClient,
    pub config: &'a CompletionConfig,
    pub credential: Option<&'a str>,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// The request must carry an experience background unless the settings bio supplies one.
pub fn ensure_background(
    request: &ProposalRequest,
    settings: &UserSettings,
) -> Result<(), AppError> {
    if request.experience_background.trim().is_empty() && settings.bio.trim().is_empty() {
        return Err(AppError::Validation(
            "experienceBackground cannot be empty when no bio is saved in settings".to_string(),
        ));
    }
    Ok(())
}

/// Template path only. Deterministic for identical inputs.
pub fn generate_local(
    request: &ProposalRequest,
    settings: &UserSettings,
) -> Result<GeneratedProposal, AppError> {
    ensure_background(request, settings)?;
    let extraction = extract(&request.job_description, &request.experience_category);
    from_template(request, settings, extraction)
}

/// Runs the pipeline for `mode`.
pub async fn generate_proposal(
    request: &ProposalRequest,
    settings: &UserSettings,
    mode: GenerationMode,
    remote: RemoteCompletion<'_>,
) -> Result<GeneratedProposal, AppError> {
    info!(
        "Generating proposal: mode={:?}, tone={}, category={}, target={} words",
        mode,
        request.tone,
        request.experience_category.as_str(),
        request.target_word_count
    );

    match mode {
        GenerationMode::Template => generate_local(request, settings),
        GenerationMode::Remote => generate_remote(request, settings, remote).await,
    }
}

fn from_template(
    request: &ProposalRequest,
    settings: &UserSettings,
    extraction: ExtractionResult,
) -> Result<GeneratedProposal, AppError> {
    let style = SynthesisStyle::from(settings);
    let draft = synthesize_with_style(request, &extraction, &style)?;
    let content = fit(&draft, request.target_word_count);

    Ok(GeneratedProposal {
        word_count: word_count(&content),
        content,
        source: ProposalSource::Template,
        notice: None,
        extraction,
    })
}

async fn generate_remote(
    request: &ProposalRequest,
    settings: &UserSettings,
    remote: RemoteCompletion<'_>,
) -> Result<GeneratedProposal, AppError> {
    ensure_background(request, settings)?;
    let api_key = remote
        .credential
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .ok_or(AppError::MissingCredential)?;

    let extraction = extract(&request.job_description, &request.experience_category);
    let completion_request =
        build_completion_request(request, &extraction, settings, remote.config)?;

    match remote.client.complete(api_key, &completion_request).await {
        Ok(text) => {
            let content = fit(text.trim(), request.target_word_count);
            info!("Remote completion produced {} words", word_count(&content));
            Ok(GeneratedProposal {
                word_count: word_count(&content),
                content,
                source: ProposalSource::Remote,
                notice: None,
                extraction,
            })
        }
        Err(e) => match remote.config.failure_policy {
            FailurePolicy::Fallback => {
                warn!("Remote completion failed, using template path instead: {e}");
                let mut proposal = from_template(request, settings, extraction)?;
                proposal.notice = Some(FALLBACK_NOTICE.to_string());
                Ok(proposal)
            }
            FailurePolicy::Propagate => Err(AppError::ExternalService(e.to_string())),
        },
    }
}

/// Builds the one-shot completion call: system instruction shaped by settings, and a user
/// instruction embedding every request field plus the extraction hints.
pub fn build_completion_request(
    request: &ProposalRequest,
    extraction: &ExtractionResult,
    settings: &UserSettings,
    config: &CompletionConfig,
) -> Result<CompletionRequest, AppError> {
    let mut system = vec![PROPOSAL_SYSTEM, PLAIN_TEXT_INSTRUCTION];
    if settings.prefer_concise_output {
        system.push(CONCISE_INSTRUCTION);
    }
    system.push(if settings.avoid_bulleted_lists {
        PROSE_ONLY_INSTRUCTION
    } else {
        QUESTIONS_AS_LIST_INSTRUCTION
    });

    let experience = if request.experience_background.is_empty() {
        settings.bio.trim()
    } else {
        request.experience_background.as_str()
    };
    let communication = match request.communication_preference {
        CommunicationPreference::Call => CALL_NEXT_STEP,
        CommunicationPreference::Chat => CHAT_NEXT_STEP,
    };
    let skills = extraction.matched_skills.join(", ");
    let benefits = extraction.inferred_benefits.join("; ");
    let target_words = request.target_word_count.to_string();

    let prompt = render_template(
        PROPOSAL_PROMPT_TEMPLATE,
        &[
            ("job_title", request.job_title.as_str()),
            ("job_description", or_not_provided(&request.job_description)),
            ("client_requirements", or_not_provided(&request.client_requirements)),
            ("experience", or_not_provided(experience)),
            ("tone", request.tone.as_str()),
            ("category", category_description(&request.experience_category)),
            ("communication", communication),
            ("skills", or_not_provided(&skills)),
            ("benefits", or_not_provided(&benefits)),
            ("needs_summary", extraction.needs_summary.as_str()),
            ("target_words", target_words.as_str()),
            ("display_name", settings.display_name.trim()),
        ],
    )?;

    Ok(CompletionRequest {
        system: system.join(" "),
        prompt,
        temperature: config.temperature,
        max_tokens: config.max_tokens,
    })
}

fn or_not_provided(value: &str) -> &str {
    if value.trim().is_empty() {
        NOT_PROVIDED
    } else {
        value
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
