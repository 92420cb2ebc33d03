//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::extractor::{extract, ExtractionResult};
use crate::generation::generator::{
    generate_proposal, GeneratedProposal, GenerationMode, RemoteCompletion,
};
use crate::models::proposal::{ProposalForm, ProposalRequest};
use crate::persistence::credential::load_credential;
use crate::persistence::settings::load_settings;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

/// The form fields plus the path to generate with.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(flatten)]
    pub form: ProposalForm,
    #[serde(default)]
    pub mode: GenerationMode,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/proposals/generate
///
/// Validates the form, loads settings (and the credential for remote mode), and runs the
/// generation pipeline. Validation failures return before any text is produced.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(body): Json<GenerateRequest>,
) -> Result<Json<GeneratedProposal>, AppError> {
    let request = ProposalRequest::try_from(body.form)?;
    let settings = load_settings(state.store.as_ref()).await?;

    let credential = match body.mode {
        GenerationMode::Remote => load_credential(state.store.as_ref()).await?,
        GenerationMode::Template => None,
    };

    let proposal = generate_proposal(
        &request,
        &settings,
        body.mode,
        RemoteCompletion {
            client: state.completion.as_ref(),
            config: &state.config.completion,
            credential: credential.as_deref(),
        },
    )
    .await?;

    info!(
        "Proposal generated: source={:?}, words={}",
        proposal.source, proposal.word_count
    );
    Ok(Json(proposal))
}

/// POST /api/v1/proposals/extract
///
/// Extraction preview: the skills, benefits, and needs summary the synthesizer would use.
pub async fn handle_extract(
    Json(form): Json<ProposalForm>,
) -> Result<Json<ExtractionResult>, AppError> {
    let request = ProposalRequest::try_from(form)?;
    Ok(Json(extract(
        &request.job_description,
        &request.experience_category,
    )))
}
