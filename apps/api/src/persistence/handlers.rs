//! Axum route handlers for saved proposals, settings, and the credential.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::settings::{SavedProposal, UserSettings};
use crate::persistence::credential::{
    credential_status, remove_credential, store_credential, CredentialStatus,
};
use crate::persistence::proposals::{delete_saved, get_saved, list_saved, save_proposal};
use crate::persistence::settings::{load_settings, save_settings};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SaveProposalRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreCredentialRequest {
    pub api_key: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Saved proposals
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/saved
pub async fn handle_list_saved(
    State(state): State<AppState>,
) -> Result<Json<Vec<SavedProposal>>, AppError> {
    Ok(Json(list_saved(state.store.as_ref()).await?))
}

/// POST /api/v1/saved
pub async fn handle_save_proposal(
    State(state): State<AppState>,
    Json(request): Json<SaveProposalRequest>,
) -> Result<(StatusCode, Json<SavedProposal>), AppError> {
    let saved = save_proposal(state.store.as_ref(), &request.content).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// GET /api/v1/saved/:id
pub async fn handle_get_saved(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SavedProposal>, AppError> {
    Ok(Json(get_saved(state.store.as_ref(), &id).await?))
}

/// DELETE /api/v1/saved/:id
pub async fn handle_delete_saved(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    delete_saved(state.store.as_ref(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ────────────────────────────────────────────────────────────────────────────
// Settings
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/settings
pub async fn handle_get_settings(
    State(state): State<AppState>,
) -> Result<Json<UserSettings>, AppError> {
    Ok(Json(load_settings(state.store.as_ref()).await?))
}

/// PUT /api/v1/settings
///
/// Missing fields take their default values.
pub async fn handle_put_settings(
    State(state): State<AppState>,
    Json(settings): Json<UserSettings>,
) -> Result<Json<UserSettings>, AppError> {
    Ok(Json(save_settings(state.store.as_ref(), settings).await?))
}

// ────────────────────────────────────────────────────────────────────────────
// Credential
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/credential
pub async fn handle_credential_status(
    State(state): State<AppState>,
) -> Result<Json<CredentialStatus>, AppError> {
    Ok(Json(credential_status(state.store.as_ref()).await?))
}

/// PUT /api/v1/credential
pub async fn handle_store_credential(
    State(state): State<AppState>,
    Json(request): Json<StoreCredentialRequest>,
) -> Result<Json<CredentialStatus>, AppError> {
    store_credential(state.store.as_ref(), &request.api_key).await?;
    Ok(Json(CredentialStatus { configured: true }))
}

/// DELETE /api/v1/credential
pub async fn handle_remove_credential(
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    remove_credential(state.store.as_ref()).await?;
    Ok(StatusCode::NO_CONTENT)
}
