//! The single completion-service credential. Stored as a plain string and never logged.

use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::persistence::store::KeyValueStore;
use crate::persistence::{CREDENTIAL_KEY, LEGACY_CREDENTIAL_KEYS};

const MIN_CREDENTIAL_LEN: usize = 10;

/// What the status endpoint reports. The key itself is never returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialStatus {
    pub configured: bool,
}

pub async fn store_credential(store: &dyn KeyValueStore, key: &str) -> Result<(), AppError> {
    let key = key.trim();
    if key.is_empty() {
        return Err(AppError::Validation("Please enter a valid API key".to_string()));
    }
    if key.chars().count() < MIN_CREDENTIAL_LEN {
        return Err(AppError::Validation(
            "The provided API key seems too short".to_string(),
        ));
    }
    store.set(CREDENTIAL_KEY, key).await?;
    info!("Completion credential stored");
    Ok(())
}

/// The current key, falling back to the legacy keys in order.
pub async fn load_credential(store: &dyn KeyValueStore) -> Result<Option<String>, AppError> {
    for key in std::iter::once(CREDENTIAL_KEY).chain(LEGACY_CREDENTIAL_KEYS) {
        if let Some(value) = store.get(key).await?.filter(|v| !v.trim().is_empty()) {
            return Ok(Some(value));
        }
    }
    Ok(None)
}

/// Clears the current key and every legacy key.
pub async fn remove_credential(store: &dyn KeyValueStore) -> Result<(), AppError> {
    for key in std::iter::once(CREDENTIAL_KEY).chain(LEGACY_CREDENTIAL_KEYS) {
        store.remove(key).await?;
    }
    info!("Completion credential removed");
    Ok(())
}

pub async fn credential_status(store: &dyn KeyValueStore) -> Result<CredentialStatus, AppError> {
    Ok(CredentialStatus {
        configured: load_credential(store).await?.is_some(),
    })
}
