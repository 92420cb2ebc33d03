//! Saved proposal list, stored newest first as one JSON array.

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::settings::SavedProposal;
use crate::persistence::store::KeyValueStore;
use crate::persistence::SAVED_PROPOSALS_KEY;

/// Held across every read-modify-write of the saved list so concurrent saves and deletes
/// never overwrite each other or hand out the same id.
static SAVED_LIST_LOCK: Mutex<()> = Mutex::const_new(());

/// Returns the saved list. A corrupt stored value reads as an empty list.
pub async fn list_saved(store: &dyn KeyValueStore) -> Result<Vec<SavedProposal>, AppError> {
    let Some(raw) = store.get(SAVED_PROPOSALS_KEY).await? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str::<Vec<SavedProposal>>(&raw) {
        Ok(list) => Ok(list),
        Err(e) => {
            warn!("Stored proposal list is not valid JSON, treating as empty: {e}");
            Ok(Vec::new())
        }
    }
}

pub async fn save_proposal(
    store: &dyn KeyValueStore,
    content: &str,
) -> Result<SavedProposal, AppError> {
    save_proposal_at(store, content, Utc::now()).await
}

/// Prepends `content` to the list. Ids are Unix-millis timestamps, bumped past the newest
/// existing id so they stay strictly increasing.
pub async fn save_proposal_at(
    store: &dyn KeyValueStore,
    content: &str,
    now: DateTime<Utc>,
) -> Result<SavedProposal, AppError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(AppError::Validation(
            "Cannot save an empty proposal".to_string(),
        ));
    }

    let _guard = SAVED_LIST_LOCK.lock().await;
    let mut list = list_saved(store).await?;
    let newest = list
        .iter()
        .filter_map(|p| p.id.parse::<i64>().ok())
        .max();
    let id = match newest {
        Some(max) if max >= now.timestamp_millis() => max + 1,
        _ => now.timestamp_millis(),
    };

    let saved = SavedProposal {
        id: id.to_string(),
        content: content.to_string(),
        date: now.format("%Y-%m-%d").to_string(),
    };
    list.insert(0, saved.clone());
    write_list(store, &list).await?;

    info!("Saved proposal {} ({} total)", saved.id, list.len());
    Ok(saved)
}

pub async fn get_saved(store: &dyn KeyValueStore, id: &str) -> Result<SavedProposal, AppError> {
    list_saved(store)
        .await?
        .into_iter()
        .find(|p| p.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Saved proposal {id} not found")))
}

pub async fn delete_saved(store: &dyn KeyValueStore, id: &str) -> Result<(), AppError> {
    let _guard = SAVED_LIST_LOCK.lock().await;
    let mut list = list_saved(store).await?;
    let before = list.len();
    list.retain(|p| p.id != id);
    if list.len() == before {
        return Err(AppError::NotFound(format!("Saved proposal {id} not found")));
    }
    write_list(store, &list).await?;
    info!("Deleted saved proposal {id}");
    Ok(())
}

async fn write_list(store: &dyn KeyValueStore, list: &[SavedProposal]) -> Result<(), AppError> {
    let raw = serde_json::to_string(list)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize saved list: {e}")))?;
    store.set(SAVED_PROPOSALS_KEY, &raw).await
}
