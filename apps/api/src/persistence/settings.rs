use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::settings::UserSettings;
use crate::persistence::store::KeyValueStore;
use crate::persistence::SETTINGS_KEY;

/// Stored settings, or the defaults when nothing usable is stored.
pub async fn load_settings(store: &dyn KeyValueStore) -> Result<UserSettings, AppError> {
    let Some(raw) = store.get(SETTINGS_KEY).await? else {
        return Ok(UserSettings::default());
    };
    match serde_json::from_str::<UserSettings>(&raw) {
        Ok(settings) => Ok(settings),
        Err(e) => {
            warn!("Stored settings are not valid JSON, using defaults: {e}");
            Ok(UserSettings::default())
        }
    }
}

pub async fn save_settings(
    store: &dyn KeyValueStore,
    mut settings: UserSettings,
) -> Result<UserSettings, AppError> {
    settings.display_name = settings.display_name.trim().to_string();
    settings.bio = settings.bio.trim().to_string();
    if settings.display_name.is_empty() {
        return Err(AppError::Validation(
            "displayName cannot be empty".to_string(),
        ));
    }

    let raw = serde_json::to_string(&settings)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize settings: {e}")))?;
    store.set(SETTINGS_KEY, &raw).await?;
    info!("User settings saved");
    Ok(settings)
}
