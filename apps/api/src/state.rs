use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionClient;
use crate::persistence::store::KeyValueStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Key-value backend for saved proposals, settings, and the credential.
    /// `MemoryStore` unless `REDIS_URL` is set.
    pub store: Arc<dyn KeyValueStore>,
    /// Remote completion client. Tests swap in a stub.
    pub completion: Arc<dyn CompletionClient>,
    pub config: Config,
}
