use std::sync::Arc;

use crate::config::ServiceConfig;

/// Shared application state, injected into all route handlers via Axum state.
///
/// Read-only: assessment sessions travel in request bodies, never here.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
}
