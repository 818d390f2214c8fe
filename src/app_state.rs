use crate::config::AppConfig;

/// Shared state handed to every handler.
///
/// Holds configuration only. Requests are fully independent, so there is
/// no mutable state to share or protect.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
}
