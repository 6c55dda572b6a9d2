// src/state.rs
use std::sync::Arc;

use crate::services::chatbot::QueryMatcher;
use crate::services::metrics_manager::MetricsManager;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub matcher: QueryMatcher<'static>,
    pub metrics: MetricsManager,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_matcher(QueryMatcher::builtin())
    }

    pub fn with_matcher(matcher: QueryMatcher<'static>) -> Self {
        Self {
            matcher,
            metrics: MetricsManager::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
