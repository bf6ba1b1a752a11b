//! Application state for the permit API

use progress_engine::ProgressEngine;

use crate::config::Config;

pub struct AppState {
    pub engine: ProgressEngine,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        tracing::info!(
            "Tracking {} document categories",
            config.categories.len()
        );
        Self {
            engine: ProgressEngine::with_categories(config.categories),
        }
    }
}
