//! Shared state handed to every request handler.

use std::sync::Arc;

use crate::brain::PromptImprover;
use crate::database::PromptStore;

#[derive(Clone)]
pub struct AppState {
    /// Where transformed prompts are persisted
    pub store: Arc<dyn PromptStore>,
    /// Stateless classification + rendering pipeline
    pub improver: Arc<PromptImprover>,
    /// Expose underlying error messages in 500 responses
    pub debug: bool,
}

impl AppState {
    pub fn new(store: Arc<dyn PromptStore>, debug: bool) -> Self {
        Self {
            store,
            improver: Arc::new(PromptImprover::new()),
            debug,
        }
    }
}
