use std::sync::Arc;
use crate::{config::AppConfig, sentiment::SentimentClassifier};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    // Léxico de solo lectura: se comparte sin locks.
    pub classifier: Arc<SentimentClassifier>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            classifier: Arc::new(SentimentClassifier::new()),
        }
    }
}
