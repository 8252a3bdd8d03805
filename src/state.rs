use crate::models::SparkState;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared handle over the single session record. The mutex serializes all
/// reads and mutations, so the core never sees concurrent writers.
#[derive(Clone)]
pub struct AppState {
    pub spark: Arc<Mutex<SparkState>>,
}

impl AppState {
    pub fn new(spark: SparkState) -> Self {
        Self {
            spark: Arc::new(Mutex::new(spark)),
        }
    }
}
