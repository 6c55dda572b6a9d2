use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::chatbot::MatchSource;

#[derive(Debug, Default, Clone, Serialize)]
pub struct MetricsData {
    pub source_usage: HashMap<String, u64>,
    pub category_usage: HashMap<String, u64>,
}

/// Counts which matcher branch answered. Message content is never recorded.
#[derive(Debug, Clone)]
pub struct MetricsManager {
    inner: Arc<RwLock<MetricsData>>,
}

impl Default for MetricsManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsManager {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MetricsData::default())),
        }
    }

    pub async fn record(&self, source: MatchSource) {
        let mut data = self.inner.write().await;
        *data.source_usage.entry(source.label().to_string()).or_insert(0) += 1;
        if let MatchSource::Category(name) = source {
            *data.category_usage.entry(name.to_string()).or_insert(0) += 1;
        }
    }

    pub async fn get_metrics(&self) -> MetricsData {
        self.inner.read().await.clone()
    }
}
