//! Metrics API.

use crate::client::EmqxClient;
use crate::error::Result;
use crate::path::ApiPath;
use crate::types::{ApiResponse, Metrics, NodeMetrics};

/// Metrics API client.
pub struct MetricsApi {
    client: EmqxClient,
}

impl MetricsApi {
    pub(crate) fn new(client: EmqxClient) -> Self {
        Self { client }
    }

    /// List metrics of every node.
    pub async fn list(&self) -> Result<ApiResponse<Vec<NodeMetrics>>> {
        self.client.get(ApiPath::v3().push("metrics").dir()).await
    }

    /// Get metrics of one node.
    pub async fn get(&self, node: &str) -> Result<ApiResponse<Metrics>> {
        self.client
            .get(ApiPath::v3().push("nodes").push(node).push("metrics").dir())
            .await
    }
}
