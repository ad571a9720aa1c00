//! Nodes API.

use crate::client::EmqxClient;
use crate::error::Result;
use crate::path::ApiPath;
use crate::types::{ApiResponse, NodeStats};

/// Nodes API client.
pub struct NodesApi {
    client: EmqxClient,
}

impl NodesApi {
    pub(crate) fn new(client: EmqxClient) -> Self {
        Self { client }
    }

    /// List runtime statistics of all nodes.
    pub async fn list(&self) -> Result<ApiResponse<Vec<NodeStats>>> {
        self.client.get(ApiPath::v3().push("nodes").dir()).await
    }

    /// Get runtime statistics of one node.
    pub async fn get(&self, node: &str) -> Result<ApiResponse<NodeStats>> {
        self.client.get(ApiPath::v3().push("nodes").push(node)).await
    }
}
