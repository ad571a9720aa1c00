//! Listeners API.

use crate::client::EmqxClient;
use crate::error::Result;
use crate::path::ApiPath;
use crate::types::{ApiResponse, Listener, NodeListeners};

/// Listeners API client.
pub struct ListenersApi {
    client: EmqxClient,
}

impl ListenersApi {
    pub(crate) fn new(client: EmqxClient) -> Self {
        Self { client }
    }

    /// List listeners of every node.
    pub async fn list(&self) -> Result<ApiResponse<Vec<NodeListeners>>> {
        self.client.get(ApiPath::v3().push("listeners").dir()).await
    }

    /// List listeners of one node.
    pub async fn list_on_node(&self, node: &str) -> Result<ApiResponse<Vec<Listener>>> {
        self.client
            .get(ApiPath::v3().push("nodes").push(node).push("listeners").dir())
            .await
    }
}
