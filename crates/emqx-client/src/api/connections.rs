//! Connections API.

use crate::client::EmqxClient;
use crate::error::Result;
use crate::path::ApiPath;
use crate::types::{ApiResponse, Connection};

/// Connections API client.
pub struct ConnectionsApi {
    client: EmqxClient,
}

impl ConnectionsApi {
    pub(crate) fn new(client: EmqxClient) -> Self {
        Self { client }
    }

    /// List all connections in the cluster.
    pub async fn list(&self) -> Result<ApiResponse<Vec<Connection>>> {
        self.client.get(ApiPath::v3().push("connections").dir()).await
    }

    /// List connections on one node.
    pub async fn list_on_node(&self, node: &str) -> Result<ApiResponse<Vec<Connection>>> {
        self.client
            .get(ApiPath::v3().push("nodes").push(node).push("connections"))
            .await
    }

    /// Look up a client's connection anywhere in the cluster.
    pub async fn get(&self, client_id: &str) -> Result<ApiResponse<Vec<Connection>>> {
        self.client
            .get(ApiPath::v3().push("connections").push(client_id))
            .await
    }

    /// Look up a client's connection on one node.
    pub async fn get_on_node(
        &self,
        node: &str,
        client_id: &str,
    ) -> Result<ApiResponse<Vec<Connection>>> {
        self.client
            .get(
                ApiPath::v3()
                    .push("nodes")
                    .push(node)
                    .push("connections")
                    .push(client_id),
            )
            .await
    }
}
