//! Sessions API.

use crate::client::EmqxClient;
use crate::error::Result;
use crate::path::ApiPath;
use crate::types::{ApiResponse, Session};

/// Sessions API client.
pub struct SessionsApi {
    client: EmqxClient,
}

impl SessionsApi {
    pub(crate) fn new(client: EmqxClient) -> Self {
        Self { client }
    }

    /// List all sessions in the cluster.
    pub async fn list(&self) -> Result<ApiResponse<Vec<Session>>> {
        self.client.get(ApiPath::v3().push("sessions").dir()).await
    }

    /// Get a client's session anywhere in the cluster.
    pub async fn get(&self, client_id: &str) -> Result<ApiResponse<Vec<Session>>> {
        self.client
            .get(ApiPath::v3().push("sessions").push(client_id))
            .await
    }

    /// List sessions on one node.
    pub async fn list_on_node(&self, node: &str) -> Result<ApiResponse<Vec<Session>>> {
        self.client
            .get(ApiPath::v3().push("nodes").push(node).push("sessions").dir())
            .await
    }

    /// Get a client's session on one node.
    pub async fn get_on_node(
        &self,
        node: &str,
        client_id: &str,
    ) -> Result<ApiResponse<Vec<Session>>> {
        self.client
            .get(
                ApiPath::v3()
                    .push("nodes")
                    .push(node)
                    .push("sessions")
                    .push(client_id),
            )
            .await
    }
}
