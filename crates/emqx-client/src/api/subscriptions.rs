//! Subscriptions API.

use crate::client::EmqxClient;
use crate::error::Result;
use crate::path::ApiPath;
use crate::types::{ApiResponse, Subscription};

/// Subscriptions API client.
pub struct SubscriptionsApi {
    client: EmqxClient,
}

impl SubscriptionsApi {
    pub(crate) fn new(client: EmqxClient) -> Self {
        Self { client }
    }

    /// List all subscriptions in the cluster.
    pub async fn list(&self) -> Result<ApiResponse<Vec<Subscription>>> {
        self.client
            .get(ApiPath::v3().push("subscriptions").dir())
            .await
    }

    /// List subscriptions of one client across the cluster.
    pub async fn list_for_client(&self, client_id: &str) -> Result<ApiResponse<Vec<Subscription>>> {
        self.client
            .get(ApiPath::v3().push("subscriptions").push(client_id))
            .await
    }

    /// List subscriptions on one node.
    pub async fn list_on_node(&self, node: &str) -> Result<ApiResponse<Vec<Subscription>>> {
        self.client
            .get(
                ApiPath::v3()
                    .push("nodes")
                    .push(node)
                    .push("subscriptions")
                    .dir(),
            )
            .await
    }

    /// List subscriptions of one client on one node.
    pub async fn list_for_client_on_node(
        &self,
        node: &str,
        client_id: &str,
    ) -> Result<ApiResponse<Vec<Subscription>>> {
        self.client
            .get(
                ApiPath::v3()
                    .push("nodes")
                    .push(node)
                    .push("subscriptions")
                    .push(client_id),
            )
            .await
    }
}
