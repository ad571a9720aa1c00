//! Routes API.

use crate::client::EmqxClient;
use crate::error::Result;
use crate::path::ApiPath;
use crate::types::{ApiResponse, Route};

/// Routes API client.
pub struct RoutesApi {
    client: EmqxClient,
}

impl RoutesApi {
    pub(crate) fn new(client: EmqxClient) -> Self {
        Self { client }
    }

    /// List all routes in the cluster.
    pub async fn list(&self) -> Result<ApiResponse<Vec<Route>>> {
        self.client.get(ApiPath::v3().push("routes").dir()).await
    }

    /// Get the routes of one topic.
    ///
    /// A topic containing `/` is sent as a single encoded segment.
    pub async fn get(&self, topic: &str) -> Result<ApiResponse<Vec<Route>>> {
        self.client
            .get(ApiPath::v3().push("routes").push(topic))
            .await
    }
}
