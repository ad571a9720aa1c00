//! Cluster API: the API catalog and per-node broker info.

use crate::client::EmqxClient;
use crate::error::Result;
use crate::path::ApiPath;
use crate::types::{ApiDescriptor, ApiResponse, BrokerInfo};

/// Cluster API client.
pub struct ClusterApi {
    client: EmqxClient,
}

impl ClusterApi {
    pub(crate) fn new(client: EmqxClient) -> Self {
        Self { client }
    }

    /// List every endpoint the management API exposes.
    pub async fn apis(&self) -> Result<ApiResponse<Vec<ApiDescriptor>>> {
        self.client.get(ApiPath::v3().dir()).await
    }

    /// List broker info of all nodes in the cluster.
    pub async fn list(&self) -> Result<ApiResponse<Vec<BrokerInfo>>> {
        self.client.get(ApiPath::v3().push("brokers").dir()).await
    }

    /// Get broker info of one node.
    pub async fn get(&self, node: &str) -> Result<ApiResponse<BrokerInfo>> {
        self.client
            .get(ApiPath::v3().push("brokers").push(node))
            .await
    }
}
