//! Plugins API.

use crate::client::EmqxClient;
use crate::error::Result;
use crate::path::ApiPath;
use crate::types::{Ack, ApiResponse, NodePlugins, Plugin};

/// Plugins API client.
pub struct PluginsApi {
    client: EmqxClient,
}

impl PluginsApi {
    pub(crate) fn new(client: EmqxClient) -> Self {
        Self { client }
    }

    /// List plugins of every node.
    pub async fn list(&self) -> Result<ApiResponse<Vec<NodePlugins>>> {
        self.client.get(ApiPath::v3().push("plugins").dir()).await
    }

    /// List plugins of one node.
    pub async fn list_on_node(&self, node: &str) -> Result<ApiResponse<Vec<Plugin>>> {
        self.client
            .get(ApiPath::v3().push("nodes").push(node).push("plugins").dir())
            .await
    }

    /// Load (start) a plugin on a node.
    pub async fn load(&self, node: &str, plugin: &str) -> Result<Ack> {
        self.client.put(Self::plugin_path(node, plugin, "load")).await
    }

    /// Unload (stop) a plugin on a node.
    pub async fn unload(&self, node: &str, plugin: &str) -> Result<Ack> {
        self.client.put(Self::plugin_path(node, plugin, "unload")).await
    }

    fn plugin_path(node: &str, plugin: &str, action: &str) -> ApiPath {
        ApiPath::v3()
            .push("nodes")
            .push(node)
            .push("plugins")
            .push(plugin)
            .push(action)
    }
}
