//! API endpoint implementations.
//!
//! Endpoints are grouped per resource area, each reachable from an accessor
//! on [`EmqxClient`]. The [`Emqx`] trait exposes the same operations as one
//! flat capability set so callers can swap in another implementation.

mod cluster;
mod connections;
mod listeners;
mod metrics;
mod mqtt;
mod nodes;
mod plugins;
mod routes;
mod sessions;
mod subscriptions;

pub use cluster::ClusterApi;
pub use connections::ConnectionsApi;
pub use listeners::ListenersApi;
pub use metrics::MetricsApi;
pub use mqtt::MqttApi;
pub use nodes::NodesApi;
pub use plugins::PluginsApi;
pub use routes::RoutesApi;
pub use sessions::SessionsApi;
pub use subscriptions::SubscriptionsApi;

use async_trait::async_trait;

use crate::client::EmqxClient;
use crate::error::Result;
use crate::types::{
    Ack, ApiDescriptor, ApiResponse, BrokerInfo, Connection, Listener, Metrics, NodeListeners,
    NodeMetrics, NodePlugins, NodeStats, Plugin, PublishRequest, Route, Session,
    SubscribeRequest, Subscription, UnsubscribeRequest,
};

/// The EMQX management API as a capability set.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait Emqx: Send + Sync {
    /// `GET api/v3/`
    async fn list_all_api(&self) -> Result<ApiResponse<Vec<ApiDescriptor>>>;

    /// `GET api/v3/brokers/`
    async fn list_cluster(&self) -> Result<ApiResponse<Vec<BrokerInfo>>>;

    /// `GET api/v3/brokers/{node}`
    async fn get_node_info(&self, node: &str) -> Result<ApiResponse<BrokerInfo>>;

    /// `GET api/v3/nodes/`
    async fn list_node_stats(&self) -> Result<ApiResponse<Vec<NodeStats>>>;

    /// `GET api/v3/nodes/{node}`
    async fn get_node_stat(&self, node: &str) -> Result<ApiResponse<NodeStats>>;

    /// `GET api/v3/connections/`
    async fn list_cluster_connections(&self) -> Result<ApiResponse<Vec<Connection>>>;

    /// `GET api/v3/nodes/{node}/connections`
    async fn list_node_connections(&self, node: &str) -> Result<ApiResponse<Vec<Connection>>>;

    /// `GET api/v3/connections/{clientid}`
    async fn get_cluster_connection(&self, client_id: &str)
    -> Result<ApiResponse<Vec<Connection>>>;

    /// `GET api/v3/nodes/{node}/connections/{clientid}`
    async fn get_node_connection(
        &self,
        node: &str,
        client_id: &str,
    ) -> Result<ApiResponse<Vec<Connection>>>;

    /// `GET api/v3/sessions/`
    async fn list_cluster_sessions(&self) -> Result<ApiResponse<Vec<Session>>>;

    /// `GET api/v3/sessions/{clientid}`
    async fn get_cluster_session(&self, client_id: &str) -> Result<ApiResponse<Vec<Session>>>;

    /// `GET api/v3/nodes/{node}/sessions/`
    async fn list_node_sessions(&self, node: &str) -> Result<ApiResponse<Vec<Session>>>;

    /// `GET api/v3/nodes/{node}/sessions/{clientid}`
    async fn get_node_session(
        &self,
        node: &str,
        client_id: &str,
    ) -> Result<ApiResponse<Vec<Session>>>;

    /// `GET api/v3/subscriptions/`
    async fn list_cluster_subscriptions(&self) -> Result<ApiResponse<Vec<Subscription>>>;

    /// `GET api/v3/subscriptions/{clientid}`
    async fn list_client_subscriptions(
        &self,
        client_id: &str,
    ) -> Result<ApiResponse<Vec<Subscription>>>;

    /// `GET api/v3/nodes/{node}/subscriptions/`
    async fn list_node_subscriptions(&self, node: &str)
    -> Result<ApiResponse<Vec<Subscription>>>;

    /// `GET api/v3/nodes/{node}/subscriptions/{clientid}`
    async fn list_node_client_subscriptions(
        &self,
        node: &str,
        client_id: &str,
    ) -> Result<ApiResponse<Vec<Subscription>>>;

    /// `GET api/v3/routes/`
    async fn list_routes(&self) -> Result<ApiResponse<Vec<Route>>>;

    /// `GET api/v3/routes/{topic}`
    async fn get_topic_route(&self, topic: &str) -> Result<ApiResponse<Vec<Route>>>;

    /// `POST api/v3/mqtt/publish`
    async fn publish_message(&self, request: &PublishRequest) -> Result<Ack>;

    /// `POST api/v3/mqtt/subscribe`
    async fn create_subscription(&self, request: &SubscribeRequest) -> Result<Ack>;

    /// `POST api/v3/mqtt/unsubscribe`
    async fn unsubscribe(&self, request: &UnsubscribeRequest) -> Result<Ack>;

    /// `GET api/v3/plugins/`
    async fn list_cluster_plugins(&self) -> Result<ApiResponse<Vec<NodePlugins>>>;

    /// `GET api/v3/nodes/{node}/plugins/`
    async fn list_node_plugins(&self, node: &str) -> Result<ApiResponse<Vec<Plugin>>>;

    /// `PUT api/v3/nodes/{node}/plugins/{plugin}/load`
    async fn start_node_plugin(&self, node: &str, plugin: &str) -> Result<Ack>;

    /// `PUT api/v3/nodes/{node}/plugins/{plugin}/unload`
    async fn stop_node_plugin(&self, node: &str, plugin: &str) -> Result<Ack>;

    /// `GET api/v3/listeners/`
    async fn list_cluster_listeners(&self) -> Result<ApiResponse<Vec<NodeListeners>>>;

    /// `GET api/v3/nodes/{node}/listeners/`
    async fn list_node_listeners(&self, node: &str) -> Result<ApiResponse<Vec<Listener>>>;

    /// `GET api/v3/metrics/`
    async fn list_cluster_metrics(&self) -> Result<ApiResponse<Vec<NodeMetrics>>>;

    /// `GET api/v3/nodes/{node}/metrics/`
    async fn get_node_metrics(&self, node: &str) -> Result<ApiResponse<Metrics>>;
}

#[async_trait]
impl Emqx for EmqxClient {
    async fn list_all_api(&self) -> Result<ApiResponse<Vec<ApiDescriptor>>> {
        self.cluster().apis().await
    }

    async fn list_cluster(&self) -> Result<ApiResponse<Vec<BrokerInfo>>> {
        self.cluster().list().await
    }

    async fn get_node_info(&self, node: &str) -> Result<ApiResponse<BrokerInfo>> {
        self.cluster().get(node).await
    }

    async fn list_node_stats(&self) -> Result<ApiResponse<Vec<NodeStats>>> {
        self.nodes().list().await
    }

    async fn get_node_stat(&self, node: &str) -> Result<ApiResponse<NodeStats>> {
        self.nodes().get(node).await
    }

    async fn list_cluster_connections(&self) -> Result<ApiResponse<Vec<Connection>>> {
        self.connections().list().await
    }

    async fn list_node_connections(&self, node: &str) -> Result<ApiResponse<Vec<Connection>>> {
        self.connections().list_on_node(node).await
    }

    async fn get_cluster_connection(
        &self,
        client_id: &str,
    ) -> Result<ApiResponse<Vec<Connection>>> {
        self.connections().get(client_id).await
    }

    async fn get_node_connection(
        &self,
        node: &str,
        client_id: &str,
    ) -> Result<ApiResponse<Vec<Connection>>> {
        self.connections().get_on_node(node, client_id).await
    }

    async fn list_cluster_sessions(&self) -> Result<ApiResponse<Vec<Session>>> {
        self.sessions().list().await
    }

    async fn get_cluster_session(&self, client_id: &str) -> Result<ApiResponse<Vec<Session>>> {
        self.sessions().get(client_id).await
    }

    async fn list_node_sessions(&self, node: &str) -> Result<ApiResponse<Vec<Session>>> {
        self.sessions().list_on_node(node).await
    }

    async fn get_node_session(
        &self,
        node: &str,
        client_id: &str,
    ) -> Result<ApiResponse<Vec<Session>>> {
        self.sessions().get_on_node(node, client_id).await
    }

    async fn list_cluster_subscriptions(&self) -> Result<ApiResponse<Vec<Subscription>>> {
        self.subscriptions().list().await
    }

    async fn list_client_subscriptions(
        &self,
        client_id: &str,
    ) -> Result<ApiResponse<Vec<Subscription>>> {
        self.subscriptions().list_for_client(client_id).await
    }

    async fn list_node_subscriptions(
        &self,
        node: &str,
    ) -> Result<ApiResponse<Vec<Subscription>>> {
        self.subscriptions().list_on_node(node).await
    }

    async fn list_node_client_subscriptions(
        &self,
        node: &str,
        client_id: &str,
    ) -> Result<ApiResponse<Vec<Subscription>>> {
        self.subscriptions()
            .list_for_client_on_node(node, client_id)
            .await
    }

    async fn list_routes(&self) -> Result<ApiResponse<Vec<Route>>> {
        self.routes().list().await
    }

    async fn get_topic_route(&self, topic: &str) -> Result<ApiResponse<Vec<Route>>> {
        self.routes().get(topic).await
    }

    async fn publish_message(&self, request: &PublishRequest) -> Result<Ack> {
        self.mqtt().publish(request).await
    }

    async fn create_subscription(&self, request: &SubscribeRequest) -> Result<Ack> {
        self.mqtt().subscribe(request).await
    }

    async fn unsubscribe(&self, request: &UnsubscribeRequest) -> Result<Ack> {
        self.mqtt().unsubscribe(request).await
    }

    async fn list_cluster_plugins(&self) -> Result<ApiResponse<Vec<NodePlugins>>> {
        self.plugins().list().await
    }

    async fn list_node_plugins(&self, node: &str) -> Result<ApiResponse<Vec<Plugin>>> {
        self.plugins().list_on_node(node).await
    }

    async fn start_node_plugin(&self, node: &str, plugin: &str) -> Result<Ack> {
        self.plugins().load(node, plugin).await
    }

    async fn stop_node_plugin(&self, node: &str, plugin: &str) -> Result<Ack> {
        self.plugins().unload(node, plugin).await
    }

    async fn list_cluster_listeners(&self) -> Result<ApiResponse<Vec<NodeListeners>>> {
        self.listeners().list().await
    }

    async fn list_node_listeners(&self, node: &str) -> Result<ApiResponse<Vec<Listener>>> {
        self.listeners().list_on_node(node).await
    }

    async fn list_cluster_metrics(&self) -> Result<ApiResponse<Vec<NodeMetrics>>> {
        self.metrics().list().await
    }

    async fn get_node_metrics(&self, node: &str) -> Result<ApiResponse<Metrics>> {
        self.metrics().get(node).await
    }
}
