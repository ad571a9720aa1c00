//! Request and response types for the EMQX management API.
//!
//! These types mirror the broker's JSON. Response fields that are missing or
//! `null` decode to their default values.

use serde::{Deserialize, Deserializer, Serialize};

/// Decode a present field, mapping `null` to `T::default()`.
///
/// Missing keys are covered by `#[serde(default)]`; this covers explicit nulls.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// ─────────────────────────────────────────────────────────────────────────────
// Envelopes
// ─────────────────────────────────────────────────────────────────────────────

/// Envelope wrapping every data-bearing response.
///
/// `code` is the broker's own status. The client does not interpret it;
/// `0` conventionally means success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct ApiResponse<T> {
    /// Broker status code.
    pub code: i64,
    /// Endpoint-specific payload. Absent or `null` on error envelopes.
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: T,
    /// Error description attached by the broker, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Whether the broker reported success (`code == 0`).
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

/// Acknowledgement returned by action endpoints (publish, subscribe,
/// plugin load/unload).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    /// Broker status code.
    pub code: i64,
    /// Error description attached by the broker, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Ack {
    /// Whether the broker reported success (`code == 0`).
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Cluster & nodes
// ─────────────────────────────────────────────────────────────────────────────

/// One entry of the API catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiDescriptor {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub descr: String,
    #[serde(deserialize_with = "null_as_default")]
    pub method: String,
}

/// Broker info of one cluster node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrokerInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub datetime: String,
    #[serde(deserialize_with = "null_as_default")]
    pub node: String,
    #[serde(deserialize_with = "null_as_default")]
    pub node_status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub otp_release: String,
    /// Free-form broker description.
    #[serde(deserialize_with = "null_as_default")]
    pub sysdescr: String,
    #[serde(deserialize_with = "null_as_default")]
    pub uptime: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
}

/// Runtime statistics of one node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeStats {
    #[serde(deserialize_with = "null_as_default")]
    pub connections: i64,
    /// Load average over 1 minute.
    #[serde(deserialize_with = "null_as_default")]
    pub load1: String,
    /// Load average over 5 minutes.
    #[serde(deserialize_with = "null_as_default")]
    pub load5: String,
    /// Load average over 15 minutes.
    #[serde(deserialize_with = "null_as_default")]
    pub load15: String,
    #[serde(deserialize_with = "null_as_default")]
    pub max_fds: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub memory_total: String,
    #[serde(deserialize_with = "null_as_default")]
    pub memory_used: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub node: String,
    #[serde(deserialize_with = "null_as_default")]
    pub node_status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub otp_release: String,
    #[serde(deserialize_with = "null_as_default")]
    pub process_available: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub process_used: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub uptime: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Connections & sessions
// ─────────────────────────────────────────────────────────────────────────────

/// An MQTT connection known to the broker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Connection {
    #[serde(deserialize_with = "null_as_default")]
    pub clean_start: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub client_id: String,
    /// Erlang module handling the connection, e.g. `emqx_connection`.
    #[serde(deserialize_with = "null_as_default")]
    pub conn_mod: String,
    #[serde(deserialize_with = "null_as_default")]
    pub connected_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub heap_size: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub ipaddress: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_bridge: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub keepalive: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub mailbox_len: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub node: String,
    /// Client certificate subject, `nossl` without TLS.
    #[serde(deserialize_with = "null_as_default")]
    pub peercert: String,
    #[serde(deserialize_with = "null_as_default")]
    pub port: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub proto_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub proto_ver: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub recv_cnt: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub recv_msg: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub recv_oct: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub recv_pkt: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub reductions: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub send_cnt: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub send_msg: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub send_oct: i64,
    /// Bytes queued on the socket but not yet sent.
    #[serde(deserialize_with = "null_as_default")]
    pub send_pend: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub send_pkt: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    /// Broker zone the client was assigned to.
    #[serde(deserialize_with = "null_as_default")]
    pub zone: String,
}

/// An MQTT session held by the broker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    /// QoS 2 messages awaiting PUBREL.
    #[serde(deserialize_with = "null_as_default")]
    pub awaiting_rel_len: i64,
    /// Session binding, `local` or `remote`.
    #[serde(deserialize_with = "null_as_default")]
    pub binding: String,
    #[serde(deserialize_with = "null_as_default")]
    pub clean_start: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub client_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub deliver_msg: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub enqueue_msg: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub expiry_interval: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub heap_size: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub inflight_len: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub mailbox_len: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub max_awaiting_rel: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub max_inflight: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub max_mqueue: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub max_subscriptions: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub mqueue_dropped: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub mqueue_len: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub node: String,
    #[serde(deserialize_with = "null_as_default")]
    pub reductions: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub subscriptions_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Subscriptions & routes
// ─────────────────────────────────────────────────────────────────────────────

/// A topic subscription of one client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscription {
    #[serde(deserialize_with = "null_as_default")]
    pub client_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub node: String,
    #[serde(deserialize_with = "null_as_default")]
    pub qos: u8,
    #[serde(deserialize_with = "null_as_default")]
    pub topic: String,
}

/// A topic route entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Route {
    #[serde(deserialize_with = "null_as_default")]
    pub node: String,
    #[serde(deserialize_with = "null_as_default")]
    pub topic: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Publish / subscribe actions
// ─────────────────────────────────────────────────────────────────────────────

/// Request to publish a message on behalf of a client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishRequest {
    pub topic: String,
    pub payload: String,
    pub qos: u8,
    pub retain: bool,
    pub client_id: String,
}

/// Request to subscribe a client to a topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeRequest {
    pub topic: String,
    pub qos: u8,
    pub client_id: String,
}

/// Request to unsubscribe a client from a topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsubscribeRequest {
    pub topic: String,
    pub client_id: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Plugins
// ─────────────────────────────────────────────────────────────────────────────

/// A broker plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Plugin {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub active: bool,
}

/// Plugins of one node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodePlugins {
    #[serde(deserialize_with = "null_as_default")]
    pub node: String,
    #[serde(deserialize_with = "null_as_default")]
    pub plugins: Vec<Plugin>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Listeners
// ─────────────────────────────────────────────────────────────────────────────

/// Connection shutdown counters of a listener.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShutdownCount {
    #[serde(deserialize_with = "null_as_default")]
    pub closed: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub kicked: i64,
}

/// A network listener.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Listener {
    #[serde(deserialize_with = "null_as_default")]
    pub acceptors: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub current_conns: i64,
    /// Bind address, e.g. `0.0.0.0:1883`.
    #[serde(deserialize_with = "null_as_default")]
    pub listen_on: String,
    #[serde(deserialize_with = "null_as_default")]
    pub max_conns: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub protocol: String,
    /// Counters of connections closed by this listener, by reason.
    #[serde(deserialize_with = "null_as_default")]
    pub shutdown_count: ShutdownCount,
}

/// Listeners of one node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeListeners {
    #[serde(deserialize_with = "null_as_default")]
    pub node: String,
    #[serde(deserialize_with = "null_as_default")]
    pub listeners: Vec<Listener>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Metrics
// ─────────────────────────────────────────────────────────────────────────────

/// Packet, message and byte counters of a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metrics {
    #[serde(rename = "bytes/received", deserialize_with = "null_as_default")]
    pub bytes_received: i64,
    #[serde(rename = "bytes/sent", deserialize_with = "null_as_default")]
    pub bytes_sent: i64,

    #[serde(rename = "messages/received", deserialize_with = "null_as_default")]
    pub messages_received: i64,
    #[serde(rename = "messages/sent", deserialize_with = "null_as_default")]
    pub messages_sent: i64,
    #[serde(rename = "messages/dropped", deserialize_with = "null_as_default")]
    pub messages_dropped: i64,
    #[serde(rename = "messages/expired", deserialize_with = "null_as_default")]
    pub messages_expired: i64,
    #[serde(rename = "messages/forward", deserialize_with = "null_as_default")]
    pub messages_forward: i64,
    #[serde(rename = "messages/retained", deserialize_with = "null_as_default")]
    pub messages_retained: i64,
    #[serde(rename = "messages/qos0/received", deserialize_with = "null_as_default")]
    pub messages_qos0_received: i64,
    #[serde(rename = "messages/qos0/sent", deserialize_with = "null_as_default")]
    pub messages_qos0_sent: i64,
    #[serde(rename = "messages/qos1/received", deserialize_with = "null_as_default")]
    pub messages_qos1_received: i64,
    #[serde(rename = "messages/qos1/sent", deserialize_with = "null_as_default")]
    pub messages_qos1_sent: i64,
    #[serde(rename = "messages/qos2/received", deserialize_with = "null_as_default")]
    pub messages_qos2_received: i64,
    #[serde(rename = "messages/qos2/sent", deserialize_with = "null_as_default")]
    pub messages_qos2_sent: i64,
    #[serde(rename = "messages/qos2/dropped", deserialize_with = "null_as_default")]
    pub messages_qos2_dropped: i64,
    #[serde(rename = "messages/qos2/expired", deserialize_with = "null_as_default")]
    pub messages_qos2_expired: i64,

    #[serde(rename = "packets/received", deserialize_with = "null_as_default")]
    pub packets_received: i64,
    #[serde(rename = "packets/sent", deserialize_with = "null_as_default")]
    pub packets_sent: i64,
    #[serde(rename = "packets/auth", deserialize_with = "null_as_default")]
    pub packets_auth: i64,
    #[serde(rename = "packets/connect", deserialize_with = "null_as_default")]
    pub packets_connect: i64,
    #[serde(rename = "packets/connack", deserialize_with = "null_as_default")]
    pub packets_connack: i64,
    #[serde(rename = "packets/disconnect/received", deserialize_with = "null_as_default")]
    pub packets_disconnect_received: i64,
    #[serde(rename = "packets/disconnect/sent", deserialize_with = "null_as_default")]
    pub packets_disconnect_sent: i64,
    #[serde(rename = "packets/pingreq", deserialize_with = "null_as_default")]
    pub packets_pingreq: i64,
    #[serde(rename = "packets/pingresp", deserialize_with = "null_as_default")]
    pub packets_pingresp: i64,
    #[serde(rename = "packets/publish/received", deserialize_with = "null_as_default")]
    pub packets_publish_received: i64,
    #[serde(rename = "packets/publish/sent", deserialize_with = "null_as_default")]
    pub packets_publish_sent: i64,
    #[serde(rename = "packets/puback/received", deserialize_with = "null_as_default")]
    pub packets_puback_received: i64,
    #[serde(rename = "packets/puback/sent", deserialize_with = "null_as_default")]
    pub packets_puback_sent: i64,
    #[serde(rename = "packets/puback/missed", deserialize_with = "null_as_default")]
    pub packets_puback_missed: i64,
    #[serde(rename = "packets/pubrec/received", deserialize_with = "null_as_default")]
    pub packets_pubrec_received: i64,
    #[serde(rename = "packets/pubrec/sent", deserialize_with = "null_as_default")]
    pub packets_pubrec_sent: i64,
    #[serde(rename = "packets/pubrec/missed", deserialize_with = "null_as_default")]
    pub packets_pubrec_missed: i64,
    #[serde(rename = "packets/pubrel/received", deserialize_with = "null_as_default")]
    pub packets_pubrel_received: i64,
    #[serde(rename = "packets/pubrel/sent", deserialize_with = "null_as_default")]
    pub packets_pubrel_sent: i64,
    #[serde(rename = "packets/pubrel/missed", deserialize_with = "null_as_default")]
    pub packets_pubrel_missed: i64,
    #[serde(rename = "packets/pubcomp/received", deserialize_with = "null_as_default")]
    pub packets_pubcomp_received: i64,
    #[serde(rename = "packets/pubcomp/sent", deserialize_with = "null_as_default")]
    pub packets_pubcomp_sent: i64,
    #[serde(rename = "packets/pubcomp/missed", deserialize_with = "null_as_default")]
    pub packets_pubcomp_missed: i64,
    #[serde(rename = "packets/subscribe", deserialize_with = "null_as_default")]
    pub packets_subscribe: i64,
    #[serde(rename = "packets/suback", deserialize_with = "null_as_default")]
    pub packets_suback: i64,
    #[serde(rename = "packets/unsubscribe", deserialize_with = "null_as_default")]
    pub packets_unsubscribe: i64,
    #[serde(rename = "packets/unsuback", deserialize_with = "null_as_default")]
    pub packets_unsuback: i64,
}

/// Metrics of one node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeMetrics {
    #[serde(deserialize_with = "null_as_default")]
    pub node: String,
    #[serde(deserialize_with = "null_as_default")]
    pub metrics: Metrics,
}
