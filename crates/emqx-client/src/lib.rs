//! Typed HTTP client for the EMQX broker management API (v3).
//!
//! The client authenticates with an application ID and secret (HTTP Basic),
//! sends each request to `{base_url}/api/v3/...`, and decodes the JSON
//! response into typed structures. It keeps no per-call state, never retries,
//! and leaves the broker's `code` field for the caller to interpret.
//!
//! # Example
//!
//! ```no_run
//! use emqx_client::{EmqxClient, Result, SubscribeRequest};
//!
//! # async fn example() -> Result<()> {
//! let client = EmqxClient::builder()
//!     .base_url("http://localhost:8080")
//!     .credentials("admin", "public")
//!     .build()?;
//!
//! // Inspect the cluster
//! let node = client.cluster().get("emqx@127.0.0.1").await?;
//! println!("{} is {}", node.data.node, node.data.node_status);
//!
//! // Subscribe a connected client
//! let ack = client
//!     .mqtt()
//!     .subscribe(&SubscribeRequest {
//!         topic: "sensors/#".to_string(),
//!         qos: 1,
//!         client_id: "dashboard".to_string(),
//!     })
//!     .await?;
//! assert!(ack.is_success());
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! A call fails when the URL cannot be built, when the transport fails
//! (connection, timeout, TLS), or when the body does not decode. In the last
//! case the error message is the raw body text. The HTTP status is never
//! consulted.
//!
//! # API Coverage
//!
//! - **Cluster**: API catalog, broker info
//! - **Nodes**: node statistics
//! - **Connections**, **Sessions**, **Subscriptions**: cluster-wide and per node
//! - **Routes**: all routes, routes of a topic
//! - **MQTT**: publish, subscribe, unsubscribe
//! - **Plugins**: list, load, unload
//! - **Listeners**, **Metrics**: cluster-wide and per node

pub mod api;
pub mod client;
pub mod error;
pub mod path;
pub mod types;

pub use api::Emqx;
#[cfg(any(test, feature = "mock"))]
pub use api::MockEmqx;
pub use client::{ClientBuilder, ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, EmqxClient};
pub use error::{Error, Result};
pub use path::ApiPath;
pub use types::*;

/// Re-exported so callers of [`EmqxClient::execute`] need no direct dependency.
pub use reqwest::Method;
