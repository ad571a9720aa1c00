//! CLI command handlers.
//!
//! Every handler talks to the broker through `&dyn Emqx` and returns the
//! decoded envelope as a [`Reply`]; printing happens in `main`.

pub mod brokers;
pub mod connections;
pub mod listeners;
pub mod metrics;
pub mod mqtt;
pub mod nodes;
pub mod plugins;
pub mod routes;
pub mod sessions;
pub mod subscriptions;

use anyhow::Result;
use emqx_client::{Ack, ApiResponse};
use serde::Serialize;
use serde_json::Value;

/// Decoded broker reply, ready to print.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// Broker status code.
    pub code: i64,
    /// Whole envelope as JSON.
    pub envelope: Value,
}

impl Reply {
    /// Wrap a data-bearing response.
    pub fn from_response<T: Serialize>(resp: &ApiResponse<T>) -> Result<Self> {
        Ok(Self {
            code: resp.code,
            envelope: serde_json::to_value(resp)?,
        })
    }

    /// Wrap an action acknowledgement.
    pub fn from_ack(ack: &Ack) -> Result<Self> {
        Ok(Self {
            code: ack.code,
            envelope: serde_json::to_value(ack)?,
        })
    }

    /// Whether the broker reported success.
    pub fn is_success(&self) -> bool {
        self.code == 0
    }

    /// Broker error text, if the envelope carries one.
    pub fn message(&self) -> Option<&str> {
        self.envelope.get("message").and_then(Value::as_str)
    }

    /// Pretty JSON; with `data_only`, just the payload.
    pub fn render(&self, data_only: bool) -> Result<String> {
        let value = if data_only {
            self.envelope.get("data").unwrap_or(&Value::Null)
        } else {
            &self.envelope
        };
        Ok(serde_json::to_string_pretty(value)?)
    }
}
