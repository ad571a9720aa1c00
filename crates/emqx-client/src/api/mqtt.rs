//! Publish and subscribe actions.

use crate::client::EmqxClient;
use crate::error::Result;
use crate::path::ApiPath;
use crate::types::{Ack, PublishRequest, SubscribeRequest, UnsubscribeRequest};

/// Publish/subscribe API client.
pub struct MqttApi {
    client: EmqxClient,
}

impl MqttApi {
    pub(crate) fn new(client: EmqxClient) -> Self {
        Self { client }
    }

    fn action(name: &str) -> ApiPath {
        ApiPath::v3().push("mqtt").push(name)
    }

    /// Publish a message.
    pub async fn publish(&self, request: &PublishRequest) -> Result<Ack> {
        self.client.post(Self::action("publish"), request).await
    }

    /// Subscribe a client to a topic.
    pub async fn subscribe(&self, request: &SubscribeRequest) -> Result<Ack> {
        self.client.post(Self::action("subscribe"), request).await
    }

    /// Unsubscribe a client from a topic.
    pub async fn unsubscribe(&self, request: &UnsubscribeRequest) -> Result<Ack> {
        self.client.post(Self::action("unsubscribe"), request).await
    }
}
