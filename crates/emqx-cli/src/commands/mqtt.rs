//! Publish, subscribe and unsubscribe commands.

use anyhow::Result;
use clap::Args;
use emqx_client::{Emqx, PublishRequest, SubscribeRequest, UnsubscribeRequest};

use super::Reply;

/// Arguments for the publish command.
#[derive(Args, Debug)]
pub struct PublishArgs {
    /// Topic to publish to
    pub topic: String,

    /// Message payload
    pub payload: String,

    /// QoS level
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=2))]
    pub qos: u8,

    /// Retain the message
    #[arg(long)]
    pub retain: bool,

    /// Publish on behalf of this client ID
    #[arg(long, default_value = "")]
    pub client_id: String,
}

/// Arguments for the subscribe command.
#[derive(Args, Debug)]
pub struct SubscribeArgs {
    /// Topic filter
    pub topic: String,

    /// Client to subscribe
    #[arg(long)]
    pub client_id: String,

    /// QoS level
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=2))]
    pub qos: u8,
}

/// Arguments for the unsubscribe command.
#[derive(Args, Debug)]
pub struct UnsubscribeArgs {
    /// Topic filter
    pub topic: String,

    /// Client to unsubscribe
    #[arg(long)]
    pub client_id: String,
}

/// Run the publish command.
pub async fn publish(args: PublishArgs, api: &dyn Emqx) -> Result<Reply> {
    let request = PublishRequest {
        topic: args.topic,
        payload: args.payload,
        qos: args.qos,
        retain: args.retain,
        client_id: args.client_id,
    };
    tracing::debug!(topic = %request.topic, qos = request.qos, "publishing");
    Reply::from_ack(&api.publish_message(&request).await?)
}

/// Run the subscribe command.
pub async fn subscribe(args: SubscribeArgs, api: &dyn Emqx) -> Result<Reply> {
    let request = SubscribeRequest {
        topic: args.topic,
        qos: args.qos,
        client_id: args.client_id,
    };
    Reply::from_ack(&api.create_subscription(&request).await?)
}

/// Run the unsubscribe command.
pub async fn unsubscribe(args: UnsubscribeArgs, api: &dyn Emqx) -> Result<Reply> {
    let request = UnsubscribeRequest {
        topic: args.topic,
        client_id: args.client_id,
    };
    Reply::from_ack(&api.unsubscribe(&request).await?)
}
