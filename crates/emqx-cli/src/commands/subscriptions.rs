//! Subscriptions command.

use anyhow::Result;
use clap::Args;
use emqx_client::Emqx;

use super::Reply;

/// Arguments for the subscriptions command.
#[derive(Args, Debug)]
pub struct SubscriptionsArgs {
    /// Only subscriptions on this node
    #[arg(long)]
    pub node: Option<String>,

    /// Only subscriptions of this client
    #[arg(long)]
    pub client: Option<String>,
}

/// Run the subscriptions command.
pub async fn run(args: SubscriptionsArgs, api: &dyn Emqx) -> Result<Reply> {
    let resp = match (args.node, args.client) {
        (None, None) => api.list_cluster_subscriptions().await?,
        (None, Some(client)) => api.list_client_subscriptions(&client).await?,
        (Some(node), None) => api.list_node_subscriptions(&node).await?,
        (Some(node), Some(client)) => api.list_node_client_subscriptions(&node, &client).await?,
    };
    Reply::from_response(&resp)
}
