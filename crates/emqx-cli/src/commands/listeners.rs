//! Listeners command.

use anyhow::Result;
use clap::Args;
use emqx_client::Emqx;

use super::Reply;

/// Arguments for the listeners command.
#[derive(Args, Debug)]
pub struct ListenersArgs {
    /// Only listeners of this node
    #[arg(long)]
    pub node: Option<String>,
}

/// Run the listeners command.
pub async fn run(args: ListenersArgs, api: &dyn Emqx) -> Result<Reply> {
    match args.node {
        None => Reply::from_response(&api.list_cluster_listeners().await?),
        Some(node) => Reply::from_response(&api.list_node_listeners(&node).await?),
    }
}
