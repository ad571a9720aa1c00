//! Metrics command.

use anyhow::Result;
use clap::Args;
use emqx_client::Emqx;

use super::Reply;

/// Arguments for the metrics command.
#[derive(Args, Debug)]
pub struct MetricsArgs {
    /// Only metrics of this node
    #[arg(long)]
    pub node: Option<String>,
}

/// Run the metrics command.
pub async fn run(args: MetricsArgs, api: &dyn Emqx) -> Result<Reply> {
    match args.node {
        None => Reply::from_response(&api.list_cluster_metrics().await?),
        Some(node) => Reply::from_response(&api.get_node_metrics(&node).await?),
    }
}
