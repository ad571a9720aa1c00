//! Nodes command - node runtime statistics.

use anyhow::Result;
use clap::{Args, Subcommand};
use emqx_client::Emqx;

use super::Reply;

/// Arguments for the nodes command.
#[derive(Args, Debug)]
pub struct NodesArgs {
    #[command(subcommand)]
    pub command: Option<NodesCommand>,
}

#[derive(Subcommand, Debug)]
pub enum NodesCommand {
    /// List statistics of every node (default)
    List,

    /// Show statistics of one node
    Stats {
        /// Node name
        node: String,
    },
}

/// Run the nodes command.
pub async fn run(args: NodesArgs, api: &dyn Emqx) -> Result<Reply> {
    match args.command.unwrap_or(NodesCommand::List) {
        NodesCommand::List => Reply::from_response(&api.list_node_stats().await?),
        NodesCommand::Stats { node } => Reply::from_response(&api.get_node_stat(&node).await?),
    }
}
