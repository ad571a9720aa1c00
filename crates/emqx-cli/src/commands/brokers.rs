//! Brokers command - cluster membership and broker info.

use anyhow::Result;
use clap::{Args, Subcommand};
use emqx_client::Emqx;

use super::Reply;

/// Arguments for the brokers command.
#[derive(Args, Debug)]
pub struct BrokersArgs {
    #[command(subcommand)]
    pub command: Option<BrokersCommand>,
}

#[derive(Subcommand, Debug)]
pub enum BrokersCommand {
    /// List broker info of every node (default)
    List,

    /// Show broker info of one node
    Info {
        /// Node name, e.g. emqx@127.0.0.1
        node: String,
    },
}

/// Run the brokers command.
pub async fn run(args: BrokersArgs, api: &dyn Emqx) -> Result<Reply> {
    match args.command.unwrap_or(BrokersCommand::List) {
        BrokersCommand::List => Reply::from_response(&api.list_cluster().await?),
        BrokersCommand::Info { node } => Reply::from_response(&api.get_node_info(&node).await?),
    }
}

/// Run the apis command.
pub async fn run_apis(api: &dyn Emqx) -> Result<Reply> {
    Reply::from_response(&api.list_all_api().await?)
}
