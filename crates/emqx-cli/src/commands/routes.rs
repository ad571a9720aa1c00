//! Routes command.

use anyhow::Result;
use clap::{Args, Subcommand};
use emqx_client::Emqx;

use super::Reply;

/// Arguments for the routes command.
#[derive(Args, Debug)]
pub struct RoutesArgs {
    #[command(subcommand)]
    pub command: Option<RoutesCommand>,
}

#[derive(Subcommand, Debug)]
pub enum RoutesCommand {
    /// List all routes (default)
    List,

    /// Show routes of one topic
    Get {
        /// Topic, e.g. sensors/temp
        topic: String,
    },
}

/// Run the routes command.
pub async fn run(args: RoutesArgs, api: &dyn Emqx) -> Result<Reply> {
    let resp = match args.command.unwrap_or(RoutesCommand::List) {
        RoutesCommand::List => api.list_routes().await?,
        RoutesCommand::Get { topic } => api.get_topic_route(&topic).await?,
    };
    Reply::from_response(&resp)
}
