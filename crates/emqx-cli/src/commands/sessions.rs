//! Sessions command.

use anyhow::Result;
use clap::{Args, Subcommand};
use emqx_client::Emqx;

use super::Reply;

/// Arguments for the sessions command.
#[derive(Args, Debug)]
pub struct SessionsArgs {
    #[command(subcommand)]
    pub command: SessionsCommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionsCommand {
    /// List sessions in the cluster or on one node
    List {
        /// Only sessions on this node
        #[arg(long)]
        node: Option<String>,
    },

    /// Show one client's session
    Get {
        /// Client ID
        client_id: String,

        /// Look on this node only
        #[arg(long)]
        node: Option<String>,
    },
}

/// Run the sessions command.
pub async fn run(args: SessionsArgs, api: &dyn Emqx) -> Result<Reply> {
    let resp = match args.command {
        SessionsCommand::List { node: None } => api.list_cluster_sessions().await?,
        SessionsCommand::List { node: Some(node) } => api.list_node_sessions(&node).await?,
        SessionsCommand::Get {
            client_id,
            node: None,
        } => api.get_cluster_session(&client_id).await?,
        SessionsCommand::Get {
            client_id,
            node: Some(node),
        } => api.get_node_session(&node, &client_id).await?,
    };
    Reply::from_response(&resp)
}
