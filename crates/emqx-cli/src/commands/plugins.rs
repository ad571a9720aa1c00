//! Plugins command.

use anyhow::Result;
use clap::{Args, Subcommand};
use emqx_client::Emqx;

use super::Reply;

/// Arguments for the plugins command.
#[derive(Args, Debug)]
pub struct PluginsArgs {
    #[command(subcommand)]
    pub command: PluginsCommand,
}

#[derive(Subcommand, Debug)]
pub enum PluginsCommand {
    /// List plugins of every node or of one node
    List {
        /// Only plugins of this node
        #[arg(long)]
        node: Option<String>,
    },

    /// Load (start) a plugin on a node
    Load {
        /// Node name
        node: String,
        /// Plugin name, e.g. emqx_web_hook
        plugin: String,
    },

    /// Unload (stop) a plugin on a node
    Unload {
        /// Node name
        node: String,
        /// Plugin name
        plugin: String,
    },
}

/// Run the plugins command.
pub async fn run(args: PluginsArgs, api: &dyn Emqx) -> Result<Reply> {
    match args.command {
        PluginsCommand::List { node: None } => {
            Reply::from_response(&api.list_cluster_plugins().await?)
        }
        PluginsCommand::List { node: Some(node) } => {
            Reply::from_response(&api.list_node_plugins(&node).await?)
        }
        PluginsCommand::Load { node, plugin } => {
            tracing::info!(%node, %plugin, "loading plugin");
            Reply::from_ack(&api.start_node_plugin(&node, &plugin).await?)
        }
        PluginsCommand::Unload { node, plugin } => {
            tracing::info!(%node, %plugin, "unloading plugin");
            Reply::from_ack(&api.stop_node_plugin(&node, &plugin).await?)
        }
    }
}
