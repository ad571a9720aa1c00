//! emqxctl - command-line front end for the EMQX management API.

use anyhow::{Context as _, Result, bail};
use clap::{Parser, Subcommand};
use emqx_client::{Emqx, EmqxClient};

mod commands;
mod config;
mod logging;

use commands::{
    brokers, connections, listeners, metrics, mqtt, nodes, plugins, routes, sessions,
    subscriptions,
};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// emqxctl - manage an EMQX broker cluster over its HTTP API
#[derive(Parser)]
#[command(name = "emqxctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Print only the `data` field of the reply
    #[arg(long, global = true)]
    pub data_only: bool,

    #[command(flatten)]
    pub connection: config::ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the endpoints the broker exposes
    Apis,

    /// Broker info for the cluster or one node
    Brokers(brokers::BrokersArgs),

    /// Node runtime statistics
    Nodes(nodes::NodesArgs),

    /// Client connections
    Connections(connections::ConnectionsArgs),

    /// Client sessions
    Sessions(sessions::SessionsArgs),

    /// Topic subscriptions
    Subscriptions(subscriptions::SubscriptionsArgs),

    /// Topic routes
    Routes(routes::RoutesArgs),

    /// Publish a message
    Publish(mqtt::PublishArgs),

    /// Subscribe a client to a topic
    Subscribe(mqtt::SubscribeArgs),

    /// Unsubscribe a client from a topic
    Unsubscribe(mqtt::UnsubscribeArgs),

    /// Plugin management
    Plugins(plugins::PluginsArgs),

    /// Listeners of the cluster or one node
    Listeners(listeners::ListenersArgs),

    /// Broker metrics
    Metrics(metrics::MetricsArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_json);

    let settings = config::resolve(&cli.connection)?;
    let client = EmqxClient::new(settings).context("failed to create client")?;
    tracing::debug!(base_url = client.base_url(), timeout = ?client.timeout(), "client ready");

    let api: &dyn Emqx = &client;
    let reply = match cli.command {
        Commands::Apis => brokers::run_apis(api).await,
        Commands::Brokers(args) => brokers::run(args, api).await,
        Commands::Nodes(args) => nodes::run(args, api).await,
        Commands::Connections(args) => connections::run(args, api).await,
        Commands::Sessions(args) => sessions::run(args, api).await,
        Commands::Subscriptions(args) => subscriptions::run(args, api).await,
        Commands::Routes(args) => routes::run(args, api).await,
        Commands::Publish(args) => mqtt::publish(args, api).await,
        Commands::Subscribe(args) => mqtt::subscribe(args, api).await,
        Commands::Unsubscribe(args) => mqtt::unsubscribe(args, api).await,
        Commands::Plugins(args) => plugins::run(args, api).await,
        Commands::Listeners(args) => listeners::run(args, api).await,
        Commands::Metrics(args) => metrics::run(args, api).await,
    }?;

    println!("{}", reply.render(cli.data_only)?);

    if !reply.is_success() {
        bail!(
            "broker returned code {}: {}",
            reply.code,
            reply.message().unwrap_or("no message")
        );
    }
    Ok(())
}
