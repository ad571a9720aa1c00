//! Connections command.

use anyhow::Result;
use clap::{Args, Subcommand};
use emqx_client::Emqx;

use super::Reply;

/// Arguments for the connections command.
#[derive(Args, Debug)]
pub struct ConnectionsArgs {
    #[command(subcommand)]
    pub command: ConnectionsCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConnectionsCommand {
    /// List connections in the cluster or on one node
    List {
        /// Only connections on this node
        #[arg(long)]
        node: Option<String>,
    },

    /// Show one client's connection
    Get {
        /// Client ID
        client_id: String,

        /// Look on this node only
        #[arg(long)]
        node: Option<String>,
    },
}

/// Run the connections command.
pub async fn run(args: ConnectionsArgs, api: &dyn Emqx) -> Result<Reply> {
    let resp = match args.command {
        ConnectionsCommand::List { node: None } => api.list_cluster_connections().await?,
        ConnectionsCommand::List { node: Some(node) } => api.list_node_connections(&node).await?,
        ConnectionsCommand::Get {
            client_id,
            node: None,
        } => api.get_cluster_connection(&client_id).await?,
        ConnectionsCommand::Get {
            client_id,
            node: Some(node),
        } => api.get_node_connection(&node, &client_id).await?,
    };
    Reply::from_response(&resp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use emqx_client::{ApiResponse, Connection, MockEmqx};

    fn one_connection(client_id: &str) -> emqx_client::Result<ApiResponse<Vec<Connection>>> {
        Ok(ApiResponse {
            code: 0,
            data: vec![Connection {
                client_id: client_id.to_string(),
                ..Default::default()
            }],
            message: None,
        })
    }

    #[tokio::test]
    async fn test_get_with_node_uses_node_endpoint() {
        let mut mock = MockEmqx::new();
        mock.expect_get_node_connection()
            .withf(|node, client_id| node.to_string() == "n1" && client_id.to_string() == "c1")
            .times(1)
            .returning(|_, client_id| one_connection(client_id));
        mock.expect_get_cluster_connection().never();

        let args = ConnectionsArgs {
            command: ConnectionsCommand::Get {
                client_id: "c1".to_string(),
                node: Some("n1".to_string()),
            },
        };
        let reply = run(args, &mock).await.unwrap();
        assert_eq!(reply.envelope["data"][0]["client_id"], "c1");
    }

    #[tokio::test]
    async fn test_get_without_node_uses_cluster_endpoint() {
        let mut mock = MockEmqx::new();
        mock.expect_get_cluster_connection()
            .times(1)
            .returning(|client_id| one_connection(client_id));

        let args = ConnectionsArgs {
            command: ConnectionsCommand::Get {
                client_id: "c2".to_string(),
                node: None,
            },
        };
        let reply = run(args, &mock).await.unwrap();
        assert_eq!(reply.envelope["data"][0]["client_id"], "c2");
    }
}
