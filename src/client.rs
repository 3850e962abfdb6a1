//! Top-level client handle.
use crate::connection::Connection;
use crate::forks::{ForksApi, ForksClient};
use std::sync::Arc;

/// GitHub client handle from which resource clients are extracted.
#[derive(Clone)]
pub struct GithubClient {
    /// Connection shared by all resource clients.
    connection: Arc<Connection>,
}

impl GithubClient {
    /// Create a client authenticated with `token`.
    pub fn new(token: String) -> Self {
        Self {
            connection: Arc::new(Connection::new(token)),
        }
    }

    /// Create a client over an existing connection.
    pub fn from_connection(connection: Arc<Connection>) -> Self {
        Self { connection }
    }

    /// The forks resource client.
    pub fn forks(&self) -> ForksClient {
        ForksClient::new(
            ForksApi::new(Arc::clone(&self.connection)),
            Arc::clone(&self.connection),
        )
    }
}
