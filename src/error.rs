//! Error types for namespace access and traversal

use std::io;

use thiserror::Error;
use zookeeper::ZkError;

/// Failure of a single request against the namespace.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No session could be established; every request fails with this.
    #[error("not connected to {endpoints}")]
    NotConnected { endpoints: String },

    #[error("node '{0}' does not exist")]
    NoNode(String),

    #[error("zookeeper error: {0:?}")]
    ZooKeeper(ZkError),
}

impl From<ZkError> for ClientError {
    fn from(err: ZkError) -> Self {
        ClientError::ZooKeeper(err)
    }
}

/// Failure that aborts a whole traversal.
#[derive(Debug, Error)]
pub enum TraversalError {
    #[error("cannot list children of '{path}': {source}")]
    ListChildren {
        path: String,
        #[source]
        source: ClientError,
    },

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}
