//! Read access to the remote namespace

use std::time::Duration;

use tracing::debug;
use zookeeper::{Stat, WatchedEvent, Watcher, ZkError, ZooKeeper};

use crate::error::ClientError;
use crate::metadata::NodeMetadata;

/// The two read operations the tree walker needs from a store.
pub trait NamespaceClient {
    /// Names of the direct children of `path`, in backend order.
    fn list_children(&self, path: &str) -> Result<Vec<String>, ClientError>;

    /// Payload and metadata of the node at `path`.
    fn get_node(&self, path: &str) -> Result<(Vec<u8>, NodeMetadata), ClientError>;
}

impl From<Stat> for NodeMetadata {
    fn from(stat: Stat) -> Self {
        Self {
            data_version: stat.version,
            child_version: stat.cversion,
            created_at: stat.ctime,
            modified_at: stat.mtime,
            ephemeral_owner: stat.ephemeral_owner,
            data_length: stat.data_length,
            child_count: stat.num_children,
        }
    }
}

/// Logs session state changes; no node watches are ever set.
struct SessionLogger;

impl Watcher for SessionLogger {
    fn handle(&self, event: WatchedEvent) {
        debug!(state = ?event.keeper_state, path = ?event.path, "zookeeper session event");
    }
}

/// ZooKeeper-backed namespace client.
pub struct ZkClient {
    endpoints: String,
    session: Option<ZooKeeper>,
}

impl ZkClient {
    /// Open a session against the given `host:port` endpoints.
    pub fn connect(endpoints: &[String], timeout: Duration) -> Result<Self, ClientError> {
        let connect_string = endpoints.join(",");
        debug!(endpoints = %connect_string, ?timeout, "connecting");
        let session = ZooKeeper::connect(&connect_string, timeout, SessionLogger)?;
        Ok(Self {
            endpoints: connect_string,
            session: Some(session),
        })
    }

    /// A client with no session. Every request fails with `ClientError::NotConnected`.
    pub fn disconnected(endpoints: &[String]) -> Self {
        Self {
            endpoints: endpoints.join(","),
            session: None,
        }
    }

    pub fn endpoints(&self) -> &str {
        &self.endpoints
    }

    pub fn is_connected(&self) -> bool {
        self.session.is_some()
    }

    fn session(&self) -> Result<&ZooKeeper, ClientError> {
        self.session.as_ref().ok_or_else(|| ClientError::NotConnected {
            endpoints: self.endpoints.clone(),
        })
    }
}

fn map_zk_error(path: &str, err: ZkError) -> ClientError {
    match err {
        ZkError::NoNode => ClientError::NoNode(path.to_string()),
        other => ClientError::ZooKeeper(other),
    }
}

impl NamespaceClient for ZkClient {
    fn list_children(&self, path: &str) -> Result<Vec<String>, ClientError> {
        self.session()?
            .get_children(path, false)
            .map_err(|e| map_zk_error(path, e))
    }

    fn get_node(&self, path: &str) -> Result<(Vec<u8>, NodeMetadata), ClientError> {
        let (payload, stat) = self
            .session()?
            .get_data(path, false)
            .map_err(|e| map_zk_error(path, e))?;
        Ok((payload, stat.into()))
    }
}

impl Drop for ZkClient {
    fn drop(&mut self) {
        if let Some(session) = self.session.take() {
            if let Err(e) = session.close() {
                debug!(error = ?e, "error closing session");
            }
        }
    }
}
