use std::sync::Arc;

use tokio::sync::watch;

use crate::{Envelope, Reply};

/// Called for every envelope received from the peer.
pub type Handler = Arc<dyn Fn(Envelope) -> Reply + Send + Sync>;

/// Peer-to-peer channel between the phone and the watch.
///
/// A call to `send` makes at most one delivery attempt. Retrying is left to the caller.
#[allow(async_fn_in_trait)]
pub trait Transport {
    fn is_reachable(&self) -> bool;
    /// Publishes the current reachability and every change of it.
    fn reachability(&self) -> watch::Receiver<bool>;
    async fn send(&self, envelope: Envelope) -> Result<Reply, TransportError>;
    fn on_receive(&self, handler: Handler);
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("peer unreachable")]
    Unreachable,
    #[error("no reply within timeout")]
    Timeout,
    #[error("rejected by peer: {0}")]
    Rejected(String),
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// Failures that are expected while the peer is out of range.
    #[must_use]
    pub fn is_no_connection(&self) -> bool {
        matches!(self, TransportError::Unreachable | TransportError::Timeout)
    }
}

/// Turns a negative reply into an error.
pub fn check_reply(reply: Reply) -> Result<Reply, TransportError> {
    match reply.error {
        Some(error) => Err(TransportError::Rejected(error)),
        None if !reply.received => Err(TransportError::Rejected("not received".to_string())),
        None => Ok(reply),
    }
}
