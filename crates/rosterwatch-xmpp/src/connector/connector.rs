// rosterwatch/rosterwatch-xmpp
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use jid::FullJid;
use minidom::Element;
use secrecy::Secret;

use crate::util::PinnedFuture;

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ConnectionError {
    #[error("Connection attempt timed out")]
    TimedOut,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("{msg}")]
    Generic { msg: String },
}

/// What a live connection reports back to the client.
#[derive(Debug)]
pub enum ConnectionEvent {
    Stanza(Element),
    /// The stream is gone. `error` is `None` if it was closed in an orderly fashion.
    Disconnected { error: Option<ConnectionError> },
    /// Time to expire requests that went unanswered.
    TimeoutTimer,
    /// Time to ping the server.
    PingTimer,
}

pub type ConnectionEventHandler =
    Box<dyn Fn(&dyn Connection, ConnectionEvent) -> PinnedFuture<()> + Send + Sync>;

/// Establishes authenticated streams. Swapped out for an in-memory one in tests.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(
        &self,
        jid: &FullJid,
        password: Secret<String>,
        event_handler: ConnectionEventHandler,
    ) -> Result<Box<dyn Connection>, ConnectionError>;
}

pub trait Connection: Send + Sync {
    fn send_stanza(&self, stanza: Element) -> Result<()>;
    fn disconnect(&self);
}
