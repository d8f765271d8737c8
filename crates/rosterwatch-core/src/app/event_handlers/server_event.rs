// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use jid::BareJid;

use rosterwatch_xmpp::ConnectionError;

use crate::domain::messaging::models::IncomingMessage;
use crate::domain::presence::models::{PresenceSnapshot, PresenceType};
use crate::domain::roster::models::RosterEntry;

#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    /// Events related to the connection status.
    Connection(ConnectionEvent),
    /// The server pushed a changed roster item.
    RosterPush { entry: RosterEntry },
    /// A contact changed its availability. `presence` is `None` if the stanza carried nothing
    /// we could make sense of.
    Presence {
        from: BareJid,
        presence: Option<PresenceSnapshot>,
    },
    /// A presence subscription was requested, granted or revoked.
    Subscription { from: BareJid, type_: PresenceType },
    Message(IncomingMessage),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionEvent {
    Connected,
    Disconnected { error: Option<ConnectionError> },
}

impl From<ConnectionEvent> for ServerEvent {
    fn from(value: ConnectionEvent) -> Self {
        Self::Connection(value)
    }
}

impl From<IncomingMessage> for ServerEvent {
    fn from(value: IncomingMessage) -> Self {
        Self::Message(value)
    }
}
