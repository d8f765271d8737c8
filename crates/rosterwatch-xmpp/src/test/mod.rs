// rosterwatch/rosterwatch-xmpp
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

//! In-memory doubles for driving a `Client` without a server.

use jid::BareJid;

pub use connected_client::{ClientTestAdditions, ConnectedClient};
pub use connector::{Connection, Connector};
pub use incrementing_id_provider::IncrementingIDProvider;

mod incrementing_id_provider;

/// Parses a `jid::Jid`, panicking on malformed input.
#[macro_export]
macro_rules! jid {
    ($jid:expr) => {
        $jid.parse::<jid::Jid>().unwrap()
    };
}

/// Parses a `jid::BareJid`, panicking on malformed input.
#[macro_export]
macro_rules! bare {
    ($jid:expr) => {
        $jid.parse::<jid::BareJid>().unwrap()
    };
}

/// Parses a `jid::FullJid`, panicking on malformed input.
#[macro_export]
macro_rules! full {
    ($jid:expr) => {
        $jid.parse::<jid::FullJid>().unwrap()
    };
}

/// The two parties of most test conversations.
pub trait BareJidTestAdditions {
    /// `test@rosterwatch.org`, the account the client connects as.
    fn ours() -> BareJid;
    /// `friend@rosterwatch.org`
    fn theirs() -> BareJid;
}

impl BareJidTestAdditions for BareJid {
    fn ours() -> BareJid {
        bare!("test@rosterwatch.org")
    }

    fn theirs() -> BareJid {
        bare!("friend@rosterwatch.org")
    }
}
