// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use jid::Jid;

#[derive(Debug, Clone, PartialEq)]
pub struct IncomingMessage {
    pub from: Option<Jid>,
    pub body: Option<String>,
    pub kind: MessageKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MessageKind {
    Regular,
    /// The message bounced. Carries the serialized stanza.
    Error { stanza: String },
}
