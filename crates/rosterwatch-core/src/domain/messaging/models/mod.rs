// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use incoming_message::{IncomingMessage, MessageKind};
pub use outgoing_message::OutgoingMessage;

mod incoming_message;
mod outgoing_message;
