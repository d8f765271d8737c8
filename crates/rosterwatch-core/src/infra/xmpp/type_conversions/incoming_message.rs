// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use minidom::Element;
use xmpp_parsers::message::{Message, MessageType};

use crate::domain::messaging::models::{IncomingMessage, MessageKind};

impl From<Message> for IncomingMessage {
    fn from(value: Message) -> Self {
        let body = value
            .bodies
            .get("")
            .or_else(|| value.bodies.values().next())
            .map(|body| body.0.clone());

        let kind = match value.type_ {
            MessageType::Error => MessageKind::Error {
                stanza: String::from(&Element::from(value.clone())),
            },
            _ => MessageKind::Regular,
        };

        IncomingMessage {
            from: value.from,
            body,
            kind,
        }
    }
}
