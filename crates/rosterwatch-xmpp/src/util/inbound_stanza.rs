// rosterwatch/rosterwatch-xmpp
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use minidom::Element;
use xmpp_parsers::iq::Iq;
use xmpp_parsers::message::Message;
use xmpp_parsers::presence::Presence;

use crate::ns;

/// A top-level stanza received on the stream, parsed by its kind.
#[derive(Debug)]
pub enum InboundStanza {
    Iq(Iq),
    Message(Message),
    Presence(Presence),
}

impl TryFrom<Element> for InboundStanza {
    type Error = anyhow::Error;

    fn try_from(elem: Element) -> Result<Self, Self::Error> {
        if elem.ns() != ns::JABBER_CLIENT {
            anyhow::bail!("Unexpected stanza namespace '{}'", elem.ns())
        }

        Ok(match elem.name() {
            "iq" => Self::Iq(Iq::try_from(elem)?),
            "message" => Self::Message(Message::try_from(elem)?),
            "presence" => Self::Presence(Presence::try_from(elem)?),
            other => anyhow::bail!("Unexpected top-level element <{}/>", other),
        })
    }
}
