// rosterwatch/rosterwatch-xmpp
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::any::Any;

use anyhow::Result;
use xmpp_parsers::iq::Iq;
use xmpp_parsers::message::Message;
use xmpp_parsers::presence::Presence;

pub use chat::Chat;
pub(crate) use ping::Ping;
pub use profile::Profile;
pub use roster::Roster;
pub use status::Status;

use crate::client::ModuleContext;
use crate::util::InboundStanza;

pub mod chat;
mod ping;
pub mod profile;
pub mod roster;
pub mod status;

/// A protocol extension plugged into the client. Every inbound stanza is offered to every
/// module; a module ignores what it doesn't understand.
pub trait Module: Any + Send + Sync {
    fn attach(&mut self, context: ModuleContext);

    fn on_connect(&self) -> Result<()> {
        Ok(())
    }

    fn dispatch(&self, stanza: &InboundStanza) -> Result<()> {
        match stanza {
            InboundStanza::Iq(iq) => self.on_iq(iq),
            InboundStanza::Message(message) => self.on_message(message),
            InboundStanza::Presence(presence) => self.on_presence(presence),
        }
    }

    fn on_iq(&self, _iq: &Iq) -> Result<()> {
        Ok(())
    }

    fn on_message(&self, _message: &Message) -> Result<()> {
        Ok(())
    }

    fn on_presence(&self, _presence: &Presence) -> Result<()> {
        Ok(())
    }
}

/// Lets the client hand out concrete module types from its type-keyed registry.
pub trait AnyModule: Module {
    fn as_any(&self) -> &dyn Any;
}

impl<M: Module> AnyModule for M {
    fn as_any(&self) -> &dyn Any {
        self
    }
}
