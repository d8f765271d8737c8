// rosterwatch/rosterwatch-xmpp
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use xmpp_parsers::presence::{Presence, Show, Type};

use crate::client::ModuleContext;
use crate::mods::roster::is_subscription_type;
use crate::mods::Module;
use crate::Event as ClientEvent;

/// RFC 6121 availability: our own broadcast and the presence of others.
#[derive(Default, Clone)]
pub struct Status {
    ctx: ModuleContext,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Any presence that is not subscription related, i.e. availability updates, probes and
    /// presence errors.
    Presence(Presence),
}

impl Module for Status {
    fn attach(&mut self, context: ModuleContext) {
        self.ctx = context;
    }

    fn on_presence(&self, presence: &Presence) -> Result<()> {
        if !is_subscription_type(&presence.type_) {
            self.ctx
                .schedule_event(ClientEvent::Status(Event::Presence(presence.clone())));
        }
        Ok(())
    }
}

impl Status {
    /// Broadcasts an available presence. A priority of `None` leaves the server default (0).
    pub fn send_presence(
        &self,
        show: Option<Show>,
        status: Option<&str>,
        priority: Option<i8>,
    ) -> Result<()> {
        let mut presence = Presence::new(Type::None);
        presence.show = show;
        presence.priority = priority.unwrap_or_default();
        if let Some(text) = status {
            presence.set_status(String::new(), text);
        }
        self.ctx.send_stanza(presence)
    }
}
