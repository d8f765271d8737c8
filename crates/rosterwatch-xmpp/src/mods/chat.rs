// rosterwatch/rosterwatch-xmpp
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use jid::Jid;
use xmpp_parsers::message::{Body, Message, MessageType, Subject};

use crate::client::ModuleContext;
use crate::event::Event as ClientEvent;
use crate::mods::Module;

#[derive(Default, Clone)]
pub struct Chat {
    ctx: ModuleContext,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Message(Message),
}

impl Module for Chat {
    fn attach(&mut self, context: ModuleContext) {
        self.ctx = context
    }

    fn on_message(&self, stanza: &Message) -> Result<()> {
        // Chat states, receipts and other body-less payloads are of no interest.
        if stanza.type_ != MessageType::Error && stanza.bodies.is_empty() {
            return Ok(());
        }

        self.ctx
            .schedule_event(ClientEvent::Chat(Event::Message(stanza.clone())));

        Ok(())
    }
}

impl Chat {
    pub fn send_message(
        &self,
        to: impl Into<Jid>,
        body: impl Into<String>,
        subject: Option<&str>,
    ) -> Result<()> {
        let mut stanza = Message::new(Some(to.into()));
        stanza.type_ = MessageType::Normal;
        stanza.id = Some(self.ctx.generate_id());
        stanza.bodies.insert(String::new(), Body(body.into()));
        if let Some(subject) = subject {
            stanza
                .subjects
                .insert(String::new(), Subject(subject.to_string()));
        }
        self.ctx.send_stanza(stanza)
    }
}
