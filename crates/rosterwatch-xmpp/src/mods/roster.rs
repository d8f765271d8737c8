// rosterwatch/rosterwatch-xmpp
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use jid::{BareJid, Jid};
use tracing::warn;
use xmpp_parsers::iq::{Iq, IqType};
use xmpp_parsers::presence::{Presence, Type};
use xmpp_parsers::roster::{Group, Item, Roster as Query, Subscription};

use crate::client::ModuleContext;
use crate::event::Event as ClientEvent;
use crate::mods::Module;
use crate::ns;
use crate::util::{acknowledge, RequestError};

/// RFC 6121: Managing the Roster & Managing Presence Subscriptions
#[derive(Default, Clone)]
pub struct Roster {
    ctx: ModuleContext,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The server pushed a changed roster item. An item with subscription `remove` signals
    /// that the contact was deleted from the roster.
    Push { item: Item },
    /// A subscription related presence (`subscribe`, `subscribed`, `unsubscribe` or
    /// `unsubscribed`) was received.
    Subscription { from: BareJid, type_: Type },
}

impl Module for Roster {
    fn attach(&mut self, context: ModuleContext) {
        self.ctx = context
    }

    fn on_presence(&self, stanza: &Presence) -> Result<()> {
        if !is_subscription_type(&stanza.type_) {
            return Ok(());
        }

        let Some(from) = &stanza.from else {
            return Ok(());
        };

        self.ctx.schedule_event(ClientEvent::Roster(Event::Subscription {
            from: from.to_bare(),
            type_: stanza.type_.clone(),
        }));

        Ok(())
    }

    fn on_iq(&self, stanza: &Iq) -> Result<()> {
        let IqType::Set(payload) = &stanza.payload else {
            return Ok(());
        };
        if !payload.is("query", ns::ROSTER) {
            return Ok(());
        }

        // A roster push is only legitimate if it comes from our own account (or the server
        // on its behalf).
        if let Some(from) = &stanza.from {
            if Some(from.to_bare()) != self.ctx.bare_jid() {
                warn!("Ignoring roster push from foreign entity {}", from);
                return Ok(());
            }
        }

        let query = Query::try_from(payload.clone())?;

        self.ctx.send_stanza(acknowledge(stanza))?;

        for item in query.items {
            self.ctx
                .schedule_event(ClientEvent::Roster(Event::Push { item }));
        }

        Ok(())
    }
}

impl Roster {
    pub async fn load_roster(&self) -> Result<Query> {
        let roster = self
            .ctx
            .send_iq(Iq::from_get(
                self.ctx.generate_id(),
                Query {
                    ver: None,
                    items: vec![],
                },
            ))
            .await?;

        let Some(response) = roster else {
            return Err(RequestError::UnexpectedResponse.into());
        };

        Ok(Query::try_from(response)?)
    }

    pub async fn add_contact(
        &self,
        jid: &BareJid,
        name: Option<&str>,
        groups: &[String],
    ) -> Result<()> {
        self.set_item(Item {
            jid: jid.clone(),
            name: name.map(ToString::to_string),
            subscription: Default::default(),
            ask: Default::default(),
            groups: groups.iter().cloned().map(Group).collect(),
        })
        .await
    }

    /// Replaces the roster item for `item.jid` on the server. The server answers by pushing
    /// the updated item to all of our resources.
    pub async fn set_item(&self, item: Item) -> Result<()> {
        let iq = Iq::from_set(
            self.ctx.generate_id(),
            Query {
                ver: None,
                items: vec![Item {
                    subscription: Subscription::None,
                    ask: Default::default(),
                    ..item
                }],
            },
        );
        self.ctx.send_iq(iq).await?;
        Ok(())
    }

    pub fn subscribe_to_presence(&self, jid: &BareJid) -> Result<()> {
        self.ctx
            .send_stanza(Presence::new(Type::Subscribe).with_to(Jid::from(jid.clone())))
    }
}

pub(crate) fn is_subscription_type(type_: &Type) -> bool {
    matches!(
        type_,
        Type::Subscribe | Type::Subscribed | Type::Unsubscribe | Type::Unsubscribed
    )
}
