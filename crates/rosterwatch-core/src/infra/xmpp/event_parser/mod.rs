// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use tracing::warn;

use rosterwatch_xmpp::{
    client::Event as XMPPClientEvent, mods::chat::Event as XMPPChatEvent,
    mods::roster::Event as XMPPRosterEvent, mods::status::Event as XMPPStatusEvent, Event,
};

use crate::app::event_handlers::{ConnectionEvent, ServerEvent};
use crate::domain::messaging::models::IncomingMessage;
use crate::domain::presence::models::PresenceSnapshot;
use crate::domain::roster::models::RosterEntry;
use crate::infra::xmpp::type_conversions::presence_type;
use crate::SessionError;

/// Translates an event of the protocol client into the events our handlers understand.
pub fn parse_xmpp_event(event: Event) -> Result<Vec<ServerEvent>> {
    let mut ctx = Context::default();

    match event {
        Event::Chat(event) => parse_chat_event(&mut ctx, event)?,
        Event::Client(event) => parse_client_event(&mut ctx, event)?,
        Event::Roster(event) => parse_roster_event(&mut ctx, event)?,
        Event::Status(event) => parse_status_event(&mut ctx, event)?,
    };

    Ok(ctx.events)
}

#[derive(Debug, Default)]
struct Context {
    events: Vec<ServerEvent>,
}

impl Context {
    pub fn push_event(&mut self, event: impl Into<ServerEvent>) {
        self.events.push(event.into())
    }
}

fn parse_chat_event(ctx: &mut Context, event: XMPPChatEvent) -> Result<()> {
    match event {
        XMPPChatEvent::Message(message) => ctx.push_event(IncomingMessage::from(message)),
    }
    Ok(())
}

fn parse_client_event(ctx: &mut Context, event: XMPPClientEvent) -> Result<()> {
    match event {
        XMPPClientEvent::Connected => ctx.push_event(ConnectionEvent::Connected),
        XMPPClientEvent::Disconnected { error } => {
            ctx.push_event(ConnectionEvent::Disconnected { error })
        }
    }
    Ok(())
}

fn parse_roster_event(ctx: &mut Context, event: XMPPRosterEvent) -> Result<()> {
    match event {
        XMPPRosterEvent::Push { item } => ctx.push_event(ServerEvent::RosterPush {
            entry: RosterEntry::from(item),
        }),
        XMPPRosterEvent::Subscription { from, type_ } => {
            let Some(type_) = presence_type(&type_) else {
                return Err(SessionError::ProtocolViolation {
                    msg: format!("Received subscription presence from {} without a type.", from),
                }
                .into());
            };
            ctx.push_event(ServerEvent::Subscription { from, type_ })
        }
    }
    Ok(())
}

fn parse_status_event(ctx: &mut Context, event: XMPPStatusEvent) -> Result<()> {
    match event {
        XMPPStatusEvent::Presence(presence) => {
            let Some(from) = &presence.from else {
                warn!("Ignoring presence without a sender.");
                return Ok(());
            };

            ctx.push_event(ServerEvent::Presence {
                from: from.to_bare(),
                presence: Some(PresenceSnapshot::from(&presence)),
            })
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use minidom::Element;
    use pretty_assertions::assert_eq;
    use xmpp_parsers::message::Message;
    use xmpp_parsers::presence::{Presence, Type};

    use rosterwatch_xmpp::{bare, jid, ConnectionError};

    use crate::domain::messaging::models::MessageKind;
    use crate::domain::presence::models::{PresenceType, Show};

    use super::*;

    #[test]
    fn test_parses_presence_by_bare_jid() -> Result<()> {
        let mut presence = Presence::new(Type::None);
        presence.from = Some(jid!("a@rosterwatch.org/phone"));
        presence.show = Some(xmpp_parsers::presence::Show::Dnd);

        assert_eq!(
            parse_xmpp_event(Event::Status(XMPPStatusEvent::Presence(presence)))?,
            vec![ServerEvent::Presence {
                from: bare!("a@rosterwatch.org"),
                presence: Some(PresenceSnapshot::available().with_show(Show::Dnd)),
            }]
        );

        Ok(())
    }

    #[test]
    fn test_parses_subscription() -> Result<()> {
        assert_eq!(
            parse_xmpp_event(Event::Roster(XMPPRosterEvent::Subscription {
                from: bare!("a@rosterwatch.org"),
                type_: Type::Unsubscribe,
            }))?,
            vec![ServerEvent::Subscription {
                from: bare!("a@rosterwatch.org"),
                type_: PresenceType::Unsubscribe,
            }]
        );

        Ok(())
    }

    #[test]
    fn test_untyped_subscription_is_a_protocol_violation() {
        let err = parse_xmpp_event(Event::Roster(XMPPRosterEvent::Subscription {
            from: bare!("a@rosterwatch.org"),
            type_: Type::None,
        }))
        .unwrap_err();

        assert_eq!(
            err.downcast_ref::<SessionError>(),
            Some(&SessionError::ProtocolViolation {
                msg: "Received subscription presence from a@rosterwatch.org without a type."
                    .to_string()
            })
        );
    }

    #[test]
    fn test_parses_error_message() -> Result<()> {
        let message = Message::try_from(Element::from_str(
            r#"<message xmlns="jabber:client" from="a@rosterwatch.org" type="error">
              <error type="cancel">
                <service-unavailable xmlns="urn:ietf:params:xml:ns:xmpp-stanzas"/>
              </error>
            </message>"#,
        )?)?;

        let events = parse_xmpp_event(Event::Chat(XMPPChatEvent::Message(message)))?;
        let [ServerEvent::Message(IncomingMessage {
            from,
            body,
            kind: MessageKind::Error { stanza },
        })] = events.as_slice()
        else {
            panic!("Expected a single error message, got {:?}", events)
        };

        assert_eq!(from, &Some(jid!("a@rosterwatch.org")));
        assert_eq!(body, &None);
        assert!(stanza.contains("service-unavailable"));

        Ok(())
    }

    #[test]
    fn test_parses_disconnect() -> Result<()> {
        assert_eq!(
            parse_xmpp_event(Event::Client(XMPPClientEvent::Disconnected {
                error: Some(ConnectionError::TimedOut)
            }))?,
            vec![ServerEvent::Connection(ConnectionEvent::Disconnected {
                error: Some(ConnectionError::TimedOut)
            })]
        );
        Ok(())
    }
}
