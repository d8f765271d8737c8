// rosterwatch/rosterwatch-xmpp
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::str::FromStr;

use anyhow::Result;
use jid::BareJid;
use minidom::Element;
use pretty_assertions::assert_eq;
use xmpp_parsers::iq::{Iq, IqType};
use xmpp_parsers::presence::{Presence, Type};
use xmpp_parsers::roster::{Ask, Group, Item, Roster as Query, Subscription};

use rosterwatch_xmpp::test::{BareJidTestAdditions, ClientTestAdditions, ConnectedClient};
use rosterwatch_xmpp::{bare, jid, mods, Client, Event};

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn test_roster_push_emits_event_and_is_acknowledged() -> Result<()> {
    let ConnectedClient {
        client,
        connection,
        sent_events,
        ..
    } = Client::connected_client().await?;

    connection
        .receive_stanza(Element::from_str(
            r#"<iq xmlns="jabber:client" id="push-1" type="set">
              <query xmlns="jabber:iq:roster">
                <item jid="friend@rosterwatch.org" name="Friend" subscription="from" ask="subscribe">
                  <group>Work</group>
                </item>
              </query>
            </iq>"#,
        )?)
        .await;
    client.flush_events().await;

    assert_eq!(
        *sent_events.read(),
        vec![Event::Roster(mods::roster::Event::Push {
            item: Item {
                jid: BareJid::theirs(),
                name: Some("Friend".to_string()),
                subscription: Subscription::From,
                ask: Ask::Subscribe,
                groups: vec![Group("Work".to_string())],
            }
        })]
    );

    let sent = connection.sent_stanzas();
    assert_eq!(sent.len(), 1);
    let ack = Iq::try_from(sent[0].clone())?;
    assert_eq!(ack.id, "push-1");
    assert!(matches!(ack.payload, IqType::Result(None)));

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn test_ignores_roster_push_from_foreign_entity() -> Result<()> {
    let ConnectedClient {
        client,
        connection,
        sent_events,
        ..
    } = Client::connected_client().await?;

    connection
        .receive_stanza(Element::from_str(
            r#"<iq xmlns="jabber:client" id="push-1" type="set" from="mallory@evil.org">
              <query xmlns="jabber:iq:roster">
                <item jid="friend@rosterwatch.org" subscription="both"/>
              </query>
            </iq>"#,
        )?)
        .await;
    client.flush_events().await;

    assert_eq!(*sent_events.read(), vec![]);
    assert!(connection.sent_stanzas().is_empty());

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn test_subscription_presences_are_routed_to_roster() -> Result<()> {
    let ConnectedClient {
        client,
        connection,
        sent_events,
        ..
    } = Client::connected_client().await?;

    for type_ in [
        Type::Subscribe,
        Type::Subscribed,
        Type::Unsubscribe,
        Type::Unsubscribed,
    ] {
        let mut presence = Presence::new(type_);
        presence.from = Some(jid!("friend@rosterwatch.org/phone"));
        connection.receive_stanza(presence).await;
    }

    let mut presence = Presence::new(Type::None);
    presence.from = Some(jid!("friend@rosterwatch.org/phone"));
    connection.receive_stanza(presence.clone()).await;

    client.flush_events().await;

    assert_eq!(
        *sent_events.read(),
        vec![
            Event::Roster(mods::roster::Event::Subscription {
                from: bare!("friend@rosterwatch.org"),
                type_: Type::Subscribe
            }),
            Event::Roster(mods::roster::Event::Subscription {
                from: bare!("friend@rosterwatch.org"),
                type_: Type::Subscribed
            }),
            Event::Roster(mods::roster::Event::Subscription {
                from: bare!("friend@rosterwatch.org"),
                type_: Type::Unsubscribe
            }),
            Event::Roster(mods::roster::Event::Subscription {
                from: bare!("friend@rosterwatch.org"),
                type_: Type::Unsubscribed
            }),
            Event::Status(mods::status::Event::Presence(presence)),
        ]
    );

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn test_load_roster() -> Result<()> {
    let ConnectedClient {
        client, connection, ..
    } = Client::connected_client().await?;

    connection.set_stanza_handler(|stanza| {
        let Ok(iq) = Iq::try_from(stanza.clone()) else {
            return vec![];
        };
        vec![Element::from_str(&format!(
            r#"<iq xmlns="jabber:client" id="{}" type="result">
              <query xmlns="jabber:iq:roster">
                <item jid="a@rosterwatch.org" name="Alice" subscription="both">
                  <group>Friends</group>
                </item>
                <item jid="b@rosterwatch.org" subscription="none"/>
              </query>
            </iq>"#,
            iq.id
        ))
        .unwrap()]
    });

    let roster = client.get_mod::<mods::Roster>().load_roster().await?;

    assert_eq!(
        roster.items,
        vec![
            Item {
                jid: bare!("a@rosterwatch.org"),
                name: Some("Alice".to_string()),
                subscription: Subscription::Both,
                ask: Ask::None,
                groups: vec![Group("Friends".to_string())],
            },
            Item {
                jid: bare!("b@rosterwatch.org"),
                name: None,
                subscription: Subscription::None,
                ask: Ask::None,
                groups: vec![],
            }
        ]
    );

    let request = Iq::try_from(connection.sent_stanzas()[0].clone())?;
    assert_eq!(request.id, "id-1");
    let IqType::Get(payload) = request.payload else {
        panic!("Expected roster get request.")
    };
    assert_eq!(Query::try_from(payload)?.items, vec![]);

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn test_set_item_sends_roster_set() -> Result<()> {
    let ConnectedClient {
        client, connection, ..
    } = Client::connected_client().await?;

    connection.set_stanza_handler(|stanza| {
        let Ok(iq) = Iq::try_from(stanza.clone()) else {
            return vec![];
        };
        vec![Iq {
            from: None,
            to: None,
            id: iq.id,
            payload: IqType::Result(None),
        }
        .into()]
    });

    client
        .get_mod::<mods::Roster>()
        .set_item(Item {
            jid: BareJid::theirs(),
            name: Some("Buddy".to_string()),
            subscription: Subscription::Both,
            ask: Ask::Subscribe,
            groups: vec![Group("Work".to_string())],
        })
        .await?;

    let request = Iq::try_from(connection.sent_stanzas()[0].clone())?;
    let IqType::Set(payload) = request.payload else {
        panic!("Expected roster set request.")
    };

    // Subscription state is owned by the server and must not be sent along.
    assert_eq!(
        Query::try_from(payload)?.items,
        vec![Item {
            jid: BareJid::theirs(),
            name: Some("Buddy".to_string()),
            subscription: Subscription::None,
            ask: Ask::None,
            groups: vec![Group("Work".to_string())],
        }]
    );

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn test_subscribe_to_presence() -> Result<()> {
    let ConnectedClient {
        client, connection, ..
    } = Client::connected_client().await?;

    client
        .get_mod::<mods::Roster>()
        .subscribe_to_presence(&BareJid::theirs())?;

    let presence = Presence::try_from(connection.sent_stanzas()[0].clone())?;
    assert_eq!(presence.type_, Type::Subscribe);
    assert_eq!(presence.to, Some(jid!("friend@rosterwatch.org")));

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn test_pending_request_fails_on_disconnect() -> Result<()> {
    let ConnectedClient {
        client, connection, ..
    } = Client::connected_client().await?;

    let roster = client.get_mod::<mods::Roster>();
    let request = tokio::spawn(async move { roster.load_roster().await });

    tokio::task::yield_now().await;
    while connection.sent_stanzas().is_empty() {
        tokio::task::yield_now().await;
    }

    connection.receive_disconnect(None).await;
    client.flush_events().await;

    assert!(request.await?.is_err());
    assert!(!client.is_connected());

    Ok(())
}
