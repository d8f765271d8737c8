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

use rosterwatch_xmpp::stanza::VCard;
use rosterwatch_xmpp::test::{BareJidTestAdditions, ClientTestAdditions, ConnectedClient};
use rosterwatch_xmpp::{jid, mods, ns, Client};

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn test_load_vcard_temp() -> Result<()> {
    let ConnectedClient {
        client, connection, ..
    } = Client::connected_client().await?;

    connection.set_stanza_handler(|stanza| {
        let Ok(iq) = Iq::try_from(stanza.clone()) else {
            return vec![];
        };
        vec![Element::from_str(&format!(
            r#"<iq xmlns="jabber:client" id="{}" type="result" from="friend@rosterwatch.org">
              <vCard xmlns="vcard-temp">
                <FN>Jane Doe</FN>
                <NICKNAME>jane</NICKNAME>
              </vCard>
            </iq>"#,
            iq.id
        ))
        .unwrap()]
    });

    let vcard = client
        .get_mod::<mods::Profile>()
        .load_vcard_temp(BareJid::theirs())
        .await?;

    assert_eq!(
        vcard,
        Some(VCard {
            formatted_name: Some("Jane Doe".to_string()),
            nicknames: vec!["jane".to_string()],
            ..Default::default()
        })
    );

    let request = Iq::try_from(connection.sent_stanzas()[0].clone())?;
    assert_eq!(request.to, Some(jid!("friend@rosterwatch.org")));
    let IqType::Get(payload) = request.payload else {
        panic!("Expected vCard get request.")
    };
    assert!(payload.is("vCard", ns::VCARD_TEMP));

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn test_missing_vcard_resolves_to_none() -> Result<()> {
    let ConnectedClient {
        client, connection, ..
    } = Client::connected_client().await?;

    connection.set_stanza_handler(|stanza| {
        let Ok(iq) = Iq::try_from(stanza.clone()) else {
            return vec![];
        };
        vec![Element::from_str(&format!(
            r#"<iq xmlns="jabber:client" id="{}" type="error" from="friend@rosterwatch.org">
              <error type="cancel">
                <item-not-found xmlns="urn:ietf:params:xml:ns:xmpp-stanzas"/>
              </error>
            </iq>"#,
            iq.id
        ))
        .unwrap()]
    });

    let vcard = client
        .get_mod::<mods::Profile>()
        .load_vcard_temp(BareJid::theirs())
        .await?;

    assert_eq!(vcard, None);

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn test_vcard_lookup_error_is_propagated() -> Result<()> {
    let ConnectedClient {
        client, connection, ..
    } = Client::connected_client().await?;

    connection.set_stanza_handler(|stanza| {
        let Ok(iq) = Iq::try_from(stanza.clone()) else {
            return vec![];
        };
        vec![Element::from_str(&format!(
            r#"<iq xmlns="jabber:client" id="{}" type="error" from="friend@rosterwatch.org">
              <error type="cancel">
                <forbidden xmlns="urn:ietf:params:xml:ns:xmpp-stanzas"/>
              </error>
            </iq>"#,
            iq.id
        ))
        .unwrap()]
    });

    let result = client
        .get_mod::<mods::Profile>()
        .load_vcard_temp(BareJid::theirs())
        .await;

    assert!(result.is_err());

    Ok(())
}
