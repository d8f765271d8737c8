// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use jid::BareJid;
use xmpp_parsers::roster::{Group, Item};

use rosterwatch_xmpp::mods;

use crate::domain::roster::models::{NewContact, RosterEntry};
use crate::domain::roster::services::ContactListService;
use crate::infra::xmpp::XMPPClient;

#[async_trait]
impl ContactListService for XMPPClient {
    async fn load_roster(&self) -> Result<Vec<RosterEntry>> {
        let roster = self.get_mod::<mods::Roster>();
        let entries = roster
            .load_roster()
            .await?
            .items
            .into_iter()
            .map(RosterEntry::from)
            .collect::<Vec<_>>();
        Ok(entries)
    }

    async fn request_subscription(&self, id: &BareJid) -> Result<()> {
        let roster = self.get_mod::<mods::Roster>();
        roster.subscribe_to_presence(id)
    }

    async fn set_display_name(&self, entry: &RosterEntry, name: &str) -> Result<()> {
        let roster = self.get_mod::<mods::Roster>();
        roster
            .set_item(Item {
                jid: entry.id.clone(),
                name: Some(name.to_string()),
                subscription: Default::default(),
                ask: Default::default(),
                groups: entry.groups.iter().cloned().map(Group).collect(),
            })
            .await
    }

    async fn add_contact(&self, contact: &NewContact) -> Result<()> {
        let roster = self.get_mod::<mods::Roster>();
        roster
            .add_contact(&contact.id, contact.name.as_deref(), &contact.groups)
            .await
    }
}
