// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use jid::BareJid;

use crate::domain::roster::models::{NewContact, RosterEntry};

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ContactListService: Send + Sync {
    async fn load_roster(&self) -> Result<Vec<RosterEntry>>;
    /// Sends a presence subscription request to `id` without waiting for an answer.
    async fn request_subscription(&self, id: &BareJid) -> Result<()>;
    /// Renames `entry` on the server. Its groups are kept. The server confirms the change
    /// with a roster push.
    async fn set_display_name(&self, entry: &RosterEntry, name: &str) -> Result<()>;
    async fn add_contact(&self, contact: &NewContact) -> Result<()>;
}
