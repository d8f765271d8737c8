// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use rosterwatch_xmpp::mods;

use crate::domain::account::models::OwnPresence;
use crate::domain::account::services::AccountService;
use crate::domain::messaging::models::OutgoingMessage;
use crate::infra::xmpp::XMPPClient;

#[async_trait]
impl AccountService for XMPPClient {
    async fn send_presence(&self, presence: &OwnPresence) -> Result<()> {
        let status = self.get_mod::<mods::Status>();
        status.send_presence(
            presence.show.map(Into::into),
            presence.status.as_deref(),
            presence.priority,
        )
    }

    async fn send_message(&self, message: &OutgoingMessage) -> Result<()> {
        let chat = self.get_mod::<mods::Chat>();
        chat.send_message(
            message.to.clone(),
            message.body.as_str(),
            message.subject.as_deref(),
        )
    }
}
