// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use jid::FullJid;
use secrecy::SecretString;

use rosterwatch_xmpp::{Client, ConnectionError};

use crate::domain::connection::services::ConnectionService;
use crate::infra::xmpp::XMPPClient;

#[async_trait]
impl ConnectionService for XMPPClient {
    async fn connect(&self, jid: &FullJid, password: SecretString) -> Result<(), ConnectionError> {
        Client::connect(self, jid, password).await
    }

    async fn disconnect(&self) {
        Client::disconnect(self)
    }
}
