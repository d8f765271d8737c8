// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use jid::FullJid;
use secrecy::SecretString;

use rosterwatch_xmpp::ConnectionError;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ConnectionService: Send + Sync {
    async fn connect(&self, jid: &FullJid, password: SecretString) -> Result<(), ConnectionError>;
    async fn disconnect(&self);
}
