// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::account::models::OwnPresence;
use crate::domain::messaging::models::OutgoingMessage;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait AccountService: Send + Sync {
    async fn send_presence(&self, presence: &OwnPresence) -> Result<()>;
    async fn send_message(&self, message: &OutgoingMessage) -> Result<()>;
}
