// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use jid::BareJid;

use crate::domain::user_profiles::models::UserProfile;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait UserProfileService: Send + Sync {
    async fn load_profile(&self, id: &BareJid) -> Result<Option<UserProfile>>;
}
