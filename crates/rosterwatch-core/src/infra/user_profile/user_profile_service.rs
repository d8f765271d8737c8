// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use jid::BareJid;

use rosterwatch_xmpp::mods;

use crate::domain::user_profiles::models::UserProfile;
use crate::domain::user_profiles::services::UserProfileService;
use crate::infra::xmpp::XMPPClient;

#[async_trait]
impl UserProfileService for XMPPClient {
    async fn load_profile(&self, id: &BareJid) -> Result<Option<UserProfile>> {
        let profile = self.get_mod::<mods::Profile>();
        let vcard = profile.load_vcard_temp(id.clone()).await?;
        Ok(vcard
            .filter(|vcard| !vcard.is_empty())
            .map(UserProfile::from))
    }
}
