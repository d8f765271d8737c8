// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use rosterwatch_xmpp::stanza::VCard;

use crate::domain::user_profiles::models::UserProfile;

impl From<VCard> for UserProfile {
    fn from(value: VCard) -> Self {
        UserProfile {
            // Only the first of a comma-separated list of nicknames is used.
            nickname: value.nicknames.first().cloned(),
            full_name: value.full_name(),
        }
    }
}
