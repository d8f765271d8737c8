// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

/// What a contact tells about themselves in their vCard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserProfile {
    pub nickname: Option<String>,
    pub full_name: Option<String>,
}

impl UserProfile {
    /// The nickname if set, otherwise the full name. Blank values don't count.
    pub fn display_name(&self) -> Option<&str> {
        [&self.nickname, &self.full_name]
            .into_iter()
            .flatten()
            .map(|name| name.trim())
            .find(|name| !name.is_empty())
    }
}
