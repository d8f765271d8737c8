// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::presence::models::Show;

/// The presence we announce for ourselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnPresence {
    pub show: Option<Show>,
    pub status: Option<String>,
    pub priority: Option<i8>,
}

impl Default for OwnPresence {
    fn default() -> Self {
        OwnPresence {
            show: Some(Show::Xa),
            status: Some("Testing XMPP with Rust...".to_string()),
            priority: None,
        }
    }
}
