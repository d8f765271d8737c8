// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use jid::BareJid;

/// A contact we add to our roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub id: BareJid,
    pub name: Option<String>,
    pub groups: Vec<String>,
}
