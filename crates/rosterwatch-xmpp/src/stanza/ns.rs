// rosterwatch/rosterwatch-xmpp
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use xmpp_parsers::ns::*;

/// XEP-0054: vcard-temp
pub const VCARD_TEMP: &str = "vcard-temp";
