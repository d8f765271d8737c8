// rosterwatch/rosterwatch-xmpp
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use xmpp_parsers::{message, presence, roster};

pub use vcard::VCard;

pub mod ns;
pub mod vcard;
