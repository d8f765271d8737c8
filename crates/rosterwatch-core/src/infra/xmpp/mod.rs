// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use event_parser::parse_xmpp_event;
pub use xmpp_client::XMPPClient;

mod event_parser;
mod type_conversions;
mod xmpp_client;
