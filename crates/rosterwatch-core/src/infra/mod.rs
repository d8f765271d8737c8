// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod account;
pub mod connection;
pub mod contacts;
pub mod presentation;
pub mod user_profile;
pub mod xmpp;
