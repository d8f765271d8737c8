// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod account;
pub mod connection;
pub mod messaging;
pub mod presence;
pub mod roster;
pub mod shared;
pub mod subscriptions;
pub mod user_profiles;
