// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub(crate) use presence::presence_type;

mod incoming_message;
mod presence;
mod roster_entry;
mod user_profile;
