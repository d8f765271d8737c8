// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use new_contact::NewContact;
pub use roster_entry::{PendingRequest, RosterEntry, Subscription};

mod new_contact;
mod roster_entry;
