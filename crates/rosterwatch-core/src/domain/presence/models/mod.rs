// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use presence_snapshot::{PresenceSnapshot, PresenceType, Show};

mod presence_snapshot;
