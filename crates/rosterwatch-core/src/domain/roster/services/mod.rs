// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use contact_list_service::ContactListService;
pub use roster_reconciler::{RosterChange, RosterReconciler};

mod contact_list_service;
mod roster_reconciler;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::contact_list_service::MockContactListService;
}
