// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use account_service::AccountService;

mod account_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::account_service::MockAccountService;
}
