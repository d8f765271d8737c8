// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use connection_service::ConnectionService;

mod connection_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::connection_service::MockConnectionService;
}
