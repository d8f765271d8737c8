// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use error::SessionError;
pub use session::Session;
pub use session_builder::SessionBuilder;

pub mod app;
pub mod domain;
mod error;
pub mod infra;
mod session;
mod session_builder;

#[cfg(feature = "test")]
pub mod test;
