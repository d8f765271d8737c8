// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use session_context::{SessionConfig, SessionContext, StartupActions};
pub use session_dependencies::*;

mod session_context;
mod session_dependencies;
