// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use profile_resolver::{ProfileResolver, ResolveOutcome};
pub use user_profile_service::UserProfileService;

mod profile_resolver;
mod user_profile_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::user_profile_service::MockUserProfileService;
}
