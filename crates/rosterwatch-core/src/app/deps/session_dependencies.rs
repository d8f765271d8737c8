// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::session_context::SessionContext;
use crate::domain::account::services::AccountService;
use crate::domain::connection::services::ConnectionService;
use crate::domain::roster::repos::RosterStore;
use crate::domain::roster::services::ContactListService;
use crate::domain::user_profiles::services::{ProfileResolver, UserProfileService};

pub type DynAccountService = Arc<dyn AccountService>;
pub type DynConnectionService = Arc<dyn ConnectionService>;
pub type DynContactListService = Arc<dyn ContactListService>;
pub type DynProfileResolver = Arc<ProfileResolver>;
pub type DynRosterStore = Arc<RosterStore>;
pub type DynSessionContext = Arc<SessionContext>;
pub type DynUserProfileService = Arc<dyn UserProfileService>;

/// The protocol facing services a session talks to.
#[derive(Clone)]
pub struct SessionDependencies {
    pub account_service: DynAccountService,
    pub connection_service: DynConnectionService,
    pub contact_list_service: DynContactListService,
    pub user_profile_service: DynUserProfileService,
}
