// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use jid::BareJid;
use parking_lot::Mutex;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, info, Instrument};

use crate::app::deps::{
    DynContactListService, DynRosterStore, DynSessionContext, DynUserProfileService,
};

/// Looks up the vCards of contacts in the background and renames them after the name found
/// there.
pub struct ProfileResolver {
    ctx: DynSessionContext,
    store: DynRosterStore,
    contact_list_service: DynContactListService,
    user_profile_service: DynUserProfileService,
    permits: Arc<Semaphore>,
    tasks: Mutex<JoinSet<ResolveOutcome>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    Renamed(String),
    NoDetails,
    Failed,
    Cancelled,
}

impl ProfileResolver {
    pub fn new(
        ctx: DynSessionContext,
        store: DynRosterStore,
        contact_list_service: DynContactListService,
        user_profile_service: DynUserProfileService,
    ) -> Self {
        let permits = Arc::new(Semaphore::new(ctx.config.max_concurrent_lookups.max(1)));

        Self {
            ctx,
            store,
            contact_list_service,
            user_profile_service,
            permits,
            tasks: Default::default(),
        }
    }

    /// Schedules a lookup for `id` and returns immediately. Lookups that completed in the
    /// meantime are collected and their outcomes dropped.
    pub fn resolve(&self, id: &BareJid) {
        let lookup = ProfileLookup {
            id: id.clone(),
            store: self.store.clone(),
            contact_list_service: self.contact_list_service.clone(),
            user_profile_service: self.user_profile_service.clone(),
            permits: self.permits.clone(),
        };
        let cancellation_token = self.ctx.cancellation_token();

        let mut tasks = self.tasks.lock();
        while let Some(result) = tasks.try_join_next() {
            if let Err(err) = result {
                error!("Profile lookup did not complete. {}", err);
            }
        }

        tasks.spawn(
            async move {
                tokio::select! {
                    biased;
                    _ = cancellation_token.cancelled() => ResolveOutcome::Cancelled,
                    outcome = lookup.run() => outcome,
                }
            }
            .in_current_span(),
        );
    }

    /// The number of lookups that were scheduled but not yet collected.
    pub fn pending_lookups(&self) -> usize {
        self.tasks.lock().len()
    }

    /// Waits for all scheduled lookups to complete and returns their outcomes in the order
    /// they completed.
    pub async fn wait_for_pending_lookups(&self) -> Vec<ResolveOutcome> {
        let mut tasks = std::mem::take(&mut *self.tasks.lock());
        let mut outcomes = vec![];

        while let Some(result) = tasks.join_next().await {
            match result {
                Ok(outcome) => outcomes.push(outcome),
                Err(err) => error!("Profile lookup did not complete. {}", err),
            }
        }

        outcomes
    }
}

struct ProfileLookup {
    id: BareJid,
    store: DynRosterStore,
    contact_list_service: DynContactListService,
    user_profile_service: DynUserProfileService,
    permits: Arc<Semaphore>,
}

impl ProfileLookup {
    async fn run(self) -> ResolveOutcome {
        let Ok(_permit) = self.permits.acquire().await else {
            return ResolveOutcome::Cancelled;
        };

        let profile = match self.user_profile_service.load_profile(&self.id).await {
            Ok(profile) => profile,
            Err(err) => {
                error!("Error getting profile of {}. {}", self.id, err);
                return ResolveOutcome::Failed;
            }
        };

        let Some(name) = profile
            .as_ref()
            .and_then(|profile| profile.display_name())
            .map(ToString::to_string)
        else {
            info!("{} provided no usable profile data", self.id);
            return ResolveOutcome::NoDetails;
        };

        let Some(entry) = self.store.get(&self.id) else {
            debug!("{} left the roster before it could be renamed.", self.id);
            return ResolveOutcome::Cancelled;
        };

        info!("Renaming {} to {}", self.id, name);

        if let Err(err) = self
            .contact_list_service
            .set_display_name(&entry, &name)
            .await
        {
            error!("Failed to rename {}. {}", self.id, err);
            return ResolveOutcome::Failed;
        }

        ResolveOutcome::Renamed(name)
    }
}
