// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::fmt::Formatter;

use jid::BareJid;
use parking_lot::Mutex;
use tracing::{error, info};

use crate::app::deps::{
    DynContactListService, DynProfileResolver, DynRosterStore, DynSessionContext,
};
use crate::domain::roster::models::{RosterEntry, Subscription};

/// Applies roster pushes to the `RosterStore`, asks new contacts for their presence and
/// describes every change.
pub struct RosterReconciler {
    ctx: DynSessionContext,
    store: DynRosterStore,
    contact_list_service: DynContactListService,
    profile_resolver: DynProfileResolver,
    /// The subscription state an entry had when we last asked for its presence.
    requested_subscriptions: Mutex<HashMap<BareJid, Subscription>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RosterChange {
    Discovered { new: RosterEntry },
    Updated { old: RosterEntry, new: RosterEntry },
    Removed { id: BareJid, old: Option<RosterEntry> },
}

impl RosterReconciler {
    pub fn new(
        ctx: DynSessionContext,
        store: DynRosterStore,
        contact_list_service: DynContactListService,
        profile_resolver: DynProfileResolver,
    ) -> Self {
        Self {
            ctx,
            store,
            contact_list_service,
            profile_resolver,
            requested_subscriptions: Default::default(),
        }
    }

    pub async fn on_roster_push(&self, entry: RosterEntry) -> RosterChange {
        let id = entry.id.clone();

        if entry.subscription == Subscription::Remove {
            self.requested_subscriptions.lock().remove(&id);
            let old = self.store.remove(&id);
            let change = RosterChange::Removed { id, old };
            self.ctx.present(change.to_string());
            return change;
        }

        let (old, new) = self.store.upsert(&id, entry);

        self.apply_subscription_policy(&new).await;

        let lacks_name = new.name.is_none();
        let change = match old {
            None => RosterChange::Discovered { new },
            Some(old) => RosterChange::Updated { old, new },
        };
        self.ctx.present(change.to_string());

        if lacks_name && self.ctx.config.resolve_profiles {
            self.profile_resolver.resolve(&id);
        }

        change
    }

    async fn apply_subscription_policy(&self, entry: &RosterEntry) {
        if !entry.wants_presence_subscription() {
            self.requested_subscriptions.lock().remove(&entry.id);
            return;
        }

        {
            let mut requested = self.requested_subscriptions.lock();
            if requested.get(&entry.id) == Some(&entry.subscription) {
                return;
            }
            requested.insert(entry.id.clone(), entry.subscription);
        }

        if let Err(err) = self
            .contact_list_service
            .request_subscription(&entry.id)
            .await
        {
            error!(
                "Failed to request presence subscription from {}. {}",
                entry.id, err
            );
            // Forget the failed request so that the next push tries again.
            let mut requested = self.requested_subscriptions.lock();
            if requested.get(&entry.id) == Some(&entry.subscription) {
                requested.remove(&entry.id);
            }
            return;
        }

        info!("Requested presence subscription from {}", entry.id);
        self.ctx.present(format!("Subscribing to {}", entry.id));
    }
}

impl std::fmt::Display for RosterChange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterChange::Discovered { new } => write!(f, "Discovered {}", new),
            RosterChange::Updated { old, new } => write!(f, "{} -> {}", old, new),
            RosterChange::Removed { old: Some(old), .. } => write!(f, "Removed {}", old),
            RosterChange::Removed { id, old: None } => write!(f, "Removed ({})", id),
        }
    }
}
