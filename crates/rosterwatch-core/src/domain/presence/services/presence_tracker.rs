// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::fmt::Display;

use jid::BareJid;
use parking_lot::Mutex;

use crate::app::deps::{DynRosterStore, DynSessionContext};
use crate::domain::presence::models::PresenceSnapshot;

/// Remembers the last presence of every contact and describes how it changed.
pub struct PresenceTracker {
    ctx: DynSessionContext,
    store: DynRosterStore,
    snapshots: Mutex<HashMap<BareJid, PresenceSnapshot>>,
}

impl PresenceTracker {
    pub fn new(ctx: DynSessionContext, store: DynRosterStore) -> Self {
        Self {
            ctx,
            store,
            snapshots: Default::default(),
        }
    }

    /// Records `presence` for `id` and returns one line per changed field. A missing
    /// presence counts as an empty one.
    pub fn on_presence(&self, id: &BareJid, presence: Option<PresenceSnapshot>) -> Vec<String> {
        let new = presence.unwrap_or_default();
        let old = self
            .snapshots
            .lock()
            .insert(id.clone(), new.clone())
            .unwrap_or_default();

        let prefix = match self.store.get(id).and_then(|entry| entry.name) {
            Some(name) => format!("{} ({})", name, id),
            None => id.to_string(),
        };

        let mut lines = vec![];

        if old.type_ != new.type_ {
            let describe = |snapshot: &PresenceSnapshot| {
                snapshot
                    .type_
                    .map(|t| t.to_string())
                    .unwrap_or_else(|| "available".to_string())
            };
            lines.push(format!(
                "{}: Type: {} -> {}",
                prefix,
                describe(&old),
                describe(&new)
            ));
        }
        if old.show != new.show {
            lines.push(format!(
                "{}: Show: {} -> {}",
                prefix,
                quoted(old.show),
                quoted(new.show)
            ));
        }
        if old.status != new.status {
            lines.push(format!(
                "{}: Status: {} -> {}",
                prefix,
                quoted(old.status),
                quoted(new.status)
            ));
        }
        if old.priority != new.priority {
            let describe = |priority: Option<i8>| {
                priority
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| "none".to_string())
            };
            lines.push(format!(
                "{}: Priority: {} -> {}",
                prefix,
                describe(old.priority),
                describe(new.priority)
            ));
        }

        for line in lines.iter() {
            self.ctx.present(line);
        }

        lines
    }
}

fn quoted(value: Option<impl Display>) -> String {
    format!(
        "\"{}\"",
        value.map(|value| value.to_string()).unwrap_or_default()
    )
}
