// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::{BTreeSet, HashMap};

use jid::BareJid;
use parking_lot::RwLock;

use crate::domain::roster::models::RosterEntry;

/// The authoritative in-memory table of known contacts. Callers always receive copies of
/// the stored entries.
#[derive(Default)]
pub struct RosterStore {
    entries: RwLock<HashMap<BareJid, RosterEntry>>,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &BareJid) -> Option<RosterEntry> {
        self.entries.read().get(id).cloned()
    }

    /// Replaces the entry stored under `id` and returns the previous and the applied entry.
    pub fn upsert(&self, id: &BareJid, entry: RosterEntry) -> (Option<RosterEntry>, RosterEntry) {
        let old = self.entries.write().insert(id.clone(), entry.clone());
        (old, entry)
    }

    pub fn remove(&self, id: &BareJid) -> Option<RosterEntry> {
        self.entries.write().remove(id)
    }

    /// Returns the entries belonging to `group` or all ungrouped entries if `group` is `None`.
    /// Entries are sorted by their id.
    pub fn all_by_group(&self, group: Option<&str>) -> Vec<RosterEntry> {
        let mut entries = self
            .entries
            .read()
            .values()
            .filter(|entry| match group {
                Some(group) => entry.groups.contains(group),
                None => entry.groups.is_empty(),
            })
            .cloned()
            .collect::<Vec<_>>();
        entries.sort_by_cached_key(|entry| entry.id.to_string());
        entries
    }

    /// Returns all group names in alphabetical order, followed by `None` if there are
    /// ungrouped entries.
    pub fn groups(&self) -> Vec<Option<String>> {
        let entries = self.entries.read();

        let mut groups = entries
            .values()
            .flat_map(|entry| entry.groups.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(Some)
            .collect::<Vec<_>>();

        if entries.values().any(|entry| entry.groups.is_empty()) {
            groups.push(None)
        }

        groups
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
