// rosterwatch/rosterwatch-xmpp
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicU64, Ordering};

use crate::IDProvider;

/// Produces `{prefix}-1`, `{prefix}-2`, … so tests can predict stanza ids.
pub struct IncrementingIDProvider {
    prefix: String,
    counter: AtomicU64,
}

impl IncrementingIDProvider {
    pub fn new(prefix: impl Into<String>) -> Self {
        IncrementingIDProvider {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }

    /// Starts over at `{prefix}-1`.
    pub fn reset(&self) {
        self.counter.store(0, Ordering::SeqCst);
    }
}

impl IDProvider for IncrementingIDProvider {
    fn new_id(&self) -> String {
        let next = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{}-{}", self.prefix, next)
    }
}
