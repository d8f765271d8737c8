// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::shared::services::PresentationSink;

/// Collects presented lines. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Returns the recorded lines and clears the buffer.
    pub fn take_lines(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }
}

impl PresentationSink for RecordingSink {
    fn present(&self, line: &str) {
        self.lines.lock().push(line.to_string())
    }
}
