// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::info;

use crate::domain::shared::services::PresentationSink;

/// Writes every line to the log. Used when no other sink was configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl PresentationSink for TracingSink {
    fn present(&self, line: &str) {
        info!(target: "rosterwatch::presentation", "{}", line);
    }
}
