// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

pub use mock_session_dependencies::MockSessionDependencies;
pub use recording_sink::RecordingSink;

use crate::app::deps::{DynSessionContext, SessionConfig, SessionContext};

mod recording_sink;

/// Returns a context whose output is recorded by the returned sink.
pub fn recording_context(config: SessionConfig) -> (DynSessionContext, RecordingSink) {
    let sink = RecordingSink::default();
    let ctx = Arc::new(SessionContext::new(config, Box::new(sink.clone())));
    (ctx, sink)
}
