// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

/// Receives the human readable lines that describe what happened during the session.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait PresentationSink: Send + Sync {
    fn present(&self, line: &str);
}
