// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use presentation_sink::PresentationSink;

mod presentation_sink;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::presentation_sink::MockPresentationSink;
}
