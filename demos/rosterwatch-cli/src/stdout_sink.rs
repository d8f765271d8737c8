// rosterwatch/rosterwatch-cli
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use rosterwatch_core::domain::shared::services::PresentationSink;

pub struct StdoutSink;

impl PresentationSink for StdoutSink {
    fn present(&self, line: &str) {
        println!("{}", line)
    }
}
