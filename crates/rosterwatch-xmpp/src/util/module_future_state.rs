// rosterwatch/rosterwatch-xmpp
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::task::Waker;

use crate::util::InboundStanza;

pub(crate) enum ModuleFuturePoll {
    Pending,
    Ready(Option<Waker>),
}

pub(crate) trait ModuleFutureState: Send {
    fn offer(&mut self, element: &InboundStanza) -> ModuleFuturePoll;
    fn fail_with_timeout(&mut self) -> Option<Waker>;
    fn fail_with_disconnect(&mut self) -> Option<Waker>;
}
