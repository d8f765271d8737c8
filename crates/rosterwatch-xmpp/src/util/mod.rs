// rosterwatch/rosterwatch-xmpp
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::future::Future;
use std::pin::Pin;

use xmpp_parsers::iq::{Iq, IqType};

pub use element_ext::ElementExt;
pub use inbound_stanza::InboundStanza;
pub(crate) use module_future_state::{ModuleFuturePoll, ModuleFutureState};
pub use request_error::{ParseError, RequestError};
pub(crate) use request_future::RequestFuture;

pub mod element_ext;
mod inbound_stanza;
mod module_future_state;
mod request_error;
mod request_future;

pub type PinnedFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// An empty `result` answering `iq`.
pub(crate) fn acknowledge(iq: &Iq) -> Iq {
    Iq {
        from: None,
        to: iq.from.clone(),
        id: iq.id.clone(),
        payload: IqType::Result(None),
    }
}
