// rosterwatch/rosterwatch-xmpp
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll, Waker};

use minidom::Element;
use parking_lot::Mutex;
use tracing::error;
use xmpp_parsers::iq::IqType;

use crate::util::module_future_state::{ModuleFuturePoll, ModuleFutureState};
use crate::util::request_error::RequestError;
use crate::util::InboundStanza;

/// Resolves with the payload of the IQ response matching the request's id.
pub(crate) struct RequestFuture {
    pub(crate) state: Arc<Mutex<IQRequestState>>,
}

pub(crate) struct IQRequestState {
    request_id: String,
    result: Option<Result<Option<Element>, RequestError>>,
    waker: Option<Waker>,
}

impl RequestFuture {
    pub fn new_iq_request(id: impl Into<String>) -> Self {
        RequestFuture {
            state: Arc::new(Mutex::new(IQRequestState {
                request_id: id.into(),
                result: None,
                waker: None,
            })),
        }
    }

    pub fn failed(err: RequestError) -> Self {
        RequestFuture {
            state: Arc::new(Mutex::new(IQRequestState {
                request_id: "".to_string(),
                result: Some(Err(err)),
                waker: None,
            })),
        }
    }
}

impl ModuleFutureState for IQRequestState {
    fn offer(&mut self, element: &InboundStanza) -> ModuleFuturePoll {
        if self.result.is_some() {
            return ModuleFuturePoll::Ready(self.waker.take());
        }

        let InboundStanza::Iq(iq) = element else {
            return ModuleFuturePoll::Pending;
        };

        if iq.id != self.request_id {
            return ModuleFuturePoll::Pending;
        }

        self.result = Some(match &iq.payload {
            IqType::Result(payload) => Ok(payload.clone()),
            IqType::Error(err) => Err(RequestError::Stanza { err: err.clone() }),
            IqType::Get(_) | IqType::Set(_) => Err(RequestError::UnexpectedResponse),
        });

        ModuleFuturePoll::Ready(self.waker.take())
    }

    fn fail_with_timeout(&mut self) -> Option<Waker> {
        error!("Request with id '{}' timed out.", self.request_id);
        self.result = Some(Err(RequestError::TimedOut));
        self.waker.take()
    }

    fn fail_with_disconnect(&mut self) -> Option<Waker> {
        self.result = Some(Err(RequestError::Disconnected));
        self.waker.take()
    }
}

impl Future for RequestFuture {
    type Output = Result<Option<Element>, RequestError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut state = self.state.lock();

        let Some(result) = state.result.take() else {
            state.waker = Some(cx.waker().clone());
            return Poll::Pending;
        };

        Poll::Ready(result)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use xmpp_parsers::iq::Iq;

    use super::*;

    #[tokio::test]
    async fn test_resolves_with_matching_iq_result() {
        let future = RequestFuture::new_iq_request("id-1");

        let unrelated = InboundStanza::Iq(Iq::empty_result(
            jid::Jid::from_str("a@rosterwatch.org").unwrap(),
            "id-2".to_string(),
        ));
        assert!(matches!(
            future.state.lock().offer(&unrelated),
            ModuleFuturePoll::Pending
        ));

        let response = InboundStanza::Iq(Iq::empty_result(
            jid::Jid::from_str("a@rosterwatch.org").unwrap(),
            "id-1".to_string(),
        ));
        assert!(matches!(
            future.state.lock().offer(&response),
            ModuleFuturePoll::Ready(_)
        ));

        assert_eq!(future.await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_fails_on_disconnect() {
        let future = RequestFuture::new_iq_request("id-1");
        future.state.lock().fail_with_disconnect();
        assert!(matches!(future.await, Err(RequestError::Disconnected)));
    }
}
