// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use rosterwatch_xmpp::client::ConnectorProvider;
use rosterwatch_xmpp::{Client, ClientBuilder, IDProvider};

use crate::app::deps::{SessionConfig, SessionDependencies};
use crate::app::event_handlers::ServerEventHandlerQueue;
use crate::domain::shared::services::PresentationSink;
use crate::infra::presentation::TracingSink;
use crate::infra::xmpp::{parse_xmpp_event, XMPPClient};
use crate::session::Session;

/// Assembles a `Session` that talks to a server through `rosterwatch_xmpp`.
pub struct SessionBuilder {
    builder: ClientBuilder,
    config: SessionConfig,
    sink: Box<dyn PresentationSink>,
}

impl SessionBuilder {
    pub(crate) fn new() -> Self {
        SessionBuilder {
            builder: Client::builder(),
            config: Default::default(),
            sink: Box::new(TracingSink),
        }
    }

    pub fn set_connector_provider(mut self, connector_provider: ConnectorProvider) -> Self {
        self.builder = self.builder.set_connector_provider(connector_provider);
        self
    }

    pub fn set_id_provider<P: IDProvider + 'static>(mut self, id_provider: P) -> Self {
        self.builder = self.builder.set_id_provider(id_provider);
        self
    }

    pub fn set_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn set_presentation_sink<S: PresentationSink + 'static>(mut self, sink: S) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn build(self) -> Session {
        let queue = Arc::new(ServerEventHandlerQueue::new());

        let dispatch_queue = queue.clone();
        let builder = self.builder.set_event_handler(move |_, event| {
            let queue = dispatch_queue.clone();
            async move {
                match parse_xmpp_event(event) {
                    Ok(events) => {
                        for event in events {
                            queue.handle_event(event).await
                        }
                    }
                    Err(err) => queue.handle_parse_error(err),
                }
            }
        });

        let xmpp_client = Arc::new(XMPPClient::new(builder));

        let deps = SessionDependencies {
            account_service: xmpp_client.clone(),
            connection_service: xmpp_client.clone(),
            contact_list_service: xmpp_client.clone(),
            user_profile_service: xmpp_client,
        };

        Session::new(self.config, deps, self.sink, &queue)
    }
}
