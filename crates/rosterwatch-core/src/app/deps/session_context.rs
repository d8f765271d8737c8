// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::domain::account::models::OwnPresence;
use crate::domain::messaging::models::OutgoingMessage;
use crate::domain::roster::models::NewContact;
use crate::domain::shared::services::PresentationSink;
use crate::SessionError;

pub struct SessionConfig {
    /// Look up the vCard of contacts without a name and rename them accordingly.
    pub resolve_profiles: bool,
    /// The maximum number of vCard lookups running at the same time.
    pub max_concurrent_lookups: usize,
    /// The presence we announce after connecting.
    pub initial_presence: OwnPresence,
    pub startup_actions: StartupActions,
}

/// Performed once after the roster was listed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StartupActions {
    /// Adds the contact to the roster and asks for their presence.
    pub add_contact: Option<NewContact>,
    pub send_message: Option<OutgoingMessage>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            resolve_profiles: false,
            max_concurrent_lookups: 4,
            initial_presence: Default::default(),
            startup_actions: Default::default(),
        }
    }
}

/// State shared by every component of a session.
pub struct SessionContext {
    pub config: SessionConfig,
    sink: Box<dyn PresentationSink>,
    fatal_error_sender: mpsc::UnboundedSender<SessionError>,
    fatal_error_receiver: Mutex<Option<mpsc::UnboundedReceiver<SessionError>>>,
    cancellation_token: CancellationToken,
}

impl SessionContext {
    pub fn new(config: SessionConfig, sink: Box<dyn PresentationSink>) -> Self {
        let (fatal_error_sender, fatal_error_receiver) = mpsc::unbounded_channel();

        Self {
            config,
            sink,
            fatal_error_sender,
            fatal_error_receiver: Mutex::new(Some(fatal_error_receiver)),
            cancellation_token: CancellationToken::new(),
        }
    }

    pub fn present(&self, line: impl AsRef<str>) {
        self.sink.present(line.as_ref())
    }

    /// Ends the session with `error` once the session gets to handle it.
    pub fn abort_session(&self, error: SessionError) {
        if self.fatal_error_sender.send(error).is_err() {
            debug!("Ignoring fatal error since the session has already ended.");
        }
    }

    pub(crate) fn take_fatal_errors(&self) -> Option<mpsc::UnboundedReceiver<SessionError>> {
        self.fatal_error_receiver.lock().take()
    }

    /// A token that is cancelled when the session shuts down.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation_token.child_token()
    }

    pub(crate) fn cancel_pending_work(&self) {
        self.cancellation_token.cancel()
    }

    pub fn is_shutting_down(&self) -> bool {
        self.cancellation_token.is_cancelled()
    }
}
