// rosterwatch/rosterwatch-xmpp
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::any::TypeId;
use std::collections::BTreeMap;

use parking_lot::RwLock;

pub use builder::ClientBuilder;
pub use client::Client;
pub(crate) use module_context::ModuleContext;

use crate::connector::{ConnectionError, Connector};
use crate::mods::AnyModule;
use crate::util::PinnedFuture;

mod builder;
mod client;
mod module_context;

/// Creates a fresh connector for every connection attempt.
pub type ConnectorProvider = Box<dyn Fn() -> Box<dyn Connector> + Send + Sync>;

/// Receives every event the client and its modules emit, one after another.
pub type EventHandler = Box<dyn Fn(Client, crate::Event) -> PinnedFuture<()> + Send + Sync>;

pub(super) type ModuleRegistry = BTreeMap<TypeId, RwLock<Box<dyn AnyModule>>>;

/// Changes of the connection itself, as opposed to events derived from stanzas.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Connected,
    Disconnected { error: Option<ConnectionError> },
}
