// rosterwatch/rosterwatch-xmpp
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use uuid::Uuid;

/// Source of the `id` attribute for outgoing stanzas. IQ responses are matched by it.
pub trait IDProvider: Send + Sync {
    fn new_id(&self) -> String;
}

/// Random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UUIDProvider;

impl IDProvider for UUIDProvider {
    fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

impl<P: IDProvider + ?Sized> IDProvider for Arc<P> {
    fn new_id(&self) -> String {
        P::new_id(self)
    }
}
