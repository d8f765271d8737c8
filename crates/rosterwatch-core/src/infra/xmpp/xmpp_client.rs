// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;

use rosterwatch_xmpp::{mods, Client, ClientBuilder};

/// The protocol client every infra service is implemented on, with the modules those
/// services need.
#[derive(Clone)]
pub struct XMPPClient {
    client: Client,
}

impl XMPPClient {
    pub fn new(builder: ClientBuilder) -> Self {
        let client = builder
            .add_mod(mods::Chat::default())
            .add_mod(mods::Profile::default())
            .add_mod(mods::Roster::default())
            .add_mod(mods::Status::default())
            .build();
        XMPPClient { client }
    }
}

impl Deref for XMPPClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}
