// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use subscription_negotiator::SubscriptionNegotiator;

mod subscription_negotiator;
