//! Account resource descriptors.
//!
//! Accounts are the root of the resource tree; every other resource is
//! addressed beneath one account.

pub mod call;
pub mod message;
pub mod sip;

use crate::rest::registry::{CollectionDef, InstanceDef};

/// The accounts collection.
pub static ACCOUNTS: CollectionDef = CollectionDef {
    namespace: "api.v2010",
    name: "Accounts",
    instance_name: None,
    children: &[],
};

/// One account, exposing the per-account resource tree.
pub static ACCOUNT: InstanceDef = InstanceDef {
    namespace: "api.v2010",
    name: "Account",
    id_field: "sid",
    children: &[&call::CALLS, &message::MESSAGES, &sip::SIP],
};
