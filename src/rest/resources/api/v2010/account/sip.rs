//! SIP resource descriptors.
//!
//! `sip` is a grouping resource: it is rarely listed itself, but carries the
//! SIP-related sub-resources of an account. Its accessor renders as the
//! `SIP` path segment via the segment exceptions table, and its instance
//! name is overridden since `"Sip"` has no pluralization marker to strip.

use crate::rest::registry::{CollectionDef, InstanceDef};

/// The SIP grouping under an account.
pub static SIP: CollectionDef = CollectionDef {
    namespace: "api.v2010.account",
    name: "Sip",
    instance_name: Some("SipInstance"),
    children: &[&DOMAINS, &REGIONS, &IP_ACCESS_CONTROL_LISTS, &CREDENTIAL_LISTS],
};

/// One SIP grouping entry.
pub static SIP_INSTANCE: InstanceDef = InstanceDef {
    namespace: "api.v2010.account",
    name: "SipInstance",
    id_field: "sid",
    children: &[],
};

/// SIP domains of an account.
pub static DOMAINS: CollectionDef = CollectionDef {
    namespace: "api.v2010.account.sip",
    name: "Domains",
    instance_name: None,
    children: &[],
};

/// One SIP domain.
pub static DOMAIN: InstanceDef = InstanceDef {
    namespace: "api.v2010.account.sip",
    name: "Domain",
    id_field: "sid",
    children: &[],
};

/// SIP regions.
pub static REGIONS: CollectionDef = CollectionDef {
    namespace: "api.v2010.account.sip",
    name: "Regions",
    instance_name: None,
    children: &[],
};

/// One SIP region.
pub static REGION: InstanceDef = InstanceDef {
    namespace: "api.v2010.account.sip",
    name: "Region",
    id_field: "sid",
    children: &[],
};

/// IP access control lists scoped to an account's SIP settings.
pub static IP_ACCESS_CONTROL_LISTS: CollectionDef = CollectionDef {
    namespace: "api.v2010.account.sip",
    name: "IpAccessControlLists",
    instance_name: None,
    children: &[],
};

/// One IP access control list.
pub static IP_ACCESS_CONTROL_LIST: InstanceDef = InstanceDef {
    namespace: "api.v2010.account.sip",
    name: "IpAccessControlList",
    id_field: "sid",
    children: &[],
};

/// SIP credential lists.
pub static CREDENTIAL_LISTS: CollectionDef = CollectionDef {
    namespace: "api.v2010.account.sip",
    name: "CredentialLists",
    instance_name: None,
    children: &[],
};

/// One credential list.
pub static CREDENTIAL_LIST: InstanceDef = InstanceDef {
    namespace: "api.v2010.account.sip",
    name: "CredentialList",
    id_field: "sid",
    children: &[],
};
