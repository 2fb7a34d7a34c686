//! Generated resource descriptors, organized by API domain and version.
//!
//! Everything in this module is mechanical: descriptor tables mirroring an
//! API description, one module per level of the resource tree. The engine in
//! the parent module neither knows nor cares which tree it walks; these
//! tables are what a code generator would emit.
//!
//! ```text
//! resources/
//!   mod.rs             <- This file (registry bootstrap)
//!   api/
//!     v2010/
//!       mod.rs         <- Version root (Accounts)
//!       account/       <- Per-resource descriptor modules
//! ```
//!
//! # Bootstrapping
//!
//! ```rust
//! use std::sync::Arc;
//! use canopy_rest::rest::resources::{self, api::v2010};
//!
//! let registry = Arc::new(resources::registry().unwrap());
//! let accounts = v2010::accounts(registry, None).unwrap();
//! assert_eq!(accounts.path().to_string(), "/2010-04-01/Accounts");
//! ```

pub mod api;

use crate::rest::errors::ResourceError;
use crate::rest::registry::TypeRegistry;

/// Builds the registry for every generated descriptor in this module tree.
///
/// Validation walks the whole tree, so a generation mismatch fails here —
/// at startup — rather than on first use.
///
/// # Errors
///
/// Returns [`ResourceError::UnresolvedType`] if any descriptor names an
/// unregistered instance type.
pub fn registry() -> Result<TypeRegistry, ResourceError> {
    use api::v2010::account::{call, message, sip};

    TypeRegistry::new(
        &[
            &api::v2010::account::ACCOUNT,
            &call::CALL,
            &call::FEEDBACK_INSTANCE,
            &message::MESSAGE,
            &message::MEDIA_INSTANCE,
            &sip::SIP_INSTANCE,
            &sip::DOMAIN,
            &sip::REGION,
            &sip::IP_ACCESS_CONTROL_LIST,
            &sip::CREDENTIAL_LIST,
        ],
        &[&api::v2010::account::ACCOUNTS],
    )
}
