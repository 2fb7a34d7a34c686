//! Version 2010-04-01 of the core API domain.

pub mod account;

use std::sync::Arc;

use crate::clients::Transport;
use crate::rest::collection::ResourceCollection;
use crate::rest::errors::ResourceError;
use crate::rest::naming;
use crate::rest::path::ResourcePath;
use crate::rest::registry::TypeRegistry;

/// Server path prefix for this API version.
pub const VERSION_PATH: &str = "/2010-04-01";

/// Builds the root accounts collection for this version.
///
/// The handle is bound to `/2010-04-01/Accounts`; pass `None` as the client
/// to build an unbound handle (path composition still works, I/O does not).
///
/// # Errors
///
/// Returns [`ResourceError::UnresolvedType`] if the registry does not carry
/// the account descriptors (i.e., it was not built by
/// [`resources::registry`](crate::rest::resources::registry)).
pub fn accounts(
    registry: Arc<TypeRegistry>,
    client: Option<Arc<dyn Transport>>,
) -> Result<Arc<ResourceCollection>, ResourceError> {
    let segment = naming::path_segment(&account::ACCOUNTS.key());
    let path = ResourcePath::parse(VERSION_PATH).child(&segment);
    Ok(Arc::new(ResourceCollection::new(
        &account::ACCOUNTS,
        registry,
        path,
        client,
    )?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources;

    #[test]
    fn test_accounts_root_is_bound_to_version_path() {
        let registry = Arc::new(resources::registry().unwrap());
        let accounts = accounts(registry, None).unwrap();
        assert_eq!(accounts.path().to_string(), "/2010-04-01/Accounts");
        assert_eq!(accounts.type_name(), "Accounts");
    }
}
