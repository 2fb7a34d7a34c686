//! Naming rules for resources, envelope keys, and path segments.
//!
//! Three derivations, all total and deterministic so they can be computed
//! once and cached:
//!
//! - [`instance_name`]: collection type name -> instance type name
//!   (`"Domains"` -> `"Domain"`), with a fixed exceptions table for names
//!   that do not singularize regularly.
//! - [`collection_key`]: collection type name -> the snake_case key under
//!   which the server's list envelope carries the item array
//!   (`"IpAccessControlLists"` -> `"ip_access_control_lists"`). The same
//!   derivation names sub-resource accessors.
//! - [`path_segment`]: accessor name -> URL path segment
//!   (`"domains"` -> `"Domains"`), with an exceptions table for
//!   abbreviations that keep their own casing (`"sip"` -> `"SIP"`).

/// Collection names whose instance name does not follow the regular rule.
const INSTANCE_NAME_EXCEPTIONS: &[(&str, &str)] = &[
    ("Media", "MediaInstance"),
    ("IpAddresses", "IpAddress"),
    ("Feedback", "FeedbackInstance"),
];

/// Accessor names whose path segment keeps a specific case convention.
const SEGMENT_EXCEPTIONS: &[(&str, &str)] = &[("sms", "SMS"), ("sip", "SIP")];

/// Derives the instance type name for a collection type name.
///
/// Exceptions win over the regular rule; otherwise exactly one trailing
/// pluralization marker is stripped. A name with no marker is returned
/// unchanged, so the function is total.
///
/// # Example
///
/// ```rust
/// use canopy_rest::rest::naming::instance_name;
///
/// assert_eq!(instance_name("Domains"), "Domain");
/// assert_eq!(instance_name("Media"), "MediaInstance");
/// ```
#[must_use]
pub fn instance_name(collection: &str) -> String {
    for (name, replacement) in INSTANCE_NAME_EXCEPTIONS {
        if *name == collection {
            return (*replacement).to_string();
        }
    }
    collection
        .strip_suffix('s')
        .map_or_else(|| collection.to_string(), ToString::to_string)
}

/// Derives the envelope key (and accessor name) for a collection type name.
///
/// CamelCase converts to snake_case; runs of capitals fold into one word
/// (`"SMSMessages"` -> `"sms_messages"`).
///
/// # Example
///
/// ```rust
/// use canopy_rest::rest::naming::collection_key;
///
/// assert_eq!(collection_key("Accounts"), "accounts");
/// assert_eq!(collection_key("IpAccessControlLists"), "ip_access_control_lists");
/// ```
#[must_use]
pub fn collection_key(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut key = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let after_word = i > 0 && !chars[i - 1].is_uppercase();
            let acronym_end = i > 0
                && chars[i - 1].is_uppercase()
                && chars.get(i + 1).is_some_and(|next| next.is_lowercase());
            if after_word || acronym_end {
                key.push('_');
            }
            key.extend(c.to_lowercase());
        } else {
            key.push(c);
        }
    }

    key
}

/// Renders an accessor name as a URL path segment.
///
/// Exceptions win over the regular camelizing rule.
///
/// # Example
///
/// ```rust
/// use canopy_rest::rest::naming::path_segment;
///
/// assert_eq!(path_segment("domains"), "Domains");
/// assert_eq!(path_segment("sip"), "SIP");
/// ```
#[must_use]
pub fn path_segment(accessor: &str) -> String {
    for (name, replacement) in SEGMENT_EXCEPTIONS {
        if *name == accessor {
            return (*replacement).to_string();
        }
    }

    let mut segment = String::with_capacity(accessor.len());
    for part in accessor.split('_') {
        let mut part_chars = part.chars();
        if let Some(first) = part_chars.next() {
            segment.extend(first.to_uppercase());
            segment.push_str(part_chars.as_str());
        }
    }
    segment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_name_strips_one_marker() {
        assert_eq!(instance_name("Accounts"), "Account");
        assert_eq!(instance_name("Domains"), "Domain");
        assert_eq!(instance_name("Calls"), "Call");
        assert_eq!(instance_name("CredentialLists"), "CredentialList");
    }

    #[test]
    fn test_instance_name_exceptions_win() {
        assert_eq!(instance_name("Media"), "MediaInstance");
        assert_eq!(instance_name("IpAddresses"), "IpAddress");
        assert_eq!(instance_name("Feedback"), "FeedbackInstance");
    }

    #[test]
    fn test_instance_name_is_total_for_unmarked_names() {
        assert_eq!(instance_name("Sip"), "Sip");
    }

    #[test]
    fn test_collection_key_snake_cases() {
        assert_eq!(collection_key("Accounts"), "accounts");
        assert_eq!(collection_key("Domains"), "domains");
        assert_eq!(collection_key("IncomingPhoneNumbers"), "incoming_phone_numbers");
        assert_eq!(collection_key("IpAccessControlLists"), "ip_access_control_lists");
    }

    #[test]
    fn test_collection_key_folds_acronym_runs() {
        assert_eq!(collection_key("SMSMessages"), "sms_messages");
        assert_eq!(collection_key("SIP"), "sip");
    }

    #[test]
    fn test_path_segment_camelizes() {
        assert_eq!(path_segment("domains"), "Domains");
        assert_eq!(path_segment("credential_lists"), "CredentialLists");
        assert_eq!(path_segment("ip_access_control_lists"), "IpAccessControlLists");
    }

    #[test]
    fn test_path_segment_exceptions_win() {
        assert_eq!(path_segment("sip"), "SIP");
        assert_eq!(path_segment("sms"), "SMS");
    }

    #[test]
    fn test_segment_and_key_round_trip_for_regular_names() {
        for name in ["Domains", "Regions", "CredentialLists"] {
            assert_eq!(path_segment(&collection_key(name)), name);
        }
    }
}
