//! Call resource descriptors.

use crate::rest::registry::{CollectionDef, InstanceDef};

/// Calls placed or received by an account.
pub static CALLS: CollectionDef = CollectionDef {
    namespace: "api.v2010.account",
    name: "Calls",
    instance_name: None,
    children: &[],
};

/// One call.
pub static CALL: InstanceDef = InstanceDef {
    namespace: "api.v2010.account",
    name: "Call",
    id_field: "sid",
    children: &[&FEEDBACK],
};

/// Quality feedback attached to a call.
///
/// The instance name does not singularize regularly; the naming exceptions
/// table maps it to `FeedbackInstance`.
pub static FEEDBACK: CollectionDef = CollectionDef {
    namespace: "api.v2010.account.call",
    name: "Feedback",
    instance_name: None,
    children: &[],
};

/// One feedback entry.
pub static FEEDBACK_INSTANCE: InstanceDef = InstanceDef {
    namespace: "api.v2010.account.call",
    name: "FeedbackInstance",
    id_field: "sid",
    children: &[],
};
