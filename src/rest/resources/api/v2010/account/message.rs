//! Message resource descriptors.

use crate::rest::registry::{CollectionDef, InstanceDef};

/// Messages sent or received by an account.
pub static MESSAGES: CollectionDef = CollectionDef {
    namespace: "api.v2010.account",
    name: "Messages",
    instance_name: None,
    children: &[],
};

/// One message, exposing its attached media.
pub static MESSAGE: InstanceDef = InstanceDef {
    namespace: "api.v2010.account",
    name: "Message",
    id_field: "sid",
    children: &[&MEDIA],
};

/// Media attached to a message.
///
/// `Media` is already singular-looking; the naming exceptions table maps its
/// instance type to `MediaInstance`.
pub static MEDIA: CollectionDef = CollectionDef {
    namespace: "api.v2010.account",
    name: "Media",
    instance_name: None,
    children: &[],
};

/// One media item.
pub static MEDIA_INSTANCE: InstanceDef = InstanceDef {
    namespace: "api.v2010.account",
    name: "MediaInstance",
    id_field: "sid",
    children: &[],
};
