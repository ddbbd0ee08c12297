//! Base trait for slice intents.

/// Marker trait for intent objects.
///
/// Intents are plain data: they carry the payload of a transition and
/// nothing else. Validation happens before an intent is built.
pub trait Intent: std::fmt::Debug + Send + 'static {}
