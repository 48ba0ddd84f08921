//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents carry everything a transition needs, including any randomness
/// drawn by the caller, so reducers never reach outside their arguments.
pub trait Intent: 'static {}
