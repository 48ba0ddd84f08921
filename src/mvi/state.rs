//! Base trait for state in MVI architecture.

/// Marker trait for state objects.
///
/// `PartialEq` is what owners use to decide whether a dispatch changed
/// anything and observers need to hear about it.
pub trait UiState: Clone + PartialEq + Default + 'static {}
