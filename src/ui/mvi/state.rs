//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are cloned snapshots holding everything their view needs, and
/// `Default` is the state a freshly opened view starts in.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
