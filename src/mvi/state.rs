//! Base trait for slice state.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Marker trait for slice state objects.
///
/// States must be:
/// - Cloneable (selectors hand out snapshots)
/// - Comparable (PartialEq lets the store skip no-op notifications)
/// - Serializable (persistence writes them as JSON)
pub trait SliceState:
    Clone + PartialEq + Default + Serialize + DeserializeOwned + Send + Sync + 'static
{
}
