//! Insertion-ordered containers, re-exports *indexmap*.

use crate::hash::FixedHashState;

/// An [`indexmap::IndexMap`] using [`FixedHashState`].
///
/// Entries keep their insertion order. Removal through
/// [`shift_remove`](indexmap::IndexMap::shift_remove) preserves the order of
/// the remaining entries.
///
/// # Examples
///
/// ```
/// use rc_utils::hash::FixedHashState;
/// use rc_utils::index::IndexMap;
///
/// let mut map = IndexMap::<&str, i32>::with_hasher(FixedHashState);
/// map.insert("b", 2);
/// map.insert("a", 1);
/// map.insert("c", 3);
/// map.shift_remove("a");
///
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), ["b", "c"]);
/// ```
pub type IndexMap<K, V, S = FixedHashState> = indexmap::IndexMap<K, V, S>;

// -----------------------------------------------------------------------------
// Re-export crates

pub use indexmap;
