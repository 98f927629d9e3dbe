//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::AddAssign,
};

use num_traits::{AsPrimitive, PrimInt, Unsigned};

/// A type that can be used as a good/bad count in a score table.
///
/// Counts are summed across shards and then widened to `i64` scores.
pub trait CountType:
    'static + PrimInt + Unsigned + AsPrimitive<i64> + Hash + Default + Debug + Display + Send + Sync + AddAssign
{
}

impl<T> CountType for T where
    T: 'static
        + PrimInt
        + Unsigned
        + AsPrimitive<i64>
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
        + AddAssign
{
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type TCHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type TCHashSet<V> = ahash::AHashSet<V>;

    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type TCHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type TCHashSet<V> = foldhash::HashSet<V>;

    } else {
        /// Type Alias for hash maps in this crate.
        pub type TCHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type TCHashSet<V> = std::collections::HashSet<V>;
    }
}

/// Create a new empty hash map.
pub fn hash_map_new<K, V>() -> TCHashMap<K, V> {
    TCHashMap::default()
}

/// Create a new hash map with the given capacity.
pub fn hash_map_with_capacity<K, V>(capacity: usize) -> TCHashMap<K, V> {
    TCHashMap::with_capacity_and_hasher(capacity, Default::default())
}

/// Create a new empty hash set.
pub fn hash_set_new<V>() -> TCHashSet<V> {
    TCHashSet::default()
}
