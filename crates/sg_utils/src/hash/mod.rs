//! Provide hash containers, re-exports *hashbrown* and *foldhash*.
//!
//! The containers here use [`FixedHashState`], so iteration order of a map
//! only depends on its content and insertion history, never on a random seed.
//! Marshalled maps are therefore written in the same order on every run.

// -----------------------------------------------------------------------------
// Modules

mod hasher;

// -----------------------------------------------------------------------------
// Exports

pub use hasher::{FixedHashState, FixedHasher};
pub use hasher::{NoOpHashState, NoOpHasher};

/// A [`hashbrown::HashMap`] using [`FixedHashState`] by default.
///
/// # Examples
///
/// ```
/// use sg_utils::hash::{FixedHashState, HashMap};
///
/// let mut map: HashMap<&str, i32> = HashMap::with_hasher(FixedHashState);
/// map.insert("spruce", 3);
/// assert_eq!(map.get("spruce"), Some(&3));
/// ```
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;

/// A [`hashbrown::HashSet`] using [`FixedHashState`] by default.
pub type HashSet<T, S = FixedHashState> = hashbrown::HashSet<T, S>;

// -----------------------------------------------------------------------------
// Re-export crates

pub use foldhash;
pub use hashbrown;
