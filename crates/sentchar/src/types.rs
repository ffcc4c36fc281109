//! # Common Types

/// A token id.
///
/// Token ids are the element type of the model's long-integer input tensor.
/// The type is signed so that malformed ids (negative values) can be
/// reported by decoders instead of being unrepresentable.
pub type TokenId = i64;

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type SCHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> SCHashMap<K, V> {
            SCHashMap::with_capacity(capacity)
        }
    } else {
        /// Type Alias for hash maps in this crate.
        pub type SCHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> SCHashMap<K, V> {
            SCHashMap::with_capacity(capacity)
        }
    }
}

/// Compile-time check that a value is `Send`.
#[cfg(test)]
pub(crate) fn check_is_send<S: Send>(_: &S) {}

/// Compile-time check that a value is `Sync`.
#[cfg(test)]
pub(crate) fn check_is_sync<S: Sync>(_: &S) {}
