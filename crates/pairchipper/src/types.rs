//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// A type that can be used as a token.
///
/// These are constrained to be unsigned primitive integers;
/// such that every learned token id is less than `T::max()`.
///
/// Tokens `0..=255` are raw bytes; learned composite tokens
/// are allocated upwards from a configured start token.
pub trait TokenType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> TokenType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// A pair of adjacent tokens.
pub type Pair<T> = (T, T);

/// The largest token value which denotes a raw byte.
pub const MAX_BYTE_TOKEN: u64 = u8::MAX as u64;

/// The default first composite token id.
pub const DEFAULT_START_TOKEN: u64 = MAX_BYTE_TOKEN + 1;

/// Does this token denote a raw byte?
pub fn is_byte_token<T: TokenType>(token: T) -> bool {
    token.to_u64().is_some_and(|t| t <= MAX_BYTE_TOKEN)
}

/// View a token as a `u64`, for diagnostics and persistence.
///
/// Every [`TokenType`] is an unsigned primitive no wider than 64 bits.
pub fn token_u64<T: TokenType>(token: T) -> u64 {
    token.to_u64().unwrap_or(u64::MAX)
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type PCHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> PCHashMap<K, V> {
            PCHashMap::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type PCHashSet<V> = ahash::AHashSet<V>;

    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type PCHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> PCHashMap<K, V> {
            foldhash::HashMapExt::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type PCHashSet<V> = foldhash::HashSet<V>;

    } else {
        /// Type Alias for hash maps in this crate.
        pub type PCHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> PCHashMap<K, V> {
            PCHashMap::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type PCHashSet<V> = std::collections::HashSet<V>;
    }
}

#[cfg(test)]
mod tests {
    use core::marker::PhantomData;

    use super::*;

    #[test]
    fn test_common_token_types() {
        struct IsToken<T: TokenType>(PhantomData<T>);

        let _: IsToken<u16>;
        let _: IsToken<u32>;
        let _: IsToken<u64>;
        let _: IsToken<usize>;
    }

    #[test]
    fn test_is_byte_token() {
        assert!(is_byte_token(0_u32));
        assert!(is_byte_token(255_u16));
        assert!(!is_byte_token(256_u16));
        assert!(!is_byte_token(u64::MAX));

        assert_eq!(token_u64(300_u16), 300);
        assert_eq!(DEFAULT_START_TOKEN, 256);
    }
}
