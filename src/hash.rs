//! Key hashing: a 32-bit streaming mix in the shape of FNV-1.
//!
//! Each byte first folds in the prime with XOR, then the byte itself. This is
//! weaker than canonical FNV (no multiply) and is kept for placement
//! compatibility with tables built by the C implementation. Keys that are
//! permutations of the same bytes always collide.

/// Starting state of every hash.
pub const FNV_OFFSET_BIAS: u32 = 2_166_136_261;

/// Mixed into the state once per input byte.
pub const FNV_PRIME: u32 = 16_777_619;

/// Hash a key's bytes.
#[inline]
pub fn hash_key(key: &[u8]) -> u32 {
    key.iter().fold(FNV_OFFSET_BIAS, |hash, &b| {
        (hash ^ FNV_PRIME) ^ u32::from(b)
    })
}

/// Slot index for `key` in a table of `capacity` slots.
#[inline]
pub(crate) fn slot_index(key: &str, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    hash_key(key.as_bytes()) as usize % capacity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_key_is_offset_bias() {
        assert_eq!(hash_key(b""), FNV_OFFSET_BIAS);
    }

    /// Invariant: prime is folded in before the byte.
    #[test]
    fn single_byte_mixes_prime_then_byte() {
        assert_eq!(hash_key(b"a"), 0x801C_9C37);
        assert_eq!(hash_key(b"a"), FNV_OFFSET_BIAS ^ FNV_PRIME ^ 0x61);
    }

    #[test]
    fn known_key_values() {
        assert_eq!(hash_key(b"test"), 2_166_136_275);
        assert_eq!(slot_index("test", 33), 6);
        assert_eq!(slot_index("test0", 33), 31);
        assert_eq!(slot_index("test2", 33), 0);
    }

    /// Invariant: byte order does not change the hash, so anagrams collide.
    #[test]
    fn anagrams_collide() {
        assert_eq!(hash_key(b"ab"), hash_key(b"ba"));
        assert_eq!(hash_key(b"abc"), hash_key(b"cba"));
        assert_ne!(hash_key(b"ab"), hash_key(b"abc"));
    }

    #[test]
    fn high_bytes_are_unsigned() {
        assert_eq!(hash_key(&[0xFF]), FNV_OFFSET_BIAS ^ FNV_PRIME ^ 0xFF);
    }
}
