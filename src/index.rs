//! Trigram index over the base token sequence
//!
//! Overlap detection hashes each triple of consecutive tokens down to a
//! `u64` key and buckets the base positions where that key occurs. The key
//! is only a bucketing mechanism: a hash hit says nothing by itself, and
//! every candidate must be confirmed by comparing the three tokens. The
//! index lives for exactly one merge call.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

fn token_hash(token: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    token.hash(&mut hasher);
    hasher.finish()
}

/// Combining hash over three consecutive tokens.
///
/// Per-token hashes are mixed with distinct odd multipliers so that
/// reordered triples land in different buckets.
pub fn trigram_key(a: &str, b: &str, c: &str) -> u64 {
    let h1 = token_hash(a);
    let h2 = token_hash(b);
    let h3 = token_hash(c);
    ((h1.wrapping_mul(0xFEA5B)) ^ (h2.wrapping_mul(0x8DA6B)) ^ (h3.wrapping_mul(0x7A97C)))
        .wrapping_mul(0x9E37_79B9)
}

/// Maps trigram keys to the base positions where the trigram starts,
/// in ascending order. Ties downstream are broken by earliest position,
/// so insertion order matters.
#[derive(Debug, Default)]
pub struct TrigramIndex {
    buckets: HashMap<u64, Vec<usize>>,
}

impl TrigramIndex {
    /// Index every trigram of `tokens`. Fewer than three tokens means no
    /// overlap is possible and the index stays empty.
    pub fn build(tokens: &[&str]) -> Self {
        if tokens.len() < 3 {
            return Self::default();
        }

        let mut buckets: HashMap<u64, Vec<usize>> = HashMap::with_capacity(tokens.len() - 2);
        for i in 0..tokens.len() - 2 {
            let key = trigram_key(tokens[i], tokens[i + 1], tokens[i + 2]);
            buckets.entry(key).or_default().push(i);
        }

        Self { buckets }
    }

    /// Base positions whose trigram hashed to `key`, ascending.
    pub fn candidates(&self, key: u64) -> Option<&[usize]> {
        self.buckets.get(&key).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
