//! Overlap location between the fragment head and the base tail
//!
//! Policy is greedy earliest-match: the first fragment trigram that
//! confirms against any indexed base position wins, and within one
//! fragment trigram, candidates are tried at ascending base positions.
//! Sliding-window ASR overlap shows up at low offsets, so finding any
//! valid anchor quickly beats searching for the longest one.

use log::{debug, trace};

use crate::index::{trigram_key, TrigramIndex};

/// Find the base token index where the fragment's earliest matching
/// trigram aligns, or `None` when no trigram confirms.
///
/// Every hash hit is confirmed by comparing all three tokens before it
/// counts; a collision alone never produces a match.
pub fn find_overlap(
    fragment_tokens: &[&str],
    base_tokens: &[&str],
    index: &TrigramIndex,
) -> Option<usize> {
    if index.is_empty() || fragment_tokens.len() < 3 {
        return None;
    }

    for j in 0..fragment_tokens.len() - 2 {
        let triple = [
            fragment_tokens[j],
            fragment_tokens[j + 1],
            fragment_tokens[j + 2],
        ];
        let key = trigram_key(triple[0], triple[1], triple[2]);

        let Some(candidates) = index.candidates(key) else {
            continue;
        };

        for &i in candidates {
            if i + 2 < base_tokens.len()
                && base_tokens[i] == triple[0]
                && base_tokens[i + 1] == triple[1]
                && base_tokens[i + 2] == triple[2]
            {
                debug!(
                    "overlap confirmed: fragment trigram {} anchors at base token {}",
                    j, i
                );
                return Some(i);
            }
            trace!("hash hit at base token {} rejected by token comparison", i);
        }
    }

    debug!("no overlap between fragment and base");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locate(fragment: &[&str], base: &[&str]) -> Option<usize> {
        let index = TrigramIndex::build(base);
        find_overlap(fragment, base, &index)
    }

    #[test]
    fn test_exact_tail_overlap() {
        let base = ["the", "quick", "brown", "fox", "jumps"];
        let fragment = ["brown", "fox", "jumps", "over", "the", "dog"];
        assert_eq!(locate(&fragment, &base), Some(2));
    }

    #[test]
    fn test_full_self_overlap_at_zero() {
        let tokens = ["alpha", "beta", "gamma", "delta"];
        assert_eq!(locate(&tokens, &tokens), Some(0));
    }

    #[test]
    fn test_no_overlap() {
        let base = ["alpha", "beta", "gamma"];
        let fragment = ["delta", "epsilon", "zeta"];
        assert_eq!(locate(&fragment, &base), None);
    }

    #[test]
    fn test_short_fragment_never_matches() {
        let base = ["a", "b", "c", "d"];
        assert_eq!(locate(&["a", "b"], &base), None);
        assert_eq!(locate(&[], &base), None);
    }

    #[test]
    fn test_short_base_never_matches() {
        let fragment = ["a", "b", "c"];
        assert_eq!(locate(&fragment, &["a", "b"]), None);
    }

    #[test]
    fn test_earliest_fragment_trigram_wins() {
        // Both ["b","c","d"] (j=0) and ["c","d","e"] (j=1) occur in base;
        // the scan must stop at j=0 even though j=1 also matches.
        let base = ["a", "b", "c", "d", "e"];
        let fragment = ["b", "c", "d", "e", "f"];
        assert_eq!(locate(&fragment, &base), Some(1));
    }

    #[test]
    fn test_earliest_base_candidate_wins() {
        // The trigram repeats in base; the first stored (smallest) position
        // is returned, not the later one.
        let base = ["x", "y", "z", "pad", "x", "y", "z"];
        let fragment = ["x", "y", "z", "tail", "words"];
        assert_eq!(locate(&fragment, &base), Some(0));
    }

    #[test]
    fn test_case_sensitive_confirmation() {
        // Tokens keep their casing, so "Brown" does not confirm "brown".
        let base = ["the", "quick", "Brown", "fox", "jumps"];
        let fragment = ["brown", "fox", "jumps", "over"];
        assert_eq!(locate(&fragment, &base), None);
    }
}
