//! Character-exact overlap merging
//!
//! The historical, simpler variant of the merge engine: find the longest
//! suffix of the base that is also a prefix of the fragment, at the
//! character level, and append only the remainder of the fragment. A KMP
//! failure function over `fragment + '\0' + base` does this in linear
//! time. Exact matching is brittle to punctuation and casing drift between
//! repeated transcriptions of the same audio, so the trigram engine in
//! [`crate::merge`] is the primary; this variant fits sources that emit
//! byte-stable text.

/// Merge `fragment` into `base` by character-exact suffix/prefix overlap.
///
/// Returns `base` followed by the part of `fragment` past the longest
/// suffix of `base` that equals a prefix of `fragment`. With no overlap
/// this is plain concatenation with no separator added or removed.
pub fn merge_exact(base: &str, fragment: &str) -> String {
    if base.is_empty() {
        return fragment.to_string();
    }
    if fragment.is_empty() {
        return base.to_string();
    }

    let fragment_chars: Vec<char> = fragment.chars().collect();

    // Prefix-function scan of fragment + '\0' + base. The sentinel never
    // occurs in either input, so the running prefix length at the end of
    // base is exactly the overlap length.
    let failure = failure_function(&fragment_chars);
    let mut k = 0usize;
    for ch in base.chars() {
        // A full match that does not reach the end of base is interior,
        // not a suffix overlap; fall back before consuming the next char.
        while k > 0 && (k == fragment_chars.len() || fragment_chars[k] != ch) {
            k = failure[k - 1];
        }
        if k < fragment_chars.len() && fragment_chars[k] == ch {
            k += 1;
        }
    }

    let remainder: String = fragment_chars[k..].iter().collect();
    let mut result = String::with_capacity(base.len() + remainder.len());
    result.push_str(base);
    result.push_str(&remainder);
    result
}

/// Longest-proper-prefix-which-is-also-suffix table for `pattern`.
fn failure_function(pattern: &[char]) -> Vec<usize> {
    let mut failure = vec![0usize; pattern.len()];
    let mut k = 0usize;
    for i in 1..pattern.len() {
        while k > 0 && pattern[i] != pattern[k] {
            k = failure[k - 1];
        }
        if pattern[i] == pattern[k] {
            k += 1;
        }
        failure[i] = k;
    }
    failure
}
