//! Transcript merge entry points and assembly
//!
//! One merge call runs the whole pipeline: tokenize base and fragment,
//! build a trigram index over the base, locate the overlap anchor, then
//! assemble the merged text from the original token substrings plus the
//! fragment verbatim. All structures are call-local; the caller owns the
//! accumulated transcript across calls.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::index::TrigramIndex;
use crate::overlap::find_overlap;
use crate::tokenizer::{tokenize, SeparatorSet};

/// Configuration for the merge engine.
///
/// Only the separator set is tunable; defaults reproduce the stock
/// behavior exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Characters stripped during tokenization, as a plain string.
    #[serde(default)]
    pub separators: SeparatorSet,
}

impl MergeConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: MergeConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge `fragment` into `base` using this configuration.
    ///
    /// The result contains the non-overlapping base prefix followed by the
    /// fragment verbatim; the matched trigram content is never duplicated
    /// and no fragment token is ever dropped. Total over all inputs.
    pub fn merge(&self, base: &str, fragment: &str) -> String {
        if base.is_empty() {
            return fragment.to_string();
        }
        if fragment.is_empty() {
            return base.to_string();
        }

        let base_tokens = tokenize(base, &self.separators);
        let fragment_tokens = tokenize(fragment, &self.separators);

        if base_tokens.is_empty() {
            return fragment.to_string();
        }
        if fragment_tokens.is_empty() {
            return base.to_string();
        }

        let index = TrigramIndex::build(&base_tokens);

        match find_overlap(&fragment_tokens, &base_tokens, &index) {
            // Overlap begins at token m: keep the base prefix before it
            // (rejoined with single spaces), then the fragment.
            Some(m) if m > 0 => {
                let mut result = String::with_capacity(base.len() + fragment.len() + 1);
                result.push_str(base_tokens[0]);
                for token in &base_tokens[1..m] {
                    result.push(' ');
                    result.push_str(token);
                }
                result.push(' ');
                result.push_str(fragment);
                result
            }
            // Overlap at token 0: the fragment restates the entire base.
            Some(_) => fragment.to_string(),
            // No overlap: plain append with exactly one separating space.
            None => {
                let mut result = String::with_capacity(base.len() + fragment.len() + 1);
                result.push_str(base.trim_end_matches(' '));
                result.push(' ');
                result.push_str(fragment);
                result
            }
        }
    }
}

/// Merge `fragment` into `base` with the default separator set.
///
/// See [`MergeConfig::merge`].
pub fn merge(base: &str, fragment: &str) -> String {
    MergeConfig::default().merge(base, fragment)
}
