//! # transcript-merge
//!
//! Overlap-aware merging of streaming speech-to-text fragments.
//!
//! A sliding-window recognizer re-transcribes overlapping audio, so each
//! fragment it emits may restate the tail of the text already accepted.
//! This crate deduplicates that overlap: tokenize both texts with a
//! configurable separator set, index the base's token trigrams by hash,
//! anchor the fragment's earliest confirmed trigram in the base, and
//! rebuild the transcript from the base prefix plus the fragment verbatim.
//!
//! ## Features
//!
//! - Pure, total `merge` function; every input pair has a defined output
//! - Punctuation-tolerant matching (separators stripped before comparison)
//! - Greedy earliest-match anchoring, sub-millisecond on short fragments
//! - Hash hits always confirmed by token comparison, never trusted alone
//! - Character-exact KMP fallback for byte-stable sources
//! - Stateful [`TranscriptAccumulator`] for the common streaming loop
//!
//! ## Quick Start
//!
//! ```
//! use transcript_merge::merge;
//!
//! let base = "the quick brown fox jumps";
//! let fragment = "brown fox jumps over the lazy dog";
//! assert_eq!(merge(base, fragment), "the quick brown fox jumps over the lazy dog");
//! ```
//!
//! Streaming accumulation:
//!
//! ```
//! use transcript_merge::TranscriptAccumulator;
//!
//! let mut acc = TranscriptAccumulator::new();
//! acc.push("the quick brown fox jumps");
//! let result = acc.push("brown fox jumps over the lazy dog");
//! assert_eq!(result.transcript, "the quick brown fox jumps over the lazy dog");
//! ```

mod accumulator;
mod error;
mod exact;
mod index;
mod merge;
mod overlap;
mod tokenizer;

pub use accumulator::{PushResult, TranscriptAccumulator};
pub use error::{Error, Result};
pub use exact::merge_exact;
pub use index::{trigram_key, TrigramIndex};
pub use merge::{merge, MergeConfig};
pub use overlap::find_overlap;
pub use tokenizer::{tokenize, SeparatorSet, DEFAULT_SEPARATORS};
