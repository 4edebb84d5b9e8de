//! Stateful transcript accumulation over the merge engine
//!
//! The engine itself is a pure function of two strings; this type carries
//! the running transcript between calls for callers that want the usual
//! loop (merge each arriving fragment into the last accepted text, display
//! the result, repeat) without managing the base themselves. Fragments
//! must be pushed in arrival order.

use serde::Serialize;

use crate::merge::MergeConfig;
use crate::tokenizer::tokenize;

/// Result of pushing one fragment into the accumulator.
#[derive(Debug, Clone, Serialize)]
pub struct PushResult {
    /// The full transcript after the merge.
    pub transcript: String,
    /// Text appended since the previous transcript, for incremental
    /// display. Empty when the merge rewrote the tail instead of
    /// extending it.
    pub delta: String,
    /// Whether an overlap with the existing transcript was found, as
    /// opposed to a plain append.
    pub overlapped: bool,
}

/// Accumulates a transcript by merging fragments as they arrive.
#[derive(Debug, Default)]
pub struct TranscriptAccumulator {
    config: MergeConfig,
    transcript: String,
}

impl TranscriptAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MergeConfig) -> Self {
        Self {
            config,
            transcript: String::new(),
        }
    }

    /// Merge a newly arrived fragment into the running transcript.
    pub fn push(&mut self, fragment: &str) -> PushResult {
        let merged = self.config.merge(&self.transcript, fragment);

        // Pure append grows the transcript by exactly the fragment; an
        // overlap rewrites some of the tail instead.
        let base_tokens = tokenize(&self.transcript, &self.config.separators).len();
        let fragment_tokens = tokenize(fragment, &self.config.separators).len();
        let merged_tokens = tokenize(&merged, &self.config.separators).len();
        let overlapped =
            fragment_tokens > 0 && base_tokens > 0 && merged_tokens < base_tokens + fragment_tokens;

        let delta = if merged.len() > self.transcript.len() && merged.starts_with(&self.transcript)
        {
            merged[self.transcript.len()..].trim_start().to_string()
        } else {
            String::new()
        };

        self.transcript = merged;

        PushResult {
            transcript: self.transcript.clone(),
            delta,
            overlapped,
        }
    }

    /// The transcript accumulated so far.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn reset(&mut self) {
        self.transcript.clear();
    }
}
