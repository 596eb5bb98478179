// mailmask-core/src/detector.rs
//! The seam for external free-text entity detectors (e.g. a person-name NER
//! model). The core never implements a model itself; it consumes detections
//! through the narrow [`NameDetector`] trait.
//!
//! Detector offsets must be half-open byte ranges into the exact text the
//! detector was handed, matching the registry's own indexing scheme.

use anyhow::Result;

/// A single detection reported by an external detector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// Classification label for the detected span (e.g. "full_name").
    pub label: String,
    pub start: usize,
    pub end: usize,
}

/// An external free-text entity detector.
///
/// Implementations must be pure with respect to the input text and safe for
/// concurrent read-only use; a detector backed by a model that cannot be
/// invoked concurrently must synchronize internally.
pub trait NameDetector: Send + Sync {
    fn detect(&self, text: &str) -> Result<Vec<Detection>>;
}

/// What the masking engine does when a configured detector returns an error.
///
/// The upstream system assumed its detector could never fail, so there is no
/// behavior to inherit; the policy is an explicit configuration choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectorPolicy {
    /// Surface the detector error; the whole masking call fails and no
    /// partial output is produced.
    #[default]
    FailClosed,
    /// Log a warning and return pattern matches only.
    FailOpen,
}
