// mailmask-core/src/masker.rs
//! The span resolver and masker: turns raw, possibly overlapping pattern
//! matches into a deduplicated, non-overlapping entity list and a masked
//! rendition of the input text.
//!
//! The resolution algorithm is deterministic end to end:
//!
//! 1. collect every raw candidate from the registry (registry order, then
//!    left to right within each rule);
//! 2. stable-sort candidates by span length, longest first, because a longer
//!    match is assumed semantically more specific: a full date beats a
//!    2-digit expiry fragment it contains;
//! 3. greedily accept candidates whose bytes are all unclaimed, claiming the
//!    accepted span per byte; partially overlapping candidates are discarded
//!    whole, never truncated;
//! 4. merge detections from the optional external detector under the same
//!    claimed-byte rule and the same running set, so pattern matches always
//!    outrank detector matches on conflict;
//! 5. sort the accepted set ascending by start;
//! 6. render, replacing each accepted span with its `[classification]` tag
//!    and copying all other text through byte-for-byte.
//!
//! License: MIT OR APACHE 2.0

use std::sync::Arc;

use log::warn;

use crate::detector::{DetectorPolicy, NameDetector};
use crate::entity::{log_discarded_match_debug, log_entity_match_debug, EntityMatch};
use crate::errors::MaskError;
use crate::registry::PatternRegistry;

/// The result of one masking call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskOutcome {
    /// The input with every accepted span replaced by its tag.
    pub masked_text: String,
    /// Accepted entities, pairwise non-overlapping, ascending by `start`.
    pub entities: Vec<EntityMatch>,
}

/// The span-detection-and-masking engine.
///
/// Explicitly constructed once at startup and shared immutably; holds the
/// compiled registry and, optionally, an external detector with its failure
/// policy. A single engine is safe to call concurrently from many tasks.
pub struct MaskingEngine {
    registry: Arc<PatternRegistry>,
    detector: Option<Arc<dyn NameDetector>>,
    policy: DetectorPolicy,
}

impl MaskingEngine {
    pub fn new(registry: Arc<PatternRegistry>) -> Self {
        Self {
            registry,
            detector: None,
            policy: DetectorPolicy::default(),
        }
    }

    /// Attaches an external detector and the policy applied if it fails.
    pub fn with_detector(mut self, detector: Arc<dyn NameDetector>, policy: DetectorPolicy) -> Self {
        self.detector = Some(detector);
        self.policy = policy;
        self
    }

    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    /// Resolves all entity matches in `text` and renders the masked text.
    ///
    /// An empty input yields an empty masked text and no entities. There is
    /// no other failure mode for well-formed input: the only error path is a
    /// configured detector failing under [`DetectorPolicy::FailClosed`], and
    /// in that case no partial output is produced.
    pub fn resolve_and_mask(&self, text: &str) -> Result<MaskOutcome, MaskError> {
        let mut candidates = self.registry.match_all(text);

        // Stable: equal lengths keep collection order, i.e. registry order
        // then left-to-right position.
        candidates.sort_by(|a, b| (b.end - b.start).cmp(&(a.end - a.start)));

        let mut claimed = vec![false; text.len()];
        let mut accepted: Vec<EntityMatch> = Vec::new();

        for m in candidates {
            if claimed[m.start..m.end].iter().any(|&c| c) {
                log_discarded_match_debug(module_path!(), &m.classification, &m.text);
                continue;
            }
            claimed[m.start..m.end].fill(true);
            log_entity_match_debug(module_path!(), &m.classification, &m.text);
            accepted.push(EntityMatch {
                classification: m.classification,
                start: m.start,
                end: m.end,
                text: m.text,
            });
        }

        if let Some(detector) = &self.detector {
            match detector.detect(text) {
                Ok(detections) => {
                    for d in detections {
                        if d.start >= d.end
                            || d.end > text.len()
                            || !text.is_char_boundary(d.start)
                            || !text.is_char_boundary(d.end)
                        {
                            warn!(
                                "Ignoring detector span [{}, {}) outside text bounds or off a char boundary",
                                d.start, d.end
                            );
                            continue;
                        }
                        if claimed[d.start..d.end].iter().any(|&c| c) {
                            log_discarded_match_debug(module_path!(), &d.label, &text[d.start..d.end]);
                            continue;
                        }
                        claimed[d.start..d.end].fill(true);
                        log_entity_match_debug(module_path!(), &d.label, &text[d.start..d.end]);
                        accepted.push(EntityMatch {
                            classification: d.label,
                            start: d.start,
                            end: d.end,
                            text: text[d.start..d.end].to_string(),
                        });
                    }
                }
                Err(e) => match self.policy {
                    DetectorPolicy::FailClosed => {
                        return Err(MaskError::DetectorError(e.to_string()));
                    }
                    DetectorPolicy::FailOpen => {
                        warn!("Name detector failed, continuing with pattern matches only: {e}");
                    }
                },
            }
        }

        accepted.sort_by_key(|m| m.start);

        let mut masked_text = String::with_capacity(text.len());
        let mut last_end = 0usize;
        for m in &accepted {
            masked_text.push_str(&text[last_end..m.start]);
            masked_text.push('[');
            masked_text.push_str(&m.classification);
            masked_text.push(']');
            last_end = m.end;
        }
        masked_text.push_str(&text[last_end..]);

        Ok(MaskOutcome {
            masked_text,
            entities: accepted,
        })
    }
}
