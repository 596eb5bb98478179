// mailmask/src/detectors.rs
//! A lightweight, heuristic name detector.
//!
//! Stands in for a full NER model behind the core's `NameDetector` trait:
//! it scans for runs of capitalized words (with an optional honorific) and
//! trims leading words that are common sentence starters rather than names.
//! Deterministic and dependency-free, so it is safe as the default detector;
//! a model-backed implementation can replace it without touching the core.

use anyhow::Result;
use mailmask_core::{Detection, NameDetector};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static NAME_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:(?:Mr|Mrs|Ms|Dr)\.\s+)?[A-Z][a-z]+(?:\s+[A-Z][a-z]+)+")
        .expect("name run pattern is valid")
});

static WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z][a-z]+").expect("word pattern is valid"));

/// Capitalized words that usually start a sentence or greeting, not a name.
static NON_NAME_STARTERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "Contact", "Dear", "Hello", "Hi", "Please", "Regards", "Sincerely", "Thanks",
        "Thank", "Best", "The", "This", "That", "Our", "Your", "My", "From", "Subject",
    ])
});

const HONORIFICS: &[&str] = &["Mr.", "Mrs.", "Ms.", "Dr."];

/// Heuristic person-name detector over capitalized word runs.
#[derive(Debug, Default, Clone)]
pub struct HeuristicNameDetector;

impl HeuristicNameDetector {
    pub fn new() -> Self {
        Self
    }
}

impl NameDetector for HeuristicNameDetector {
    fn detect(&self, text: &str) -> Result<Vec<Detection>> {
        let mut detections = Vec::new();

        for run in NAME_RUN.find_iter(text) {
            let run_str = run.as_str();

            // An honorific marks the whole run as a name.
            if HONORIFICS.iter().any(|h| run_str.starts_with(h)) {
                detections.push(Detection {
                    label: "full_name".to_string(),
                    start: run.start(),
                    end: run.end(),
                });
                continue;
            }

            // Otherwise trim leading sentence-starter words; at least two
            // capitalized words must remain to call it a name.
            let words: Vec<_> = WORD.find_iter(run_str).collect();
            let kept = words
                .iter()
                .position(|w| !NON_NAME_STARTERS.contains(w.as_str()));
            let Some(first_kept) = kept else { continue };
            if words.len() - first_kept < 2 {
                continue;
            }

            detections.push(Detection {
                label: "full_name".to_string(),
                start: run.start() + words[first_kept].start(),
                end: run.end(),
            });
        }

        Ok(detections)
    }
}
