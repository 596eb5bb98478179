// mailmask-core/src/classifier.rs
//! Categorical classification of masked text.
//!
//! The masking engine never classifies; callers feed its masked output into
//! a [`Classifier`]. A statistical model is just another implementation of
//! the trait, constructed at startup and injected alongside the rule-based
//! fallback below, never held as process-global state.

/// A categorical text classifier. Must be pure and total: any valid string
/// input maps to some label, and classification never fails.
pub trait Classifier: Send + Sync {
    fn classify(&self, text: &str) -> String;
}

/// Keyword-containment fallback classifier.
///
/// First table entry whose keyword appears in the lowercased text wins;
/// anything else is "General".
#[derive(Debug, Default, Clone)]
pub struct RuleBasedClassifier;

const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    ("Purchase", &["refund", "buy", "order"]),
    ("Support", &["issue", "error", "help"]),
    ("Feedback", &["feedback", "suggestion"]),
];

impl Classifier for RuleBasedClassifier {
    fn classify(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        for (category, keywords) in CATEGORY_KEYWORDS {
            if keywords.iter().any(|k| lowered.contains(k)) {
                return (*category).to_string();
            }
        }
        "General".to_string()
    }
}
