// mailmask-core/src/entity.rs
//! Provides the core data structure for resolved entity matches and utility
//! functions for PII-safe logging within the `mailmask-core` library.

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// A static boolean that is initialized once to determine if PII is allowed in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("MAILMASK_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// A single resolved entity match inside a masked text.
///
/// `start..end` is a half-open byte range into the original text, and `text`
/// is always the exact substring `original[start..end]`. A resolved set of
/// matches is pairwise non-overlapping and sorted ascending by `start`.
///
/// Serializes with the service's wire shape:
/// `{"position": [start, end], "classification": "...", "entity": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EntityMatchWire", into = "EntityMatchWire")]
pub struct EntityMatch {
    pub classification: String,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl EntityMatch {
    /// Length of the matched span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The literal tag this match is replaced with in masked output.
    pub fn tag(&self) -> String {
        format!("[{}]", self.classification)
    }
}

/// Wire representation of an [`EntityMatch`].
#[derive(Serialize, Deserialize)]
struct EntityMatchWire {
    position: [usize; 2],
    classification: String,
    entity: String,
}

impl From<EntityMatchWire> for EntityMatch {
    fn from(wire: EntityMatchWire) -> Self {
        Self {
            classification: wire.classification,
            start: wire.position[0],
            end: wire.position[1],
            text: wire.entity,
        }
    }
}

impl From<EntityMatch> for EntityMatchWire {
    fn from(m: EntityMatch) -> Self {
        Self {
            position: [m.start, m.end],
            classification: m.classification,
            entity: m.text,
        }
    }
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub fn log_entity_match_debug(
    module_path: &str,
    classification: &str,
    original_sensitive_content: &str,
) {
    debug!(
        "{} Accepted match for classification '{}': '{}'",
        module_path,
        classification,
        get_loggable_content(original_sensitive_content)
    );
}

pub fn log_discarded_match_debug(
    module_path: &str,
    classification: &str,
    original_sensitive_content: &str,
) {
    debug!(
        "{} Discarded overlapping candidate '{}': '{}'",
        module_path,
        classification,
        get_loggable_content(original_sensitive_content)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_sensitive_short_string() {
        assert_eq!(redact_sensitive("abc"), "[REDACTED]".to_string());
    }

    #[test]
    fn test_redact_sensitive_long_string() {
        assert_eq!(redact_sensitive("123456789"), "[REDACTED: 9 chars]".to_string());
    }

    #[test]
    fn test_wire_shape_round_trip() {
        let m = EntityMatch {
            classification: "dob".to_string(),
            start: 4,
            end: 14,
            text: "12/08/1990".to_string(),
        };
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "position": [4, 14],
                "classification": "dob",
                "entity": "12/08/1990",
            })
        );
        let back: EntityMatch = serde_json::from_value(json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_tag_format() {
        let m = EntityMatch {
            classification: "email".to_string(),
            start: 0,
            end: 1,
            text: "x".to_string(),
        };
        assert_eq!(m.tag(), "[email]");
    }
}
