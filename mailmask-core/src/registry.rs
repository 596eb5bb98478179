// mailmask-core/src/registry.rs
//! Compiles `PatternConfig` rules into an immutable `PatternRegistry` and
//! performs the raw (possibly overlapping) scan over input text.
//!
//! Compilation is fail-fast: any rule that does not compile aborts registry
//! construction. A registry is read-only after construction and safe to share
//! across threads behind an `Arc`; overlap resolution happens downstream in
//! the masking engine, never here.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::config::{PatternConfig, MAX_PATTERN_LENGTH};
use crate::errors::MaskError;
use crate::validators;

/// Represents a single compiled pattern rule.
#[derive(Debug)]
pub struct CompiledPattern {
    /// The compiled regular expression used for matching.
    pub regex: Regex,
    /// The classification label emitted for every span this rule matches.
    pub name: String,
    /// A flag indicating if this rule requires additional programmatic validation.
    pub programmatic_validation: bool,
}

/// A raw candidate span produced by one rule's scan of the text.
///
/// Offsets are half-open byte ranges into the scanned text. Candidates from
/// different rules may overlap; candidates from a single rule never do
/// (standard leftmost, non-overlapping repeated scan).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch {
    pub classification: String,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// The ordered, immutable set of compiled pattern rules.
///
/// Iteration order is the configured rule order and doubles as the tie-break
/// priority when equal-length candidates compete downstream.
#[derive(Debug)]
pub struct PatternRegistry {
    pub patterns: Vec<CompiledPattern>,
}

impl PatternRegistry {
    /// Compiles every rule in `config` into a registry.
    ///
    /// Fails with an aggregated error if any rule is broken; a silently
    /// missing detector is a worse outcome than refusing to start.
    pub fn compile(config: &PatternConfig) -> Result<Self, MaskError> {
        debug!("Starting compilation of {} rules.", config.rules.len());

        let mut compiled = Vec::with_capacity(config.rules.len());
        let mut compilation_errors: Vec<MaskError> = Vec::new();

        for rule in &config.rules {
            if let Some(false) = rule.enabled {
                debug!("Skipping disabled rule '{}'.", &rule.name);
                continue;
            }

            if rule.pattern.len() > MAX_PATTERN_LENGTH {
                compilation_errors.push(MaskError::PatternLengthExceeded(
                    rule.name.clone(),
                    rule.pattern.len(),
                    MAX_PATTERN_LENGTH,
                ));
                continue;
            }

            let regex_result = RegexBuilder::new(&rule.pattern)
                .multi_line(rule.multiline)
                .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
                .build();

            match regex_result {
                Ok(regex) => {
                    debug!("Rule '{}' compiled successfully.", &rule.name);
                    compiled.push(CompiledPattern {
                        regex,
                        name: rule.name.clone(),
                        programmatic_validation: rule.programmatic_validation,
                    });
                }
                Err(e) => {
                    compilation_errors.push(MaskError::RuleCompilationError(rule.name.clone(), e));
                }
            }
        }

        if !compilation_errors.is_empty() {
            let error_message = compilation_errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<String>>()
                .join("\n");
            Err(MaskError::Fatal(format!(
                "Failed to compile {} rule(s):\n{}",
                compilation_errors.len(),
                error_message
            )))
        } else {
            debug!("Finished compiling rules. Total compiled: {}.", compiled.len());
            Ok(Self { patterns: compiled })
        }
    }

    /// Scans `text` with every rule and returns all raw candidate spans.
    ///
    /// Candidates are collected rule-by-rule in registry order, left to right
    /// within each rule; that insertion order is the stable tie-break the
    /// masking engine relies on. Zero-length matches are discarded so that
    /// zero-width patterns can never produce an invalid span.
    pub fn match_all(&self, text: &str) -> Vec<RawMatch> {
        let mut raw_matches = Vec::new();

        for pattern in &self.patterns {
            for m in pattern.regex.find_iter(text) {
                if m.start() == m.end() {
                    continue;
                }
                if pattern.programmatic_validation
                    && !validators::run_programmatic_validator(&pattern.name, m.as_str())
                {
                    continue;
                }
                raw_matches.push(RawMatch {
                    classification: pattern.name.clone(),
                    start: m.start(),
                    end: m.end(),
                    text: m.as_str().to_string(),
                });
            }
        }

        raw_matches
    }
}
