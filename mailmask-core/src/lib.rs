// mailmask-core/src/lib.rs
//! # MailMask Core Library
//!
//! `mailmask-core` provides the fundamental, platform-independent logic for
//! detecting and masking sensitive text spans (PII/PCI identifiers) in
//! free-form text. It defines the data structures for pattern rules, compiles
//! them into an immutable registry, and implements the deterministic span
//! resolver that turns overlapping raw matches into a non-overlapping entity
//! list and a masked rendition of the input.
//!
//! The library is designed to be pure and stateless: one call processes one
//! text and returns, with no I/O, no shared mutable state between calls, and
//! no concern for the HTTP service layered on top.
//!
//! ## Modules
//!
//! * `config`: Defines `PatternRule`s and `PatternConfig` for specifying sensitive patterns.
//! * `registry`: Compiles rules into an immutable `PatternRegistry` and runs the raw scan.
//! * `masker`: The span resolver and masker, the core `resolve_and_mask` operation.
//! * `entity`: The `EntityMatch` data model and PII-safe logging helpers.
//! * `detector`: The `NameDetector` seam for external free-text entity detectors.
//! * `classifier`: The `Classifier` trait and the rule-based categorical fallback.
//! * `validators`: Optional programmatic validation for specific data types.
//! * `errors`: The structured `MaskError` type.
//!
//! ## Usage Example
//!
//! ```rust
//! use std::sync::Arc;
//! use mailmask_core::{MaskingEngine, PatternConfig, PatternRegistry};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     // 1. Load the default pattern rules.
//!     let mut config = PatternConfig::load_default_rules()?;
//!     config.set_active_rules(&[], &[]);
//!
//!     // 2. Compile them into an immutable registry, shared via Arc.
//!     let registry = Arc::new(PatternRegistry::compile(&config)?);
//!
//!     // 3. Build the engine and mask some text.
//!     let engine = MaskingEngine::new(registry);
//!     let outcome = engine.resolve_and_mask("Reach me at jane.doe@example.com")?;
//!
//!     assert_eq!(outcome.masked_text, "Reach me at [email]");
//!     assert_eq!(outcome.entities.len(), 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Registry construction fails fast on any broken rule via [`MaskError`];
//! masking itself never fails for well-formed input unless a configured
//! external detector errors under the fail-closed policy.
//!
//! ## Concurrency
//!
//! A compiled registry and a constructed engine are immutable and safe to
//! share across threads. An external detector that cannot be invoked
//! concurrently must synchronize internally or be pooled by the caller.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod classifier;
pub mod config;
pub mod detector;
pub mod entity;
pub mod errors;
pub mod masker;
pub mod registry;
pub mod validators;

/// Re-exports the public configuration types and functions for managing pattern rules.
pub use config::{merge_rules, validate_rules, PatternConfig, PatternRule, MAX_PATTERN_LENGTH};

/// Re-exports the custom error type for clear error reporting.
pub use errors::MaskError;

/// Re-exports the compiled registry and its raw match type.
pub use registry::{CompiledPattern, PatternRegistry, RawMatch};

/// Re-exports the span resolver and masker.
pub use masker::{MaskOutcome, MaskingEngine};

/// Re-exports the resolved entity model and PII-safe logging helper.
pub use entity::{redact_sensitive, EntityMatch};

/// Re-exports the external detector seam.
pub use detector::{Detection, DetectorPolicy, NameDetector};

/// Re-exports categorical classification.
pub use classifier::{Classifier, RuleBasedClassifier};
