//! Configuration management for `mailmask-core`.
//!
//! This module defines the core data structures for pattern rules and handles
//! serialization/deserialization of YAML configurations, along with utilities
//! for loading, merging, and validating them.
//!
//! Rule order is significant: when two candidate spans of equal length
//! compete for the same text, the rule that appears earlier in the list wins.
//! All loading and merging operations preserve list order.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::errors::MaskError;

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Represents a single pattern rule used by the masking engine.
///
/// The `name` doubles as the classification label emitted for every span the
/// rule matches, and as the literal tag (`[name]`) written into masked text.
/// Labels are an open set of strings; registering a new rule requires no code
/// changes elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PatternRule {
    /// Unique classification label for the rule (e.g., "credit_debit_no").
    pub name: String,
    /// Human-readable description of what the rule targets.
    pub description: Option<String>,
    /// The regex pattern string.
    pub pattern: String,
    /// If true, enables multiline mode for the regex engine.
    pub multiline: bool,
    /// If true, the rule is disabled unless explicitly enabled by the caller.
    pub opt_in: bool,
    /// If true, candidate spans are filtered through programmatic validation
    /// (e.g., Luhn checksum for card-shaped rules).
    pub programmatic_validation: bool,
    /// Explicit override for enabling/disabling the rule.
    pub enabled: Option<bool>,
}

impl Default for PatternRule {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            pattern: String::new(),
            multiline: false,
            opt_in: false,
            programmatic_validation: false,
            enabled: None,
        }
    }
}

/// Represents the top-level rule configuration for the masking engine.
///
/// `rules` is an ordered list; see the module docs for why order matters.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct PatternConfig {
    pub rules: Vec<PatternRule>,
}

impl PatternConfig {
    /// Loads pattern rules from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading custom rules from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: PatternConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        validate_rules(&config.rules)?;
        info!("Loaded {} rules from file {}.", config.rules.len(), path.display());

        Ok(config)
    }

    /// Loads the default pattern rules from the embedded configuration.
    pub fn load_default_rules() -> Result<Self> {
        debug!("Loading default rules from embedded string...");
        let default_yaml = include_str!("../config/default_patterns.yaml");
        let config: PatternConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default rules")?;

        validate_rules(&config.rules)?;
        debug!("Loaded {} default rules.", config.rules.len());
        Ok(config)
    }

    /// Filters active rules based on enable/disable lists provided by the caller.
    ///
    /// Opt-in rules stay disabled unless named in `enable_rules`.
    pub fn set_active_rules(&mut self, enable_rules: &[String], disable_rules: &[String]) {
        let enable_set: HashSet<&str> = enable_rules.iter().map(String::as_str).collect();
        let disable_set: HashSet<&str> = disable_rules.iter().map(String::as_str).collect();

        debug!("Initial rules count before filtering: {}", self.rules.len());

        let all_rule_names: HashSet<&str> = self.rules.iter().map(|r| r.name.as_str()).collect();

        for rule_name in enable_set.difference(&all_rule_names) {
            warn!("Rule '{}' in `enable_rules` list does not exist.", rule_name);
        }

        for rule_name in disable_set.difference(&all_rule_names) {
            warn!("Rule '{}' in `disable_rules` list does not exist.", rule_name);
        }

        self.rules.retain(|rule| {
            let rule_name_str = rule.name.as_str();
            !disable_set.contains(rule_name_str) && (!rule.opt_in || enable_set.contains(rule_name_str))
        });

        debug!("Final active rules count after filtering: {}", self.rules.len());
    }
}

/// Merges user-defined rules with the defaults.
///
/// Default rule order is preserved; a user rule with a known name replaces
/// the default in place, and unknown user rules are appended in their own
/// order. This keeps conflict-resolution priority stable under overrides.
pub fn merge_rules(
    default_config: PatternConfig,
    user_config: Option<PatternConfig>,
) -> PatternConfig {
    debug!("merge_rules called. Initial default rules count: {}", default_config.rules.len());

    let Some(user_cfg) = user_config else {
        return default_config;
    };

    debug!("User config provided. Merging {} user rules.", user_cfg.rules.len());

    let mut overrides: HashMap<String, PatternRule> = user_cfg
        .rules
        .iter()
        .map(|rule| (rule.name.clone(), rule.clone()))
        .collect();

    let mut final_rules: Vec<PatternRule> = default_config
        .rules
        .into_iter()
        .map(|rule| overrides.remove(&rule.name).unwrap_or(rule))
        .collect();

    for rule in user_cfg.rules {
        if overrides.remove(&rule.name).is_some() {
            final_rules.push(rule);
        }
    }

    debug!("Final total rules after merge: {}", final_rules.len());
    PatternConfig { rules: final_rules }
}

/// Validates rule integrity (names, regex compilation).
///
/// A broken rule is fatal: silently dropping a detector would be worse than
/// refusing to start.
pub fn validate_rules(rules: &[PatternRule]) -> Result<(), MaskError> {
    let mut rule_names = HashSet::new();
    let mut errors = Vec::new();

    for rule in rules {
        if rule.name.is_empty() {
            errors.push("A rule has an empty `name` field.".to_string());
        } else if !rule_names.insert(rule.name.clone()) {
            errors.push(format!("Duplicate rule name found: '{}'.", rule.name));
        }

        if rule.pattern.is_empty() {
            errors.push(format!("Rule '{}' has an empty `pattern` field.", rule.name));
            continue;
        }

        if rule.pattern.len() > MAX_PATTERN_LENGTH {
            errors.push(format!(
                "Rule '{}': pattern length ({}) exceeds maximum allowed ({}).",
                rule.name,
                rule.pattern.len(),
                MAX_PATTERN_LENGTH
            ));
            continue;
        }

        if let Err(e) = Regex::new(&rule.pattern) {
            errors.push(format!("Rule '{}' has an invalid regex pattern: {}", rule.name, e));
        }
    }

    if !errors.is_empty() {
        Err(MaskError::InvalidRules(errors.join("\n")))
    } else {
        Ok(())
    }
}
