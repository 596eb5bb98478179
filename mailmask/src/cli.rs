// mailmask/src/cli.rs
//! This file defines the command-line interface (CLI) for the mailmask
//! service, including all available arguments.

use clap::{Parser, ValueEnum};
use mailmask_core::DetectorPolicy;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "mailmask",
    version = env!("CARGO_PKG_VERSION"),
    about = "Mask PII/PCI in email bodies and classify the masked text",
    long_about = "Mailmask is an HTTP service that detects and masks sensitive spans \
                  (emails, phone numbers, card numbers, dates of birth, names, ...) in \
                  free-form email bodies according to a configurable rule set, then \
                  classifies the masked text into a support category."
)]
pub struct Cli {
    /// Address to bind the HTTP server to.
    #[arg(long, short = 'b', env = "MAILMASK_BIND", default_value = "127.0.0.1:8080")]
    pub bind: String,

    /// Path to a custom YAML rules file, merged over the defaults.
    #[arg(long, short = 'r', value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Opt-in rules to enable, by name.
    #[arg(long, value_delimiter = ',', value_name = "NAMES")]
    pub enable_rules: Vec<String>,

    /// Rules to disable, by name.
    #[arg(long, value_delimiter = ',', value_name = "NAMES")]
    pub disable_rules: Vec<String>,

    /// Behavior when the name detector fails mid-request.
    #[arg(long, value_enum, default_value = "fail-closed")]
    pub detector_policy: DetectorPolicyArg,

    /// Run without a name detector; only pattern rules are applied.
    #[arg(long)]
    pub no_name_detector: bool,

    /// Suppress all informational and debug messages.
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long, short = 'd')]
    pub debug: bool,
}

/// CLI-facing mirror of [`DetectorPolicy`].
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DetectorPolicyArg {
    /// A detector failure fails the whole request.
    FailClosed,
    /// A detector failure is logged; pattern matches are still returned.
    FailOpen,
}

impl From<DetectorPolicyArg> for DetectorPolicy {
    fn from(arg: DetectorPolicyArg) -> Self {
        match arg {
            DetectorPolicyArg::FailClosed => DetectorPolicy::FailClosed,
            DetectorPolicyArg::FailOpen => DetectorPolicy::FailOpen,
        }
    }
}
