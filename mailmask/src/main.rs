// mailmask/src/main.rs
//! MailMask service entry point.
//!
//! Loads and validates the pattern rules, builds the masking engine and
//! classifier once, and serves the HTTP API over the injected state.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use mailmask_core::{
    merge_rules, MaskingEngine, PatternConfig, PatternRegistry, RuleBasedClassifier,
};

use mailmask::cli::Cli;
use mailmask::detectors::HeuristicNameDetector;
use mailmask::logger;
use mailmask::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    // 1. Load base rules, merge optional user overrides, filter active set.
    let default_config = PatternConfig::load_default_rules()?;
    let user_config = args
        .rules
        .as_ref()
        .map(PatternConfig::load_from_file)
        .transpose()
        .context("Failed to load custom rules file")?;
    let mut config = merge_rules(default_config, user_config);
    config.set_active_rules(&args.enable_rules, &args.disable_rules);

    // 2. Compile the registry; any broken rule refuses startup.
    let registry = Arc::new(PatternRegistry::compile(&config)?);
    info!("Compiled {} pattern rules", registry.patterns.len());

    // 3. Assemble the engine and classifier.
    let mut engine = MaskingEngine::new(registry);
    if !args.no_name_detector {
        engine = engine.with_detector(
            Arc::new(HeuristicNameDetector::new()),
            args.detector_policy.into(),
        );
    }

    let state = AppState {
        engine: Arc::new(engine),
        classifier: Arc::new(RuleBasedClassifier),
    };

    // 4. Serve.
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(&args.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", args.bind))?;
    info!("mailmask listening on {}", args.bind);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
