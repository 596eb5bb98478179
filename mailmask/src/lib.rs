// mailmask/src/lib.rs
//! # MailMask Service
//!
//! This crate provides the HTTP front end for the MailMask engine: a single
//! `POST /classify_email` endpoint that masks PII/PCI spans in an email body
//! and classifies the masked text. All masking logic lives in
//! `mailmask-core`; this crate only wires configuration, state, and routes.

pub mod cli;
pub mod detectors;
pub mod logger;
pub mod routes;
pub mod server;

pub use server::{build_router, AppState};
