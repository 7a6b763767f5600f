#![deny(missing_docs)]

//! Core library for the `jobphrase` noun-phrase frequency report.

/// Environment-driven configuration management.
pub mod config;
/// Loading scraped job records and assembling the text corpus.
pub mod corpus;
/// Structured logging and tracing setup.
pub mod logging;
/// Per-run counters.
pub mod metrics;
/// Noun-phrase extraction.
pub mod phrases;
/// End-to-end analysis pass.
pub mod pipeline;
/// Phrase frequency tallies and rendering.
pub mod report;
