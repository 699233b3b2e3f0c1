// Ledgermask - Transaction Snapshot Anonymization Engine
// Copyright (c) 2025 Ledgermask Contributors
// Licensed under the MIT License

//! # Ledgermask
//!
//! Ledgermask anonymizes realistic banking-transaction snapshot corpora
//! while preserving their internal relational structure: which pending
//! transaction later became which booked transaction, and which records are
//! duplicates across overlapping snapshots.
//!
//! ## Overview
//!
//! Transactions in re-fetched account snapshots carry no persistent primary
//! key, so the crate builds a stable identity model first and keeps it valid
//! through substitution:
//!
//! - **Identity**: [`anonymization::key::derive_key`] fingerprints a record
//!   from its identifying content, independent of pending/booked state
//! - **Pseudonymization**: [`anonymization::PseudonymMapper`] substitutes
//!   sensitive values with deterministic, format-preserving fakes, cached
//!   for the lifetime of a run
//! - **Relationships**: [`analysis::RelationshipAnalyzer`] detects
//!   pending→booked transitions and duplicate sightings per account
//! - **Orchestration**: [`anonymization::AnonymizationEngine`] rewrites a
//!   whole corpus and records the before→after key correspondence
//!
//! ## Architecture
//!
//! - [`domain`] - Envelope models, identifier newtypes, error types
//! - [`anonymization`] - Key derivation, mapper, engine, configuration
//! - [`analysis`] - Relationship analyzer and corpus summary
//! - [`logging`] - Structured logging setup
//!
//! ## Quick Start
//!
//! ```rust
//! use ledgermask::analysis::RelationshipAnalyzer;
//! use ledgermask::anonymization::{AnonymizationEngine, config::AnonymizationConfig};
//! use ledgermask::domain::Envelope;
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let corpus = vec![Envelope::from_value(json!({
//!     "metadata": {"accountId": "acc-1", "createdAt": "2024-01-15T10:00:00Z"},
//!     "payload": {
//!         "pending": [{"transactionId": "T1", "creditorName": "REAL SHOP LTD"}],
//!         "booked": []
//!     }
//! }))?];
//!
//! // Detect relationships in the raw corpus.
//! let report = RelationshipAnalyzer::new().analyze(&corpus);
//!
//! // Rewrite the corpus with a fixed seed; same seed, same input,
//! // byte-identical output.
//! let mut engine = AnonymizationEngine::new(AnonymizationConfig::default())?;
//! let (anonymized, run_report) = engine.anonymize_corpus(&corpus);
//!
//! assert_eq!(run_report.envelopes_anonymized, 1);
//! assert_eq!(anonymized[0].payload.pending.len(), 1);
//! # let _ = report;
//! # Ok(())
//! # }
//! ```
//!
//! ## Determinism
//!
//! All substitutions derive from a seeded stable hash of the original value,
//! so a fixed seed makes whole runs reproducible across platforms. Volatile
//! correlation identifiers (`requisitionId`, `traceId`) are the one
//! exception: they are regenerated as fresh random values on every run.
//!
//! ## Error Handling
//!
//! Per-field malformation degrades gracefully (an unparsable amount passes
//! through unchanged; absent fields stay absent). Structural invalidity — a
//! record that is not a mapping, an envelope with a blank account
//! identifier — fails loudly, and corpus-level orchestration skips such
//! envelopes while surfacing every skip in the run report.

pub mod analysis;
pub mod anonymization;
pub mod domain;
pub mod logging;
