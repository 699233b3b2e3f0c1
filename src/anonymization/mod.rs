//! Transaction anonymization engine
//!
//! Deterministic, format-preserving pseudonymization of banking transaction
//! snapshots. The pipeline consists of:
//! - **Identity**: canonical key derivation for transactions with no
//!   persistent primary key ([`key`])
//! - **Substitution**: stateful per-field caches with seeded hash-derived
//!   fakes ([`mapper`])
//! - **Orchestration**: whole-corpus rewriting with key-correspondence
//!   tracking and skip reporting ([`engine`])
//!
//! # Usage
//!
//! ```rust,ignore
//! use ledgermask::anonymization::{AnonymizationEngine, config::AnonymizationConfig};
//!
//! let mut engine = AnonymizationEngine::new(AnonymizationConfig::default())?;
//! let (anonymized, report) = engine.anonymize_corpus(&corpus);
//! ```

pub mod catalogue;
pub mod config;
pub mod engine;
pub mod hashing;
pub mod key;
pub mod mapper;
pub mod report;

// Re-export main types
pub use config::AnonymizationConfig;
pub use engine::AnonymizationEngine;
pub use key::derive_key;
pub use mapper::PseudonymMapper;
pub use report::{AnonymizationReport, MappingStats};
