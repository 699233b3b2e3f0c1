//! Anonymization orchestrator
//!
//! This module provides the [`AnonymizationEngine`] that composes the
//! [`PseudonymMapper`] over whole envelopes and corpora.
//!
//! # Architecture
//!
//! The engine coordinates two concerns:
//! - **Substitution**: every sensitive field of every record is rewritten
//!   through one mapper, so pseudonyms stay consistent across the corpus
//! - **Relationship survival**: the mapper records the before→after identity
//!   key correspondence, so a relationship analysis over the anonymized
//!   corpus can be cross-checked against the original
//!
//! # Examples
//!
//! ```
//! use ledgermask::anonymization::{AnonymizationEngine, config::AnonymizationConfig};
//! use ledgermask::domain::Envelope;
//! use serde_json::json;
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut engine = AnonymizationEngine::new(AnonymizationConfig::default())?;
//!
//! let envelope = Envelope::from_value(json!({
//!     "metadata": {"accountId": "acc-1", "createdAt": "2024-01-15T10:00:00Z"},
//!     "payload": {"pending": [], "booked": [{"transactionId": "T1"}]}
//! }))?;
//!
//! let (anonymized, report) = engine.anonymize_corpus(&[envelope]);
//! assert_eq!(report.envelopes_anonymized, 1);
//! assert_eq!(anonymized[0].payload.booked.len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use crate::anonymization::config::AnonymizationConfig;
use crate::anonymization::mapper::PseudonymMapper;
use crate::anonymization::report::AnonymizationReport;
use crate::domain::{Envelope, EnvelopeMetadata, TransactionKey, TransactionPayload};
use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

/// Anonymization orchestrator owning one mapper for the run
///
/// The engine is a single-threaded, synchronous computation over an
/// in-memory corpus; callers wanting envelope-level parallelism must give
/// each worker its own engine and merge caches first-seen-wins afterwards.
pub struct AnonymizationEngine {
    config: AnonymizationConfig,
    mapper: PseudonymMapper,
}

impl AnonymizationEngine {
    /// Create a new engine
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the mapper's
    /// patterns fail to compile.
    pub fn new(config: AnonymizationConfig) -> Result<Self> {
        config
            .validate()
            .context("Invalid anonymization configuration")?;
        let mapper = PseudonymMapper::new(&config)?;

        Ok(Self { config, mapper })
    }

    /// The configuration this engine runs with
    pub fn config(&self) -> &AnonymizationConfig {
        &self.config
    }

    /// Anonymize a single envelope
    ///
    /// Substitutes the account identifier once in the header, regenerates
    /// volatile correlation identifiers as fresh random values, and rewrites
    /// every pending and booked record, preserving list order and the
    /// pending/booked partition.
    ///
    /// # Errors
    ///
    /// Fails loudly for structurally invalid input: a blank account
    /// identifier, or a transaction record that is not a JSON object.
    pub fn anonymize_envelope(&mut self, envelope: &Envelope) -> Result<Envelope> {
        let account = envelope.metadata.account()?;
        let account_id = self.mapper.fake_account_id(account.as_str());

        let metadata = EnvelopeMetadata {
            account_id,
            created_at: envelope.metadata.created_at,
            requisition_id: envelope
                .metadata
                .requisition_id
                .as_ref()
                .map(|_| Uuid::new_v4().to_string()),
            trace_id: envelope
                .metadata
                .trace_id
                .as_ref()
                .map(|_| Uuid::new_v4().to_string()),
            extra: envelope.metadata.extra.clone(),
        };

        let pending = self.anonymize_records(&envelope.payload.pending)?;
        let booked = self.anonymize_records(&envelope.payload.booked)?;

        Ok(Envelope {
            metadata,
            payload: TransactionPayload {
                pending,
                booked,
                extra: envelope.payload.extra.clone(),
            },
        })
    }

    /// Anonymize a whole corpus, skipping structurally invalid envelopes
    ///
    /// A failing envelope never aborts the run: it is logged, skipped, and
    /// surfaced as a warning in the report.
    pub fn anonymize_corpus(&mut self, corpus: &[Envelope]) -> (Vec<Envelope>, AnonymizationReport) {
        let mut report = AnonymizationReport::new();
        let mut anonymized = Vec::with_capacity(corpus.len());

        for envelope in corpus {
            match self.anonymize_envelope(envelope) {
                Ok(masked) => {
                    report.add_envelope(&masked);
                    anonymized.push(masked);
                }
                Err(e) => {
                    tracing::error!(
                        account_id = %envelope.metadata.account_id,
                        error = %e,
                        "Failed to anonymize envelope"
                    );
                    report.add_skip(format!(
                        "Skipped envelope for account '{}': {e}",
                        envelope.metadata.account_id
                    ));
                }
            }
        }

        report.set_mapping_stats(self.mapper.stats());
        tracing::info!(
            envelopes = report.envelopes_anonymized,
            skipped = report.envelopes_skipped,
            pending = report.pending_transactions,
            booked = report.booked_transactions,
            "Anonymization run complete"
        );

        (anonymized, report)
    }

    /// The before→after identity key correspondence recorded so far
    pub fn key_correspondence(&self) -> &HashMap<TransactionKey, TransactionKey> {
        self.mapper.key_correspondence()
    }

    fn anonymize_records(&mut self, records: &[Value]) -> Result<Vec<Value>> {
        records
            .iter()
            .map(|record| self.mapper.anonymize_transaction(record))
            .collect()
    }
}
