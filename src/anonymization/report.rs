//! Anonymization run reporting
//!
//! Summarizes one corpus rewrite: how many envelopes were anonymized or
//! skipped, how many records were touched on each side of the
//! pending/booked partition, and how large the substitution caches grew.
//! Every skipped envelope is surfaced as a warning, never dropped silently.

use crate::domain::Envelope;
use serde::{Deserialize, Serialize};

/// Distinct-original counts per substitution cache
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingStats {
    /// Distinct account identifiers substituted
    pub accounts_anonymized: usize,

    /// Distinct counterparty names substituted
    pub creditors_anonymized: usize,

    /// Distinct free-text references substituted
    pub references_anonymized: usize,

    /// Distinct transaction identifiers substituted
    pub transaction_ids_anonymized: usize,

    /// Identity keys tracked in the before→after correspondence
    pub transaction_keys_tracked: usize,
}

/// Report for one anonymization run over a corpus
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnonymizationReport {
    /// Envelopes presented to the orchestrator
    pub envelopes_processed: usize,

    /// Envelopes rewritten successfully
    pub envelopes_anonymized: usize,

    /// Envelopes skipped as structurally invalid
    pub envelopes_skipped: usize,

    /// Pending records rewritten
    pub pending_transactions: usize,

    /// Booked records rewritten
    pub booked_transactions: usize,

    /// One entry per skipped envelope
    pub warnings: Vec<String>,

    /// Cache sizes at the end of the run
    pub mapping_stats: MappingStats,
}

impl AnonymizationReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successfully anonymized envelope
    pub fn add_envelope(&mut self, envelope: &Envelope) {
        self.envelopes_processed += 1;
        self.envelopes_anonymized += 1;
        self.pending_transactions += envelope.payload.pending.len();
        self.booked_transactions += envelope.payload.booked.len();
    }

    /// Record a skipped envelope with the reason it was skipped
    pub fn add_skip(&mut self, warning: String) {
        self.envelopes_processed += 1;
        self.envelopes_skipped += 1;
        self.warnings.push(warning);
    }

    /// Attach final cache statistics
    pub fn set_mapping_stats(&mut self, stats: MappingStats) {
        self.mapping_stats = stats;
    }
}
