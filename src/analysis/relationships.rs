//! Pending→booked transition and duplicate detection
//!
//! Read-only analysis over a snapshot corpus. Sightings of a transaction
//! are grouped per account by identity key; a key sighted pending in an
//! early snapshot and booked in a later one is reported as a state
//! transition, and a key sighted repeatedly within a state group is
//! reported as a duplicate.
//!
//! The transition rule (earliest pending timestamp ≤ earliest booked
//! timestamp) is a heuristic over re-fetched snapshots, not a guaranteed
//! causal link: with many-to-many sightings it can pair records that merely
//! share identifying content.

use crate::anonymization::key::derive_key;
use crate::domain::{AccountId, Envelope, TransactionKey};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Sighting timestamps per identity key within one state group
type SightingMap = BTreeMap<TransactionKey, Vec<DateTime<Utc>>>;

/// One observed pending→booked state transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingToBooked {
    /// Account the transition was observed for
    pub account_id: AccountId,

    /// Identity key shared by the pending and booked sightings
    pub transaction_key: TransactionKey,

    /// Capture timestamp of the earliest pending sighting
    pub pending_first_seen: DateTime<Utc>,

    /// Capture timestamp of the earliest booked sighting
    pub booked_first_seen: DateTime<Utc>,

    /// Number of pending sightings of the key
    pub pending_count: usize,

    /// Number of booked sightings of the key
    pub booked_count: usize,
}

/// One identity key sighted more than once within an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateSightings {
    /// Account the duplicates were observed for
    pub account_id: AccountId,

    /// Identity key sighted repeatedly
    pub transaction_key: TransactionKey,

    /// Total number of sightings
    pub occurrence_count: usize,

    /// Capture timestamps of every sighting, in ascending order
    pub timestamps: Vec<DateTime<Utc>>,
}

/// Relationship report over a whole corpus
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationshipReport {
    /// Observed pending→booked transitions
    pub pending_to_booked: Vec<PendingToBooked>,

    /// Keys sighted more than once
    pub duplicates: Vec<DuplicateSightings>,
}

/// Read-only relationship analyzer
///
/// Stateless: each call groups sightings afresh. Accounts are independent,
/// so corpus-level analysis can be split across accounts without shared
/// mutable state.
#[derive(Debug, Default)]
pub struct RelationshipAnalyzer;

impl RelationshipAnalyzer {
    /// Create a new analyzer
    pub fn new() -> Self {
        Self
    }

    /// Analyze a corpus and report transitions and duplicates
    ///
    /// Envelopes are grouped per account and processed in ascending capture
    /// timestamp order (stable sort, so equal timestamps keep corpus
    /// order). Accounts and keys are iterated in sorted order, making the
    /// report deterministic for a given corpus. Envelopes with a blank
    /// account identifier and records that are not JSON objects are skipped
    /// with a warning; analysis never mutates the corpus.
    pub fn analyze(&self, corpus: &[Envelope]) -> RelationshipReport {
        let mut by_account: BTreeMap<AccountId, Vec<&Envelope>> = BTreeMap::new();
        for envelope in corpus {
            match envelope.metadata.account() {
                Ok(account) => by_account.entry(account).or_default().push(envelope),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping envelope with invalid account identifier");
                }
            }
        }

        let mut report = RelationshipReport::default();

        for (account, mut envelopes) in by_account {
            envelopes.sort_by_key(|envelope| envelope.metadata.created_at);

            let mut pending = SightingMap::new();
            let mut booked = SightingMap::new();
            for envelope in &envelopes {
                collect_sightings(
                    &envelope.payload.pending,
                    envelope.metadata.created_at,
                    &mut pending,
                );
                collect_sightings(
                    &envelope.payload.booked,
                    envelope.metadata.created_at,
                    &mut booked,
                );
            }

            for (key, pending_times) in &pending {
                let Some(booked_times) = booked.get(key) else {
                    continue;
                };
                let Some(&pending_first) = pending_times.iter().min() else {
                    continue;
                };
                let Some(&booked_first) = booked_times.iter().min() else {
                    continue;
                };

                if pending_first <= booked_first {
                    report.pending_to_booked.push(PendingToBooked {
                        account_id: account.clone(),
                        transaction_key: key.clone(),
                        pending_first_seen: pending_first,
                        booked_first_seen: booked_first,
                        pending_count: pending_times.len(),
                        booked_count: booked_times.len(),
                    });
                }
            }

            // Booked sightings shadow pending ones with the same key, so a
            // transitioned transaction is not double-reported as its own
            // duplicate unless one state group repeats.
            let mut merged = pending;
            merged.extend(booked);
            for (key, timestamps) in merged {
                if timestamps.len() > 1 {
                    report.duplicates.push(DuplicateSightings {
                        account_id: account.clone(),
                        transaction_key: key,
                        occurrence_count: timestamps.len(),
                        timestamps,
                    });
                }
            }
        }

        report
    }
}

/// Derive keys for one state list and record the capture timestamp
fn collect_sightings(records: &[Value], captured_at: DateTime<Utc>, sightings: &mut SightingMap) {
    for record in records {
        let Some(object) = record.as_object() else {
            tracing::warn!("Skipping transaction record that is not a JSON object");
            continue;
        };
        sightings
            .entry(derive_key(object))
            .or_default()
            .push(captured_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(account: &str, created_at: &str, pending: Value, booked: Value) -> Envelope {
        Envelope::from_value(json!({
            "metadata": {"accountId": account, "createdAt": created_at},
            "payload": {"pending": pending, "booked": booked}
        }))
        .expect("test envelope deserializes")
    }

    fn tx(id: &str) -> Value {
        json!({"transactionId": id})
    }

    #[test]
    fn test_pending_to_booked_transition_detected() {
        let corpus = vec![
            envelope("A1", "2024-01-15T10:00:00Z", json!([tx("K")]), json!([])),
            envelope("A1", "2024-01-15T11:00:00Z", json!([]), json!([tx("K")])),
        ];

        let report = RelationshipAnalyzer::new().analyze(&corpus);

        assert_eq!(report.pending_to_booked.len(), 1);
        let transition = &report.pending_to_booked[0];
        assert_eq!(transition.account_id.as_str(), "A1");
        assert_eq!(transition.transaction_key.as_str(), "id:K");
        assert_eq!(
            transition.pending_first_seen,
            "2024-01-15T10:00:00Z".parse::<DateTime<Utc>>().unwrap()
        );
        assert_eq!(
            transition.booked_first_seen,
            "2024-01-15T11:00:00Z".parse::<DateTime<Utc>>().unwrap()
        );
        assert_eq!(transition.pending_count, 1);
        assert_eq!(transition.booked_count, 1);
    }

    #[test]
    fn test_no_transition_when_booked_first() {
        let corpus = vec![
            envelope("A1", "2024-01-15T08:00:00Z", json!([]), json!([tx("K3")])),
            envelope("A1", "2024-01-15T09:00:00Z", json!([tx("K3")]), json!([])),
        ];

        let report = RelationshipAnalyzer::new().analyze(&corpus);
        assert!(report.pending_to_booked.is_empty());
    }

    #[test]
    fn test_transition_counts_many_sightings() {
        let corpus = vec![
            envelope("A1", "2024-01-15T10:00:00Z", json!([tx("K")]), json!([])),
            envelope("A1", "2024-01-15T10:30:00Z", json!([tx("K")]), json!([])),
            envelope("A1", "2024-01-15T11:00:00Z", json!([]), json!([tx("K")])),
        ];

        let report = RelationshipAnalyzer::new().analyze(&corpus);
        assert_eq!(report.pending_to_booked.len(), 1);
        assert_eq!(report.pending_to_booked[0].pending_count, 2);
        assert_eq!(report.pending_to_booked[0].booked_count, 1);
    }

    #[test]
    fn test_duplicates_report_all_timestamps() {
        let corpus = vec![
            envelope("A2", "2024-01-15T09:00:00Z", json!([]), json!([tx("K2")])),
            envelope("A2", "2024-01-15T09:05:00Z", json!([]), json!([tx("K2")])),
            envelope("A2", "2024-01-15T09:05:00Z", json!([]), json!([tx("K2")])),
        ];

        let report = RelationshipAnalyzer::new().analyze(&corpus);

        assert_eq!(report.duplicates.len(), 1);
        let duplicate = &report.duplicates[0];
        assert_eq!(duplicate.account_id.as_str(), "A2");
        assert_eq!(duplicate.occurrence_count, 3);
        assert_eq!(duplicate.timestamps.len(), 3);
        assert!(duplicate
            .timestamps
            .windows(2)
            .all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_single_sighting_is_not_a_duplicate() {
        let corpus = vec![envelope(
            "A1",
            "2024-01-15T09:00:00Z",
            json!([]),
            json!([tx("K1")]),
        )];

        let report = RelationshipAnalyzer::new().analyze(&corpus);
        assert!(report.duplicates.is_empty());
    }

    #[test]
    fn test_booked_sightings_shadow_pending_in_duplicates() {
        // One pending and one booked sighting: a transition, but not a
        // duplicate, because the booked group takes precedence per key.
        let corpus = vec![
            envelope("A1", "2024-01-15T10:00:00Z", json!([tx("K")]), json!([])),
            envelope("A1", "2024-01-15T11:00:00Z", json!([]), json!([tx("K")])),
        ];

        let report = RelationshipAnalyzer::new().analyze(&corpus);
        assert_eq!(report.pending_to_booked.len(), 1);
        assert!(report.duplicates.is_empty());
    }

    #[test]
    fn test_accounts_are_independent() {
        let corpus = vec![
            envelope("A1", "2024-01-15T10:00:00Z", json!([tx("K")]), json!([])),
            envelope("A2", "2024-01-15T11:00:00Z", json!([]), json!([tx("K")])),
        ];

        let report = RelationshipAnalyzer::new().analyze(&corpus);
        assert!(report.pending_to_booked.is_empty());
        assert!(report.duplicates.is_empty());
    }

    #[test]
    fn test_report_account_ordering_is_deterministic() {
        let corpus = vec![
            envelope("B", "2024-01-15T09:00:00Z", json!([]), json!([tx("K"), tx("K")])),
            envelope("A", "2024-01-15T09:00:00Z", json!([]), json!([tx("K"), tx("K")])),
        ];

        let report = RelationshipAnalyzer::new().analyze(&corpus);
        let accounts: Vec<&str> = report
            .duplicates
            .iter()
            .map(|d| d.account_id.as_str())
            .collect();
        assert_eq!(accounts, vec!["A", "B"]);
    }
}
