//! Corpus structure summary
//!
//! A read-only scan that profiles a snapshot corpus before or after
//! anonymization: volume per lifecycle state, capture time range, currency
//! and transaction-code sets, amount bounds, and the identifier prefix
//! shapes in use. Distinct counterparty names are counted, not listed, so
//! the summary itself never echoes sensitive values.

use crate::domain::Envelope;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// Number of leading identifier characters kept as a shape sample
const IDENTIFIER_PREFIX_LEN: usize = 10;

/// Aggregate profile of a snapshot corpus
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorpusSummary {
    /// Envelopes scanned
    pub total_envelopes: usize,

    /// Pending records across all envelopes
    pub total_pending: usize,

    /// Booked records across all envelopes
    pub total_booked: usize,

    /// Distinct account identifiers
    pub account_count: usize,

    /// Earliest capture timestamp in the corpus
    pub earliest_capture: Option<DateTime<Utc>>,

    /// Latest capture timestamp in the corpus
    pub latest_capture: Option<DateTime<Utc>>,

    /// Currency codes observed in transaction amounts
    pub currencies: BTreeSet<String>,

    /// Smallest parsable amount observed
    pub amount_min: Option<f64>,

    /// Largest parsable amount observed
    pub amount_max: Option<f64>,

    /// Proprietary bank transaction codes observed
    pub transaction_codes: BTreeSet<String>,

    /// Distinct counterparty names observed (count only)
    pub distinct_creditors: usize,

    /// Leading characters of observed transaction identifiers
    pub identifier_prefixes: BTreeSet<String>,
}

impl CorpusSummary {
    /// Profile a corpus
    pub fn from_envelopes(corpus: &[Envelope]) -> Self {
        let mut summary = Self::default();
        let mut accounts = BTreeSet::new();
        let mut creditors = BTreeSet::new();

        for envelope in corpus {
            summary.total_envelopes += 1;
            accounts.insert(envelope.metadata.account_id.clone());

            let captured_at = envelope.metadata.created_at;
            summary.earliest_capture = Some(match summary.earliest_capture {
                Some(earliest) => earliest.min(captured_at),
                None => captured_at,
            });
            summary.latest_capture = Some(match summary.latest_capture {
                Some(latest) => latest.max(captured_at),
                None => captured_at,
            });

            summary.total_pending += envelope.payload.pending.len();
            summary.total_booked += envelope.payload.booked.len();

            for record in envelope
                .payload
                .pending
                .iter()
                .chain(envelope.payload.booked.iter())
            {
                summary.scan_record(record, &mut creditors);
            }
        }

        summary.account_count = accounts.len();
        summary.distinct_creditors = creditors.len();
        summary
    }

    fn scan_record(&mut self, record: &Value, creditors: &mut BTreeSet<String>) {
        let Some(object) = record.as_object() else {
            return;
        };

        if let Some(Value::String(code)) = object.get("proprietaryBankTransactionCode") {
            self.transaction_codes.insert(code.clone());
        }

        if let Some(Value::String(name)) = object.get("creditorName") {
            creditors.insert(name.clone());
        }

        if let Some(amount) = object.get("transactionAmount") {
            if let Some(Value::String(currency)) = amount.get("currency") {
                self.currencies.insert(currency.clone());
            }
            if let Some(Value::String(text)) = amount.get("amount") {
                if let Ok(value) = text.parse::<f64>() {
                    self.amount_min = Some(match self.amount_min {
                        Some(min) => min.min(value),
                        None => value,
                    });
                    self.amount_max = Some(match self.amount_max {
                        Some(max) => max.max(value),
                        None => value,
                    });
                }
            }
        }

        if let Some(Value::String(id)) = object.get("transactionId") {
            let prefix: String = id.chars().take(IDENTIFIER_PREFIX_LEN).collect();
            self.identifier_prefixes.insert(prefix);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn corpus() -> Vec<Envelope> {
        let first = Envelope::from_value(json!({
            "metadata": {"accountId": "acc-1", "createdAt": "2024-01-15T10:00:00Z"},
            "payload": {
                "pending": [{
                    "transactionId": "T2024011501",
                    "transactionAmount": {"amount": "-23.45", "currency": "GBP"},
                    "creditorName": "TESCO",
                    "proprietaryBankTransactionCode": "CARD_PAYMENT"
                }],
                "booked": [{
                    "transactionId": "tx_abc",
                    "transactionAmount": {"amount": "1500.00", "currency": "EUR"},
                    "creditorName": "AMAZON"
                }]
            }
        }))
        .unwrap();

        let second = Envelope::from_value(json!({
            "metadata": {"accountId": "acc-2", "createdAt": "2024-01-14T10:00:00Z"},
            "payload": {
                "booked": [{
                    "transactionId": "T2024011400",
                    "transactionAmount": {"amount": "not-a-number", "currency": "GBP"},
                    "creditorName": "TESCO"
                }]
            }
        }))
        .unwrap();

        vec![first, second]
    }

    #[test]
    fn test_summary_counts() {
        let summary = CorpusSummary::from_envelopes(&corpus());

        assert_eq!(summary.total_envelopes, 2);
        assert_eq!(summary.total_pending, 1);
        assert_eq!(summary.total_booked, 2);
        assert_eq!(summary.account_count, 2);
        assert_eq!(summary.distinct_creditors, 2);
    }

    #[test]
    fn test_summary_capture_range() {
        let summary = CorpusSummary::from_envelopes(&corpus());
        assert_eq!(
            summary.earliest_capture,
            Some("2024-01-14T10:00:00Z".parse().unwrap())
        );
        assert_eq!(
            summary.latest_capture,
            Some("2024-01-15T10:00:00Z".parse().unwrap())
        );
    }

    #[test]
    fn test_summary_amount_bounds_skip_unparsable() {
        let summary = CorpusSummary::from_envelopes(&corpus());
        assert_eq!(summary.amount_min, Some(-23.45));
        assert_eq!(summary.amount_max, Some(1500.00));
    }

    #[test]
    fn test_summary_sets() {
        let summary = CorpusSummary::from_envelopes(&corpus());
        assert!(summary.currencies.contains("GBP"));
        assert!(summary.currencies.contains("EUR"));
        assert!(summary.transaction_codes.contains("CARD_PAYMENT"));
        assert!(summary.identifier_prefixes.contains("T202401150"));
        assert!(summary.identifier_prefixes.contains("tx_abc"));
    }

    #[test]
    fn test_summary_empty_corpus() {
        let summary = CorpusSummary::from_envelopes(&[]);
        assert_eq!(summary.total_envelopes, 0);
        assert!(summary.earliest_capture.is_none());
        assert!(summary.amount_min.is_none());
    }
}
