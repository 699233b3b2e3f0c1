//! Canonical transaction identity key derivation
//!
//! Transactions in snapshot corpora carry no persistent primary key: the
//! same underlying transaction re-appears across overlapping snapshots, and
//! may move from the pending list to the booked list. [`derive_key`] gives a
//! record a reproducible identity from its identifying content alone, so the
//! relationship analyzer can match sightings and the mapper can track how
//! identity drifts under substitution.
//!
//! # Examples
//!
//! ```
//! use ledgermask::anonymization::key::derive_key;
//! use serde_json::json;
//!
//! let record = json!({
//!     "transactionId": "T2024011501",
//!     "transactionAmount": {"amount": "-23.45", "currency": "GBP"},
//!     "bookingDate": "2024-01-15",
//!     "creditorName": "TESCO STORES"
//! });
//! let key = derive_key(record.as_object().unwrap());
//! assert_eq!(
//!     key.as_str(),
//!     "id:T2024011501|amount:-23.45:GBP|date:2024-01-15|creditor:TESCO STORES"
//! );
//! ```

use crate::anonymization::hashing::content_digest;
use crate::domain::TransactionKey;
use serde_json::{Map, Value};

/// Separator between `name:value` tokens of a derived key
const TOKEN_SEPARATOR: &str = "|";

/// Derive the canonical identity key of a transaction record
///
/// Pure and total: inspects the identifying fields in priority order
/// (identifier, amount with currency, booking date, counterparty name) and
/// joins each present field as one `name:value` token. A record with no
/// identifying field at all falls back to a content hash over its
/// canonically sorted serialization, so key derivation is order-independent
/// for such records.
///
/// The key deliberately ignores structural state: a pending sighting and a
/// booked sighting of the same transaction derive the same key.
pub fn derive_key(record: &Map<String, Value>) -> TransactionKey {
    let mut tokens: Vec<String> = Vec::new();

    if let Some(id) = record.get("transactionId") {
        tokens.push(format!("id:{}", scalar_text(id)));
    }

    if let Some(amount) = record.get("transactionAmount") {
        let value = amount
            .get("amount")
            .map(scalar_text)
            .unwrap_or_default();
        let currency = amount
            .get("currency")
            .map(scalar_text)
            .unwrap_or_default();
        tokens.push(format!("amount:{value}:{currency}"));
    }

    if let Some(date) = record.get("bookingDate") {
        tokens.push(format!("date:{}", scalar_text(date)));
    }

    if let Some(creditor) = record.get("creditorName") {
        tokens.push(format!("creditor:{}", scalar_text(creditor)));
    }

    if tokens.is_empty() {
        let canonical =
            serde_json::to_string(&normalize_value(&Value::Object(record.clone())))
                .unwrap_or_default();
        return TransactionKey::new(format!("hash:{}", content_digest(&canonical)));
    }

    TransactionKey::new(tokens.join(TOKEN_SEPARATOR))
}

/// Render a scalar field value as key text
///
/// Strings contribute their raw content; any other value falls back to its
/// JSON rendering so numeric amounts still produce a usable token.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Normalize a JSON value so serialization is key-order independent
///
/// Recursively sorts all object keys; semantically identical records
/// produce the same fallback hash regardless of field ordering.
fn normalize_value(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut sorted: std::collections::BTreeMap<String, Value> =
                std::collections::BTreeMap::new();
            for (k, v) in map {
                sorted.insert(k.clone(), normalize_value(v));
            }
            Value::Object(sorted.into_iter().collect())
        }
        Value::Array(arr) => Value::Array(arr.iter().map(normalize_value).collect()),
        _ => value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("test record is an object")
    }

    #[test]
    fn test_full_record_key_ordering() {
        let record = as_map(json!({
            "transactionId": "T1",
            "transactionAmount": {"amount": "10.00", "currency": "GBP"},
            "bookingDate": "2024-01-15",
            "creditorName": "TESCO"
        }));
        assert_eq!(
            derive_key(&record).as_str(),
            "id:T1|amount:10.00:GBP|date:2024-01-15|creditor:TESCO"
        );
    }

    #[test]
    fn test_partial_record_skips_absent_fields() {
        let record = as_map(json!({
            "transactionAmount": {"amount": "5.50", "currency": "EUR"},
            "creditorName": "STARBUCKS"
        }));
        assert_eq!(
            derive_key(&record).as_str(),
            "amount:5.50:EUR|creditor:STARBUCKS"
        );
    }

    #[test]
    fn test_key_is_state_independent() {
        // The same record sighted pending and booked derives the same key;
        // state lives in the envelope structure, not the record.
        let record = as_map(json!({"transactionId": "T9", "bookingDate": "2024-02-01"}));
        assert_eq!(derive_key(&record), derive_key(&record));
    }

    #[test]
    fn test_fallback_hash_for_unidentifiable_record() {
        let record = as_map(json!({"note": "no identifying fields"}));
        let key = derive_key(&record);
        assert!(key.as_str().starts_with("hash:"));
        assert_eq!(key.as_str().len(), "hash:".len() + 64);
    }

    #[test]
    fn test_fallback_hash_is_field_order_independent() {
        let a = as_map(json!({"note": "x", "detail": "y"}));
        let mut b = Map::new();
        b.insert("detail".to_string(), json!("y"));
        b.insert("note".to_string(), json!("x"));
        assert_eq!(derive_key(&a), derive_key(&b));
    }

    #[test]
    fn test_distinct_content_distinct_keys() {
        let a = as_map(json!({"transactionId": "T1"}));
        let b = as_map(json!({"transactionId": "T2"}));
        assert_ne!(derive_key(&a), derive_key(&b));
    }

    #[test]
    fn test_numeric_amount_still_contributes_token() {
        let record = as_map(json!({"transactionAmount": {"amount": 12.5, "currency": "GBP"}}));
        assert_eq!(derive_key(&record).as_str(), "amount:12.5:GBP");
    }

    #[test]
    fn test_missing_currency_renders_empty() {
        let record = as_map(json!({"transactionAmount": {"amount": "3.00"}}));
        assert_eq!(derive_key(&record).as_str(), "amount:3.00:");
    }
}
