//! Deterministic per-field pseudonymization
//!
//! The [`PseudonymMapper`] owns one set of substitution caches for the
//! lifetime of an anonymization run. Every substitution is a pure function
//! once populated: the same original value always maps to the same fake
//! value within a run, and caches grow monotonically. Two concurrent runs
//! must not share a mapper unless they want deliberately entangled
//! pseudonyms.
//!
//! Substitutions are format preserving where the original value has a
//! recognizable shape (transaction identifier prefixes, location-suffixed
//! counterparty names, titled personal names inside references), and every
//! hash-derived pick flows from the seeded stable hash so a fixed seed makes
//! whole runs reproducible.

use crate::anonymization::catalogue::{
    ACCOUNT_PLACEHOLDER, CITIES, CITY_MARKERS, FIRST_NAMES, MERCHANTS, REFERENCE_PATTERNS,
    SURNAMES,
};
use crate::anonymization::config::AnonymizationConfig;
use crate::anonymization::hashing::{stable_digest, stable_hex, stable_index};
use crate::anonymization::key::derive_key;
use crate::anonymization::report::MappingStats;
use crate::domain::TransactionKey;
use anyhow::{Context, Result};
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;

/// Free-text reference fields subject to reference substitution
const REFERENCE_FIELDS: [&str; 3] = [
    "remittanceInformationUnstructured",
    "additionalInformation",
    "entryReference",
];

/// Personal-title markers that dispatch a reference to name substitution
const TITLE_MARKERS: [&str; 4] = ["MR ", "MRS ", "MISS ", "MS "];

/// Priority classes for free-text reference content
///
/// Exactly one class applies per reference; the variants are checked in
/// declaration order, first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReferenceClass {
    /// Contains a titled personal name (Mr/Mrs/Miss/Ms)
    TitledName,
    /// Contains a bank-account-shaped token
    AccountNumber,
    /// Contains a 4-digit run
    DigitRun,
    /// No recognizable structure
    Generic,
}

/// Stateful per-field substitution engine
///
/// Holds the four value caches (account identifiers, counterparty names,
/// references, transaction identifiers) and the key-correspondence map from
/// pre-anonymization identity keys to post-anonymization identity keys.
pub struct PseudonymMapper {
    seed: u64,
    amount_variance: f64,
    account_ids: HashMap<String, String>,
    merchant_names: HashMap<String, String>,
    references: HashMap<String, String>,
    transaction_ids: HashMap<String, String>,
    transaction_keys: HashMap<TransactionKey, TransactionKey>,
    account_number_re: Regex,
    digit_run_re: Regex,
}

impl PseudonymMapper {
    /// Create a new mapper with empty caches
    ///
    /// # Errors
    ///
    /// Returns an error if the reference-dispatch patterns fail to compile.
    pub fn new(config: &AnonymizationConfig) -> Result<Self> {
        let account_number_re = Regex::new(r"[A-Z]{2}\d{2}[A-Z0-9]{4}")
            .context("Failed to compile account number pattern")?;
        let digit_run_re =
            Regex::new(r"\d{4}").context("Failed to compile digit run pattern")?;

        Ok(Self {
            seed: config.seed,
            amount_variance: config.amount_variance,
            account_ids: HashMap::new(),
            merchant_names: HashMap::new(),
            references: HashMap::new(),
            transaction_ids: HashMap::new(),
            transaction_keys: HashMap::new(),
            account_number_re,
            digit_run_re,
        })
    }

    /// Substitute an account identifier with a stable fake UUID
    ///
    /// The fake is the seeded hash of the original reformatted as an
    /// RFC 4122 v4-shaped UUID, so distinct originals collide only by hash
    /// coincidence.
    pub fn fake_account_id(&mut self, original: &str) -> String {
        if let Some(hit) = self.account_ids.get(original) {
            return hit.clone();
        }

        let digest = stable_digest(self.seed, original);
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&digest[..16]);
        let fake = uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .to_string();

        self.account_ids.insert(original.to_string(), fake.clone());
        fake
    }

    /// Substitute a transaction identifier, preserving its shape class
    ///
    /// Known prefixes (`T`, `tx_`) and the long-opaque-token class (length
    /// over 50) regenerate a fake of the same shape and length class;
    /// anything else becomes a generic `TXN`-prefixed token.
    pub fn fake_transaction_id(&mut self, original: &str) -> String {
        if let Some(hit) = self.transaction_ids.get(original) {
            return hit.clone();
        }

        let hex = stable_hex(self.seed, original);
        let fake = if original.starts_with('T') {
            format!("T{}", &hex[..31])
        } else if original.starts_with("tx_") {
            format!("tx_{}", &hex[..20])
        } else if original.len() > 50 {
            hex
        } else {
            format!("TXN{}", &hex[..16])
        };

        self.transaction_ids
            .insert(original.to_string(), fake.clone());
        fake
    }

    /// Substitute a counterparty name with a plausible fake merchant
    ///
    /// If the original carries a recognizable city token, a fake city is
    /// appended so the "has a location suffix" structure survives without
    /// the real location. The city pick uses a different bit slice of the
    /// hash than the merchant pick.
    pub fn fake_merchant_name(&mut self, original: &str) -> String {
        if original.is_empty() {
            return String::new();
        }
        if let Some(hit) = self.merchant_names.get(original) {
            return hit.clone();
        }

        let hash = stable_index(self.seed, original);
        let merchant = MERCHANTS[(hash % MERCHANTS.len() as u128) as usize];

        let upper = original.to_uppercase();
        let fake = if CITY_MARKERS.iter().any(|city| upper.contains(city)) {
            let city = CITIES[((hash >> 32) % CITIES.len() as u128) as usize];
            format!("{merchant} {city}")
        } else {
            merchant.to_string()
        };

        self.merchant_names
            .insert(original.to_string(), fake.clone());
        fake
    }

    /// Synthesize a fake personal name
    ///
    /// First-name and surname indices come from different sub-values of one
    /// hash so the two picks are decorrelated. Pure: no cache needed.
    pub fn fake_personal_name(&self, original: &str) -> String {
        if original.is_empty() {
            return String::new();
        }

        let hash = stable_index(self.seed, original);
        let first = FIRST_NAMES[(hash % FIRST_NAMES.len() as u128) as usize];
        let surname = SURNAMES[((hash / 100) % SURNAMES.len() as u128) as usize];
        format!("{first} {surname}")
    }

    /// Substitute a free-text reference, preserving its structure class
    pub fn fake_reference(&mut self, original: &str) -> String {
        if original.is_empty() {
            return String::new();
        }
        if let Some(hit) = self.references.get(original) {
            return hit.clone();
        }

        let fake = self.synthesize_reference(original);
        self.references.insert(original.to_string(), fake.clone());
        fake
    }

    /// Jitter an amount by a deterministic fraction of the variance
    ///
    /// Unparsable input is returned unchanged rather than failing. The
    /// jitter is derived from the original string, so a transaction sighted
    /// in several snapshots with identical amount text jitters identically.
    pub fn jitter_amount(&self, original: &str) -> String {
        let amount: f64 = match original.parse() {
            Ok(value) => value,
            Err(_) => return original.to_string(),
        };

        let hash = stable_index(self.seed, original);
        let fraction = (hash % 1000) as f64 / 1000.0;
        let jitter = fraction * self.amount_variance * 2.0 - self.amount_variance;

        format!("{:.2}", amount * (1.0 + jitter))
    }

    /// Replace an internal identifier with an opaque stable digest
    pub fn fake_internal_id(&self, original: &str) -> String {
        stable_hex(self.seed, original)
    }

    /// Anonymize one transaction record
    ///
    /// Applies the relevant substitution to each matching field; fields
    /// absent in the input remain absent in the output. Records the mapping
    /// from the record's pre-anonymization identity key to its
    /// post-anonymization key so relationship knowledge survives the
    /// rewrite.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is not a JSON object.
    pub fn anonymize_transaction(&mut self, record: &Value) -> Result<Value> {
        let original = record
            .as_object()
            .ok_or_else(|| anyhow::anyhow!("transaction record is not a JSON object"))?;

        let original_key = derive_key(original);
        let mut masked = original.clone();

        if let Some(Value::String(id)) = original.get("transactionId") {
            let fake = self.fake_transaction_id(id);
            masked.insert("transactionId".to_string(), Value::String(fake));
        }

        if let Some(Value::String(name)) = original.get("creditorName") {
            let fake = self.fake_merchant_name(name);
            masked.insert("creditorName".to_string(), Value::String(fake));
        }

        if let Some(Value::String(name)) = original.get("debtorName") {
            let fake = self.fake_personal_name(name);
            masked.insert("debtorName".to_string(), Value::String(fake));
        }

        for field in REFERENCE_FIELDS {
            if let Some(Value::String(reference)) = original.get(field) {
                let fake = self.fake_reference(reference);
                masked.insert(field.to_string(), Value::String(fake));
            }
        }

        if let Some(Value::Object(amount)) = original.get("transactionAmount") {
            if let Some(Value::String(text)) = amount.get("amount") {
                let mut amount = amount.clone();
                amount.insert(
                    "amount".to_string(),
                    Value::String(self.jitter_amount(text)),
                );
                masked.insert("transactionAmount".to_string(), Value::Object(amount));
            }
        }

        if let Some(Value::String(id)) = original.get("internalTransactionId") {
            let fake = self.fake_internal_id(id);
            masked.insert("internalTransactionId".to_string(), Value::String(fake));
        }

        let masked_key = derive_key(&masked);
        self.transaction_keys.insert(original_key, masked_key);

        Ok(Value::Object(masked))
    }

    /// The before→after identity key correspondence recorded so far
    pub fn key_correspondence(&self) -> &HashMap<TransactionKey, TransactionKey> {
        &self.transaction_keys
    }

    /// Distinct-original counts per cache
    pub fn stats(&self) -> MappingStats {
        MappingStats {
            accounts_anonymized: self.account_ids.len(),
            creditors_anonymized: self.merchant_names.len(),
            references_anonymized: self.references.len(),
            transaction_ids_anonymized: self.transaction_ids.len(),
            transaction_keys_tracked: self.transaction_keys.len(),
        }
    }

    /// Classify reference content; first matching class wins
    fn classify_reference(&self, reference: &str) -> ReferenceClass {
        let upper = reference.to_uppercase();
        if TITLE_MARKERS.iter().any(|marker| upper.contains(marker)) {
            ReferenceClass::TitledName
        } else if self.account_number_re.is_match(reference) {
            ReferenceClass::AccountNumber
        } else if self.digit_run_re.is_match(reference) {
            ReferenceClass::DigitRun
        } else {
            ReferenceClass::Generic
        }
    }

    /// Build the fake reference for an uncached original
    fn synthesize_reference(&self, original: &str) -> String {
        match self.classify_reference(original) {
            ReferenceClass::TitledName => self.fake_personal_name(original),
            ReferenceClass::AccountNumber => self
                .account_number_re
                .replace_all(original, ACCOUNT_PLACEHOLDER)
                .into_owned(),
            ReferenceClass::DigitRun => {
                let hash = stable_index(self.seed, original);
                let digits = format!("{:04}", hash % 10_000);
                self.digit_run_re
                    .replace(original, digits.as_str())
                    .into_owned()
            }
            ReferenceClass::Generic => {
                let hash = stable_index(self.seed, original);
                let (prefix, width) =
                    REFERENCE_PATTERNS[(hash % REFERENCE_PATTERNS.len() as u128) as usize];
                let suffix = hash % 10u128.pow(width as u32);
                format!("{}{:0width$}", prefix, suffix, width = width)
            }
        }
    }
}
