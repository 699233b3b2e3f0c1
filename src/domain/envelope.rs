//! Envelope and payload models
//!
//! An envelope is one captured snapshot of an account's transactions at a
//! point in time. The same underlying transaction may appear in many
//! envelopes (re-fetched snapshots), and its lifecycle state is structural:
//! a record is pending or booked depending on which payload list it sits in,
//! not on any field value.
//!
//! Transaction records themselves stay open JSON maps — the corpus is
//! heterogeneous and every identifying field is optional.

use super::errors::MaskError;
use super::ids::AccountId;
use super::result::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Capture metadata for one envelope
///
/// Mirrors the wire shape `{ accountId, createdAt, requisitionId?, traceId? }`.
/// Unknown header fields are preserved through anonymization via `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeMetadata {
    /// Account the snapshot was captured for
    pub account_id: String,

    /// Capture timestamp of the snapshot
    pub created_at: DateTime<Utc>,

    /// Volatile correlation identifier from the fetching session
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requisition_id: Option<String>,

    /// Volatile trace identifier from the fetching session
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,

    /// Header fields the engine does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EnvelopeMetadata {
    /// Returns the validated account identifier
    ///
    /// Fails loudly for a blank account identifier, since the identity model
    /// and the account-identifier substitution both require it.
    pub fn account(&self) -> Result<AccountId> {
        AccountId::new(self.account_id.as_str()).map_err(MaskError::Validation)
    }
}

/// Pending and booked transaction lists of one envelope
///
/// List order and the pending/booked partition are preserved by every
/// engine operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransactionPayload {
    /// Transactions not yet booked at capture time
    #[serde(default)]
    pub pending: Vec<Value>,

    /// Booked transactions at capture time
    #[serde(default)]
    pub booked: Vec<Value>,

    /// Payload fields the engine does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TransactionPayload {
    /// Total number of transaction records in both lists
    pub fn len(&self) -> usize {
        self.pending.len() + self.booked.len()
    }

    /// True when both lists are empty
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.booked.is_empty()
    }
}

/// One captured snapshot of an account's transactions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Capture metadata
    pub metadata: EnvelopeMetadata,

    /// Pending and booked transaction lists
    pub payload: TransactionPayload,
}

impl Envelope {
    /// Deserializes an envelope from a raw JSON value
    ///
    /// This is the seam a corpus-loading layer feeds raw snapshots through;
    /// a snapshot missing its metadata or capture timestamp fails here.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}
