//! Domain models and types
//!
//! This module contains the core domain models shared by every engine
//! component:
//!
//! - **Envelope models** ([`Envelope`], [`EnvelopeMetadata`], [`TransactionPayload`])
//! - **Strongly-typed identifiers** ([`AccountId`], [`TransactionKey`])
//! - **Error types** ([`MaskError`]) and the [`Result`] alias
//!
//! The newtype pattern prevents mixing identifier kinds: an [`AccountId`]
//! can never be passed where a [`TransactionKey`] is expected.

pub mod envelope;
pub mod errors;
pub mod ids;
pub mod result;

// Re-export commonly used types for convenience
pub use envelope::{Envelope, EnvelopeMetadata, TransactionPayload};
pub use errors::MaskError;
pub use ids::{AccountId, TransactionKey};
pub use result::Result;
