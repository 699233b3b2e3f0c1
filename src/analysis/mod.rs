//! Corpus analysis
//!
//! Read-only analyzers over a snapshot corpus: relationship detection
//! (pending→booked transitions, duplicate sightings) and a structural
//! summary. Neither mutates the corpus; both can run before or after
//! anonymization.

pub mod relationships;
pub mod summary;

// Re-export main types
pub use relationships::{
    DuplicateSightings, PendingToBooked, RelationshipAnalyzer, RelationshipReport,
};
pub use summary::CorpusSummary;
