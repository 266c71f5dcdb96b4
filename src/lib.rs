//! Civic Rank - candidate ranking and proximity-analysis service
//!
//! This library scores voter-outreach candidates by combining a behavioral
//! baseline with geographic proximity to community institutions, then serves
//! filtered, sorted, and aggregated views of the enhanced collection.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{classify_distance, query, summarize, summarize_region, to_csv, Enhancer, ValidationError};
pub use models::{
    BoostConvention, BucketZone, Candidate, CandidateFilter, CandidateRecord, EngagementLevel,
    EnhancedCandidate, Region, SortDirection, SortKey, Stats,
};
