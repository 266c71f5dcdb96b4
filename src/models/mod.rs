// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BoostConvention, BucketZone, Candidate, CandidateFilter, CandidateRecord, DistanceBand,
    EngagementLevel, EngagementThresholds, EnhancedCandidate, ImprovementBand, Institution,
    InstitutionKind, Region, RegionStats, ScoringWeights, SortDirection, SortKey, Stats,
};
pub use requests::{ExportCandidatesRequest, QueryCandidatesRequest};
pub use responses::{
    ErrorResponse, HealthResponse, QueryCandidatesResponse, RegionDetailResponse, RegionsResponse,
};
