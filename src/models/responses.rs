use serde::{Deserialize, Serialize};

use crate::models::domain::{EnhancedCandidate, Region, RegionStats, Stats};

/// Response for the candidate query endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryCandidatesResponse {
    pub candidates: Vec<EnhancedCandidate>,
    pub stats: Stats,
    /// Size of the full collection before filtering
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the region list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionsResponse {
    pub regions: Vec<Region>,
    pub count: usize,
}

/// Response for the region detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionDetailResponse {
    pub region: Region,
    pub stats: RegionStats,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
