use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::ExportColumn;
use crate::models::domain::{
    BucketZone, CandidateFilter, DistanceBand, EngagementLevel, ImprovementBand, SortDirection,
    SortKey,
};

/// Request to query the enhanced candidate collection
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QueryCandidatesRequest {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub engagement: Option<EngagementLevel>,
    #[validate(length(min = 1))]
    #[serde(default, alias = "zip_code", rename = "zipCode")]
    pub zip_code: Option<String>,
    #[validate(length(min = 1))]
    #[serde(default, alias = "selected_zip_code", rename = "selectedZipCode")]
    pub selected_zip_code: Option<String>,
    #[serde(default)]
    pub distance: Option<DistanceBand>,
    #[serde(default)]
    pub improvement: Option<ImprovementBand>,
    #[serde(default)]
    pub bucket: Option<BucketZone>,
    #[serde(default = "default_sort_field", alias = "sort_field", rename = "sortField")]
    pub sort_field: SortKey,
    #[serde(
        default = "default_sort_direction",
        alias = "sort_direction",
        rename = "sortDirection"
    )]
    pub sort_direction: SortDirection,
}

fn default_sort_field() -> SortKey {
    SortKey::EnhancedScore
}

fn default_sort_direction() -> SortDirection {
    SortDirection::Desc
}

impl QueryCandidatesRequest {
    /// Build the engine filter; an empty search term means "match all"
    pub fn to_filter(&self) -> CandidateFilter {
        CandidateFilter {
            search: self
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            engagement: self.engagement,
            zip_code: self.zip_code.clone(),
            selected_zip_code: self.selected_zip_code.clone(),
            distance: self.distance,
            improvement: self.improvement,
            bucket: self.bucket,
        }
    }
}

impl Default for QueryCandidatesRequest {
    fn default() -> Self {
        Self {
            search: None,
            engagement: None,
            zip_code: None,
            selected_zip_code: None,
            distance: None,
            improvement: None,
            bucket: None,
            sort_field: default_sort_field(),
            sort_direction: default_sort_direction(),
        }
    }
}

/// Request to export the filtered collection as CSV
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExportCandidatesRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub query: QueryCandidatesRequest,
    /// Column set; defaults to the candidate-list export columns
    #[serde(default)]
    pub columns: Option<Vec<ExportColumn>>,
}
