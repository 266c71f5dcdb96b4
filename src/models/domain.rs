use serde::{Deserialize, Serialize};

/// Civic or educational facility located within a region
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Institution {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: InstitutionKind,
    pub address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstitutionKind {
    #[serde(rename = "Community Center")]
    CommunityCenter,
    #[serde(rename = "Religious Institution")]
    ReligiousInstitution,
    Library,
    School,
}

/// Zip-code-scoped area with aggregate civic and institutional statistics
///
/// Loaded once from the dataset provider and immutable for the lifetime of
/// a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    #[serde(rename = "zipCode")]
    pub zip_code: String,
    #[serde(rename = "communityEngagementScore")]
    pub community_engagement_score: f64,
    #[serde(rename = "communityCenters")]
    pub community_centers: u32,
    #[serde(rename = "religiousInstitutions")]
    pub religious_institutions: u32,
    #[serde(rename = "highlyEngagedVoters")]
    pub highly_engaged_voters: u32,
    #[serde(rename = "avgCivicEngagement")]
    pub avg_civic_engagement: f64,
    #[serde(default)]
    pub institutions: Vec<Institution>,
    /// [latitude, longitude]
    pub coordinates: (f64, f64),
}

/// Base candidate record as supplied by the data provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    #[serde(rename = "zipCode")]
    pub zip_code: String,
    #[serde(rename = "originalScore")]
    pub original_score: f64,
    pub address: String,
}

/// Candidate plus the provider-supplied proximity measurements
///
/// Distance and boost are precomputed upstream; the engine classifies and
/// combines them but never derives them from coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateRecord {
    #[serde(flatten)]
    pub candidate: Candidate,
    #[serde(rename = "distanceToCenter")]
    pub distance_to_center: f64,
    #[serde(rename = "proximityBoost")]
    pub proximity_boost: f64,
}

/// Derived candidate view produced by one enhancement pass
///
/// Never mutated after creation; recomputation replaces the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancedCandidate {
    pub id: String,
    pub name: String,
    #[serde(rename = "zipCode")]
    pub zip_code: String,
    #[serde(rename = "originalScore")]
    pub original_score: f64,
    pub address: String,
    #[serde(rename = "distanceToCenter")]
    pub distance_to_center: f64,
    #[serde(rename = "proximityBoost")]
    pub proximity_boost: f64,
    #[serde(rename = "bucketZone")]
    pub bucket_zone: BucketZone,
    #[serde(rename = "nearbyInstitutions")]
    pub nearby_institutions: u32,
    #[serde(rename = "enhancedScore")]
    pub enhanced_score: f64,
    #[serde(rename = "engagementLevel")]
    pub engagement_level: EngagementLevel,
    #[serde(rename = "scoreImprovement")]
    pub score_improvement: f64,
}

/// Proximity bucket labelling which boost regime applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketZone {
    High,
    Medium,
    Low,
}

/// Final categorical engagement classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngagementLevel {
    High,
    Medium,
    Low,
}

impl EngagementLevel {
    /// Rank order used for sorting: High > Medium > Low
    pub fn rank(&self) -> u8 {
        match self {
            EngagementLevel::High => 3,
            EngagementLevel::Medium => 2,
            EngagementLevel::Low => 1,
        }
    }
}

/// Distance-range filter band (miles from the community center)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceBand {
    Near,
    Medium,
    Far,
}

/// Score-improvement filter band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImprovementBand {
    High,
    Medium,
    Low,
}

impl ImprovementBand {
    /// high >= 2.0, medium in [1.0, 2.0), low < 1.0
    pub fn contains(&self, improvement: f64) -> bool {
        match self {
            ImprovementBand::High => improvement >= 2.0,
            ImprovementBand::Medium => (1.0..2.0).contains(&improvement),
            ImprovementBand::Low => improvement < 1.0,
        }
    }
}

/// Sort key for candidate queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "originalScore")]
    OriginalScore,
    #[serde(rename = "enhancedScore")]
    EnhancedScore,
    #[serde(rename = "zipCode")]
    ZipCode,
    #[serde(rename = "engagementLevel")]
    EngagementLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Compound candidate filter; every predicate is optional and conjunctive
#[derive(Debug, Clone, Default)]
pub struct CandidateFilter {
    /// Case-insensitive substring match against name, zip code, or address
    pub search: Option<String>,
    pub engagement: Option<EngagementLevel>,
    /// Zip equality; a candidate also passes if it matches `selected_zip_code`
    pub zip_code: Option<String>,
    /// Currently selected region, an escape hatch alongside `zip_code`
    pub selected_zip_code: Option<String>,
    pub distance: Option<DistanceBand>,
    pub improvement: Option<ImprovementBand>,
    pub bucket: Option<BucketZone>,
}

/// Unit convention for the provider-supplied proximity boost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoostConvention {
    /// Boost is already a final score-point delta and is added directly.
    /// Matches the reference data (7.2 original + 1.9 boost = 9.1).
    ScorePoints,
    /// Boost is a 0-10 sub-score; the documented weights apply.
    Normalized,
}

impl Default for BoostConvention {
    fn default() -> Self {
        BoostConvention::ScorePoints
    }
}

/// Scoring weights for the normalized convention
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub behavioral: f64,
    pub proximity: f64,
    pub density: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            behavioral: 0.60,
            proximity: 0.25,
            density: 0.15,
        }
    }
}

/// Engagement classification cutoffs (inclusive lower bounds)
#[derive(Debug, Clone, Copy)]
pub struct EngagementThresholds {
    pub high: f64,
    pub medium: f64,
}

impl Default for EngagementThresholds {
    fn default() -> Self {
        Self { high: 7.0, medium: 5.0 }
    }
}

/// Summary statistics over a candidate collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    #[serde(rename = "avgOriginal")]
    pub avg_original: f64,
    #[serde(rename = "avgEnhanced")]
    pub avg_enhanced: f64,
}

impl Stats {
    pub fn empty() -> Self {
        Self {
            total: 0,
            high: 0,
            medium: 0,
            low: 0,
            avg_original: 0.0,
            avg_enhanced: 0.0,
        }
    }
}

/// Region-scoped summary statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionStats {
    #[serde(rename = "zipCode")]
    pub zip_code: String,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    #[serde(rename = "highPercentage")]
    pub high_percentage: f64,
    #[serde(rename = "mediumPercentage")]
    pub medium_percentage: f64,
    #[serde(rename = "lowPercentage")]
    pub low_percentage: f64,
    #[serde(rename = "totalInstitutions")]
    pub total_institutions: u32,
    /// (community centers + religious institutions) / 10, per 10k residents
    #[serde(rename = "institutionDensity")]
    pub institution_density: f64,
}
