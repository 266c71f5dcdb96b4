use std::collections::HashMap;

use crate::core::error::ValidationError;
use crate::core::proximity::classify_distance;
use crate::core::scoring::{classify_engagement, compute_enhanced_score, density_component};
use crate::models::{
    BoostConvention, CandidateRecord, EngagementThresholds, EnhancedCandidate, Region,
    ScoringWeights,
};

/// Enhancement pipeline: one pass over a candidate plus its region
///
/// Produces immutable `EnhancedCandidate` views. Recomputation replaces the
/// record, it never patches it.
#[derive(Debug, Clone)]
pub struct Enhancer {
    weights: ScoringWeights,
    thresholds: EngagementThresholds,
    convention: BoostConvention,
}

impl Enhancer {
    pub fn new(
        weights: ScoringWeights,
        thresholds: EngagementThresholds,
        convention: BoostConvention,
    ) -> Self {
        Self {
            weights,
            thresholds,
            convention,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(
            ScoringWeights::default(),
            EngagementThresholds::default(),
            BoostConvention::default(),
        )
    }

    /// Enhance a single candidate against its region
    ///
    /// Validates the original score range and the distance sign; a failure
    /// here reflects malformed provider data and fails identically on retry.
    pub fn enhance(
        &self,
        record: &CandidateRecord,
        region: &Region,
    ) -> Result<EnhancedCandidate, ValidationError> {
        let candidate = &record.candidate;

        if !(0.0..=10.0).contains(&candidate.original_score) {
            return Err(ValidationError::ScoreOutOfRange {
                candidate_id: candidate.id.clone(),
                value: candidate.original_score,
            });
        }

        let bucket_zone = classify_distance(record.distance_to_center)?;
        let density = density_component(region);
        let enhanced_score = compute_enhanced_score(
            candidate.original_score,
            record.proximity_boost,
            density,
            &self.weights,
            self.convention,
        );
        let engagement_level = classify_engagement(enhanced_score, &self.thresholds);

        Ok(EnhancedCandidate {
            id: candidate.id.clone(),
            name: candidate.name.clone(),
            zip_code: candidate.zip_code.clone(),
            original_score: candidate.original_score,
            address: candidate.address.clone(),
            distance_to_center: record.distance_to_center,
            proximity_boost: record.proximity_boost,
            bucket_zone,
            nearby_institutions: region.institutions.len() as u32,
            enhanced_score,
            engagement_level,
            score_improvement: enhanced_score - candidate.original_score,
        })
    }

    /// Enhance a full candidate collection, resolving each region by zip code
    ///
    /// Fails fast on the first candidate referencing a zip code with no
    /// region; orphan candidates are rejected rather than degraded.
    pub fn enhance_all(
        &self,
        records: &[CandidateRecord],
        regions: &HashMap<String, Region>,
    ) -> Result<Vec<EnhancedCandidate>, ValidationError> {
        records
            .iter()
            .map(|record| {
                let region = regions.get(&record.candidate.zip_code).ok_or_else(|| {
                    ValidationError::UnknownRegion {
                        candidate_id: record.candidate.id.clone(),
                        zip_code: record.candidate.zip_code.clone(),
                    }
                })?;
                self.enhance(record, region)
            })
            .collect()
    }
}

impl Default for Enhancer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BucketZone, Candidate, EngagementLevel};

    fn test_region(zip: &str, community_centers: u32, religious_institutions: u32) -> Region {
        Region {
            zip_code: zip.to_string(),
            community_engagement_score: 9.1,
            community_centers,
            religious_institutions,
            highly_engaged_voters: 425,
            avg_civic_engagement: 8.4,
            institutions: vec![],
            coordinates: (33.6751, -117.842),
        }
    }

    fn test_record(id: &str, zip: &str, original_score: f64, distance: f64, boost: f64) -> CandidateRecord {
        CandidateRecord {
            candidate: Candidate {
                id: id.to_string(),
                name: format!("Candidate {}", id),
                zip_code: zip.to_string(),
                original_score,
                address: "123 Oak Street, Irvine, CA 92604".to_string(),
            },
            distance_to_center: distance,
            proximity_boost: boost,
        }
    }

    #[test]
    fn test_enhance_reference_candidate() {
        // Sarah Chen scenario from the study data
        let enhancer = Enhancer::with_defaults();
        let region = test_region("92604", 5, 7);
        let record = test_record("1", "92604", 7.2, 0.8, 1.9);

        let enhanced = enhancer.enhance(&record, &region).unwrap();

        assert_eq!(enhanced.bucket_zone, BucketZone::High);
        assert!((enhanced.enhanced_score - 9.1).abs() < 1e-9);
        assert_eq!(enhanced.engagement_level, EngagementLevel::High);
        assert!((enhanced.score_improvement - 1.9).abs() < 1e-9);
    }

    #[test]
    fn test_improvement_is_exact_difference() {
        let enhancer = Enhancer::with_defaults();
        let region = test_region("92606", 2, 3);
        let record = test_record("5", "92606", 5.2, 3.2, 1.6);

        let enhanced = enhancer.enhance(&record, &region).unwrap();

        assert_eq!(
            enhanced.score_improvement,
            enhanced.enhanced_score - enhanced.original_score
        );
        assert_eq!(enhanced.bucket_zone, BucketZone::Low);
    }

    #[test]
    fn test_enhance_rejects_out_of_range_score() {
        let enhancer = Enhancer::with_defaults();
        let region = test_region("92604", 5, 7);
        let record = test_record("1", "92604", 10.5, 0.8, 1.9);

        let err = enhancer.enhance(&record, &region).unwrap_err();
        assert!(matches!(err, ValidationError::ScoreOutOfRange { .. }));
    }

    #[test]
    fn test_enhance_rejects_negative_distance() {
        let enhancer = Enhancer::with_defaults();
        let region = test_region("92604", 5, 7);
        let record = test_record("1", "92604", 7.2, -0.8, 1.9);

        let err = enhancer.enhance(&record, &region).unwrap_err();
        assert_eq!(err, ValidationError::NegativeDistance(-0.8));
    }

    #[test]
    fn test_enhance_all_rejects_unknown_region() {
        let enhancer = Enhancer::with_defaults();
        let mut regions = HashMap::new();
        regions.insert("92604".to_string(), test_region("92604", 5, 7));

        let records = vec![
            test_record("1", "92604", 7.2, 0.8, 1.9),
            test_record("2", "00000", 6.8, 1.2, 1.9),
        ];

        let err = enhancer.enhance_all(&records, &regions).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownRegion {
                candidate_id: "2".to_string(),
                zip_code: "00000".to_string(),
            }
        );
    }

    #[test]
    fn test_enhance_all_preserves_input_order() {
        let enhancer = Enhancer::with_defaults();
        let mut regions = HashMap::new();
        regions.insert("92604".to_string(), test_region("92604", 5, 7));

        let records = vec![
            test_record("1", "92604", 7.2, 0.8, 1.9),
            test_record("2", "92604", 6.8, 1.2, 1.4),
            test_record("3", "92604", 5.9, 2.1, 1.3),
        ];

        let enhanced = enhancer.enhance_all(&records, &regions).unwrap();
        let ids: Vec<&str> = enhanced.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }
}
