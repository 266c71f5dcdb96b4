use crate::models::{EngagementLevel, EnhancedCandidate, Region, RegionStats, Stats};

/// Summarize a candidate collection: level counts and score averages
///
/// Pure reduction over the input. An empty collection yields zero-valued
/// statistics rather than an error; averages avoid division by zero.
pub fn summarize(candidates: &[EnhancedCandidate]) -> Stats {
    let total = candidates.len();
    if total == 0 {
        return Stats::empty();
    }

    let mut high = 0;
    let mut medium = 0;
    let mut low = 0;
    let mut sum_original = 0.0;
    let mut sum_enhanced = 0.0;

    for candidate in candidates {
        match candidate.engagement_level {
            EngagementLevel::High => high += 1,
            EngagementLevel::Medium => medium += 1,
            EngagementLevel::Low => low += 1,
        }
        sum_original += candidate.original_score;
        sum_enhanced += candidate.enhanced_score;
    }

    Stats {
        total,
        high,
        medium,
        low,
        avg_original: sum_original / total as f64,
        avg_enhanced: sum_enhanced / total as f64,
    }
}

/// Region-scoped summary: engagement distribution plus infrastructure figures
///
/// Only candidates belonging to the region are counted. Percentages are 0
/// when the region has no candidates.
pub fn summarize_region(candidates: &[EnhancedCandidate], region: &Region) -> RegionStats {
    let in_region: Vec<&EnhancedCandidate> = candidates
        .iter()
        .filter(|c| c.zip_code == region.zip_code)
        .collect();

    let total = in_region.len();
    let high = in_region
        .iter()
        .filter(|c| c.engagement_level == EngagementLevel::High)
        .count();
    let medium = in_region
        .iter()
        .filter(|c| c.engagement_level == EngagementLevel::Medium)
        .count();
    let low = in_region
        .iter()
        .filter(|c| c.engagement_level == EngagementLevel::Low)
        .count();

    let percentage = |count: usize| {
        if total > 0 {
            count as f64 / total as f64 * 100.0
        } else {
            0.0
        }
    };

    let total_institutions = region.community_centers + region.religious_institutions;

    RegionStats {
        zip_code: region.zip_code.clone(),
        total_candidates: total,
        high,
        medium,
        low,
        high_percentage: percentage(high),
        medium_percentage: percentage(medium),
        low_percentage: percentage(low),
        total_institutions,
        institution_density: total_institutions as f64 / 10.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BucketZone;

    fn candidate(id: &str, zip: &str, original: f64, enhanced: f64, level: EngagementLevel) -> EnhancedCandidate {
        EnhancedCandidate {
            id: id.to_string(),
            name: format!("Candidate {}", id),
            zip_code: zip.to_string(),
            original_score: original,
            address: "1 Civic Center Plaza".to_string(),
            distance_to_center: 1.0,
            proximity_boost: enhanced - original,
            bucket_zone: BucketZone::High,
            nearby_institutions: 4,
            enhanced_score: enhanced,
            engagement_level: level,
            score_improvement: enhanced - original,
        }
    }

    fn test_region(zip: &str) -> Region {
        Region {
            zip_code: zip.to_string(),
            community_engagement_score: 8.7,
            community_centers: 4,
            religious_institutions: 6,
            highly_engaged_voters: 342,
            avg_civic_engagement: 7.8,
            institutions: vec![],
            coordinates: (33.6189, -117.9298),
        }
    }

    #[test]
    fn test_summarize_counts_and_averages() {
        let candidates = vec![
            candidate("1", "92604", 7.2, 9.1, EngagementLevel::High),
            candidate("2", "92602", 6.8, 8.7, EngagementLevel::High),
            candidate("3", "92606", 5.2, 6.8, EngagementLevel::Medium),
            candidate("4", "92612", 3.1, 4.0, EngagementLevel::Low),
        ];

        let stats = summarize(&candidates);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.high, 2);
        assert_eq!(stats.medium, 1);
        assert_eq!(stats.low, 1);
        assert!((stats.avg_original - 5.575).abs() < 1e-9);
        assert!((stats.avg_enhanced - 7.15).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_empty_is_all_zero() {
        let stats = summarize(&[]);
        assert_eq!(stats, Stats::empty());
        assert_eq!(stats.avg_original, 0.0);
        assert_eq!(stats.avg_enhanced, 0.0);
    }

    #[test]
    fn test_summarize_region_scopes_to_zip() {
        let candidates = vec![
            candidate("1", "92602", 7.2, 9.1, EngagementLevel::High),
            candidate("2", "92602", 5.2, 6.8, EngagementLevel::Medium),
            candidate("3", "92604", 6.8, 8.7, EngagementLevel::High),
        ];
        let region = test_region("92602");

        let stats = summarize_region(&candidates, &region);

        assert_eq!(stats.total_candidates, 2);
        assert_eq!(stats.high, 1);
        assert_eq!(stats.medium, 1);
        assert_eq!(stats.low, 0);
        assert!((stats.high_percentage - 50.0).abs() < 1e-9);
        assert!((stats.medium_percentage - 50.0).abs() < 1e-9);
        assert_eq!(stats.low_percentage, 0.0);
        assert_eq!(stats.total_institutions, 10);
        assert!((stats.institution_density - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_region_with_no_candidates() {
        let region = test_region("92807");
        let stats = summarize_region(&[], &region);

        assert_eq!(stats.total_candidates, 0);
        assert_eq!(stats.high_percentage, 0.0);
        assert_eq!(stats.medium_percentage, 0.0);
        assert_eq!(stats.low_percentage, 0.0);
        assert_eq!(stats.total_institutions, 10);
    }
}
