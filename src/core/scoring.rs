use crate::models::{BoostConvention, EngagementLevel, EngagementThresholds, Region, ScoringWeights};

/// Institutions-per-10k-residents proxy used to normalize density
const DENSITY_NORMALIZATION: f64 = 10.0;

/// Normalized institution concentration for a region (0-10)
///
/// Counts community centers and religious institutions only; libraries and
/// schools contribute to the catalog but not to the density figure.
#[inline]
pub fn density_component(region: &Region) -> f64 {
    let total = (region.community_centers + region.religious_institutions) as f64;
    (total / DENSITY_NORMALIZATION).clamp(0.0, 10.0)
}

/// Combine the behavioral, proximity, and density components into an
/// enhanced score
///
/// The unit reconciliation for `proximity_boost` is an explicit choice:
///
/// - `ScorePoints`: the boost is already a final score-point delta with the
///   geographic weighting applied upstream, so it is added directly and the
///   score improvement equals the boost exactly.
/// - `Normalized`: the boost is a 0-10 sub-score and the configured weights
///   apply to all three components.
///
/// The result is intentionally not clamped to [0, 10]; out-of-range inputs
/// propagate so the caller can see them.
#[inline]
pub fn compute_enhanced_score(
    original_score: f64,
    proximity_boost: f64,
    density: f64,
    weights: &ScoringWeights,
    convention: BoostConvention,
) -> f64 {
    match convention {
        BoostConvention::ScorePoints => original_score + proximity_boost,
        BoostConvention::Normalized => {
            original_score * weights.behavioral
                + proximity_boost * weights.proximity
                + density * weights.density
        }
    }
}

/// Map an enhanced score to a categorical engagement level
///
/// Cutoffs are inclusive lower bounds: High at `thresholds.high`, Medium at
/// `thresholds.medium`, Low below. Total over all floats.
#[inline]
pub fn classify_engagement(enhanced_score: f64, thresholds: &EngagementThresholds) -> EngagementLevel {
    if enhanced_score >= thresholds.high {
        EngagementLevel::High
    } else if enhanced_score >= thresholds.medium {
        EngagementLevel::Medium
    } else {
        EngagementLevel::Low
    }
}
