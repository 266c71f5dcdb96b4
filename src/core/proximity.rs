use crate::core::error::ValidationError;
use crate::models::{BucketZone, DistanceBand};

/// Upper bound of the high-boost zone in miles (inclusive)
pub const HIGH_ZONE_MAX_MILES: f64 = 1.5;

/// Upper bound of the medium-boost zone in miles (inclusive)
pub const MEDIUM_ZONE_MAX_MILES: f64 = 3.0;

/// Classify a distance to the nearest community center into a bucket zone
///
/// Boundaries are inclusive on the lower bucket: exactly 1.5 miles is high,
/// exactly 3.0 miles is medium. The bucket labels which boost regime applies;
/// the boost magnitude itself is supplied per candidate by the data provider.
///
/// # Errors
/// Returns `ValidationError::NegativeDistance` for a negative input.
#[inline]
pub fn classify_distance(distance_miles: f64) -> Result<BucketZone, ValidationError> {
    if distance_miles < 0.0 {
        return Err(ValidationError::NegativeDistance(distance_miles));
    }

    if distance_miles <= HIGH_ZONE_MAX_MILES {
        Ok(BucketZone::High)
    } else if distance_miles <= MEDIUM_ZONE_MAX_MILES {
        Ok(BucketZone::Medium)
    } else {
        Ok(BucketZone::Low)
    }
}

/// Check whether a distance falls within a filter band
///
/// Bands use the same boundaries as the bucket zones: near <= 1.5,
/// medium in (1.5, 3.0], far > 3.0.
#[inline]
pub fn in_distance_band(distance_miles: f64, band: DistanceBand) -> bool {
    match band {
        DistanceBand::Near => distance_miles <= HIGH_ZONE_MAX_MILES,
        DistanceBand::Medium => {
            distance_miles > HIGH_ZONE_MAX_MILES && distance_miles <= MEDIUM_ZONE_MAX_MILES
        }
        DistanceBand::Far => distance_miles > MEDIUM_ZONE_MAX_MILES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_distance_buckets() {
        assert_eq!(classify_distance(0.0).unwrap(), BucketZone::High);
        assert_eq!(classify_distance(0.8).unwrap(), BucketZone::High);
        assert_eq!(classify_distance(2.1).unwrap(), BucketZone::Medium);
        assert_eq!(classify_distance(3.2).unwrap(), BucketZone::Low);
        assert_eq!(classify_distance(10.0).unwrap(), BucketZone::Low);
    }

    #[test]
    fn test_classify_distance_boundaries() {
        // Ties go to the lower bucket
        assert_eq!(classify_distance(1.5).unwrap(), BucketZone::High);
        assert_eq!(classify_distance(3.0).unwrap(), BucketZone::Medium);
    }

    #[test]
    fn test_classify_negative_distance_fails() {
        let err = classify_distance(-0.1).unwrap_err();
        assert_eq!(err, ValidationError::NegativeDistance(-0.1));
    }

    #[test]
    fn test_distance_bands_match_bucket_boundaries() {
        assert!(in_distance_band(1.5, DistanceBand::Near));
        assert!(!in_distance_band(1.5, DistanceBand::Medium));
        assert!(in_distance_band(3.0, DistanceBand::Medium));
        assert!(!in_distance_band(3.0, DistanceBand::Far));
        assert!(in_distance_band(3.01, DistanceBand::Far));
    }
}
