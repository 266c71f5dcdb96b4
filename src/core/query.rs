use std::cmp::Ordering;

use crate::core::proximity::in_distance_band;
use crate::models::{CandidateFilter, EnhancedCandidate, SortDirection, SortKey};

/// Check a candidate against every predicate in the filter (AND semantics)
///
/// Each predicate is independently optional; an unset predicate matches
/// everything.
#[inline]
pub fn matches_filter(candidate: &EnhancedCandidate, filter: &CandidateFilter) -> bool {
    if let Some(term) = &filter.search {
        let needle = term.to_lowercase();
        let hit = candidate.name.to_lowercase().contains(&needle)
            || candidate.zip_code.to_lowercase().contains(&needle)
            || candidate.address.to_lowercase().contains(&needle);
        if !hit {
            return false;
        }
    }

    if let Some(level) = filter.engagement {
        if candidate.engagement_level != level {
            return false;
        }
    }

    // Zip equality, with the currently selected region as an escape hatch:
    // either condition passes the candidate.
    if let Some(zip) = &filter.zip_code {
        let selected_hit = filter
            .selected_zip_code
            .as_deref()
            .is_some_and(|selected| candidate.zip_code == selected);
        if candidate.zip_code != *zip && !selected_hit {
            return false;
        }
    }

    if let Some(band) = filter.distance {
        if !in_distance_band(candidate.distance_to_center, band) {
            return false;
        }
    }

    if let Some(band) = filter.improvement {
        if !band.contains(candidate.score_improvement) {
            return false;
        }
    }

    if let Some(zone) = filter.bucket {
        if candidate.bucket_zone != zone {
            return false;
        }
    }

    true
}

/// Compare two candidates on a single sort key
///
/// Strings compare case-insensitively; engagement level compares by rank
/// (High > Medium > Low), never lexically.
fn compare_by_key(a: &EnhancedCandidate, b: &EnhancedCandidate, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::OriginalScore => a
            .original_score
            .partial_cmp(&b.original_score)
            .unwrap_or(Ordering::Equal),
        SortKey::EnhancedScore => a
            .enhanced_score
            .partial_cmp(&b.enhanced_score)
            .unwrap_or(Ordering::Equal),
        SortKey::ZipCode => a.zip_code.to_lowercase().cmp(&b.zip_code.to_lowercase()),
        SortKey::EngagementLevel => a.engagement_level.rank().cmp(&b.engagement_level.rank()),
    }
}

/// Filter and order a candidate collection
///
/// Returns a new sequence; the input is never mutated. The sort is stable,
/// so ties keep their relative input order.
pub fn query(
    candidates: &[EnhancedCandidate],
    filter: &CandidateFilter,
    sort_key: SortKey,
    direction: SortDirection,
) -> Vec<EnhancedCandidate> {
    let mut selected: Vec<EnhancedCandidate> = candidates
        .iter()
        .filter(|c| matches_filter(c, filter))
        .cloned()
        .collect();

    selected.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, sort_key);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    selected
}
