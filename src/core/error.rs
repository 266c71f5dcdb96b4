use thiserror::Error;

/// Malformed engine input; surfaced to the caller, never coerced
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("negative distance: {0} miles")]
    NegativeDistance(f64),

    #[error("original score {value} for candidate {candidate_id} is outside the 0-10 range")]
    ScoreOutOfRange { candidate_id: String, value: f64 },

    #[error("candidate {candidate_id} references unknown zip code {zip_code}")]
    UnknownRegion {
        candidate_id: String,
        zip_code: String,
    },
}
