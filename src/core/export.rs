use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{BucketZone, EngagementLevel, EnhancedCandidate};

/// Errors that can occur while serializing an export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("export is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Exportable candidate field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExportColumn {
    Id,
    Name,
    ZipCode,
    Address,
    OriginalScore,
    DistanceToCenter,
    ProximityBoost,
    EnhancedScore,
    BucketZone,
    EngagementLevel,
    Improvement,
}

impl ExportColumn {
    /// Human-readable header name
    pub fn header(&self) -> &'static str {
        match self {
            ExportColumn::Id => "ID",
            ExportColumn::Name => "Name",
            ExportColumn::ZipCode => "Zip Code",
            ExportColumn::Address => "Address",
            ExportColumn::OriginalScore => "Original Score",
            ExportColumn::DistanceToCenter => "Distance to Center",
            ExportColumn::ProximityBoost => "Proximity Boost",
            ExportColumn::EnhancedScore => "Enhanced Score",
            ExportColumn::BucketZone => "Bucket Zone",
            ExportColumn::EngagementLevel => "Engagement Level",
            ExportColumn::Improvement => "Improvement",
        }
    }

    /// Render one field; numerics use fixed one-decimal precision and the
    /// improvement delta carries an explicit sign
    fn render(&self, candidate: &EnhancedCandidate) -> String {
        match self {
            ExportColumn::Id => candidate.id.clone(),
            ExportColumn::Name => candidate.name.clone(),
            ExportColumn::ZipCode => candidate.zip_code.clone(),
            ExportColumn::Address => candidate.address.clone(),
            ExportColumn::OriginalScore => format!("{:.1}", candidate.original_score),
            ExportColumn::DistanceToCenter => format!("{:.1}", candidate.distance_to_center),
            ExportColumn::ProximityBoost => format!("{:.1}", candidate.proximity_boost),
            ExportColumn::EnhancedScore => format!("{:.1}", candidate.enhanced_score),
            ExportColumn::BucketZone => match candidate.bucket_zone {
                BucketZone::High => "high".to_string(),
                BucketZone::Medium => "medium".to_string(),
                BucketZone::Low => "low".to_string(),
            },
            ExportColumn::EngagementLevel => match candidate.engagement_level {
                EngagementLevel::High => "High".to_string(),
                EngagementLevel::Medium => "Medium".to_string(),
                EngagementLevel::Low => "Low".to_string(),
            },
            ExportColumn::Improvement => format!("{:+.1}", candidate.score_improvement),
        }
    }
}

/// Column set used by the candidate-list export
pub fn default_columns() -> Vec<ExportColumn> {
    vec![
        ExportColumn::Name,
        ExportColumn::ZipCode,
        ExportColumn::Address,
        ExportColumn::OriginalScore,
        ExportColumn::EnhancedScore,
        ExportColumn::EngagementLevel,
        ExportColumn::Improvement,
    ]
}

/// Serialize a candidate collection to comma-delimited text
///
/// First row is the header; fields containing delimiters, quotes, or
/// newlines are quoted per standard CSV escaping.
pub fn to_csv(
    candidates: &[EnhancedCandidate],
    columns: &[ExportColumn],
) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(columns.iter().map(|c| c.header()))?;
    for candidate in candidates {
        writer.write_record(columns.iter().map(|c| c.render(candidate)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.into_error().into()))?;
    Ok(String::from_utf8(bytes)?)
}
