use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::core::{Enhancer, ValidationError};
use crate::models::{CandidateRecord, EnhancedCandidate, Region};

/// Errors that can occur while loading the study dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate region {0}")]
    DuplicateRegion(String),

    #[error("region {zip_code}: {field} is {value}, expected 0-10")]
    RegionScoreOutOfRange {
        zip_code: String,
        field: &'static str,
        value: f64,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Dataset document shape as supplied by the data provider
#[derive(Debug, Clone, Deserialize)]
pub struct RawDataset {
    pub regions: Vec<Region>,
    pub candidates: Vec<CandidateRecord>,
}

/// Immutable in-memory catalog of regions and enhanced candidates
///
/// Loaded once at startup; every view the service exposes derives from this
/// collection without mutating it.
#[derive(Debug)]
pub struct Catalog {
    regions: HashMap<String, Region>,
    candidates: Vec<EnhancedCandidate>,
}

impl Catalog {
    /// Load and validate a dataset document, then precompute the enhanced
    /// candidate collection
    pub fn load<P: AsRef<Path>>(path: P, enhancer: &Enhancer) -> Result<Self, DatasetError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text, enhancer)
    }

    /// Build a catalog from an in-memory JSON document
    pub fn from_json(text: &str, enhancer: &Enhancer) -> Result<Self, DatasetError> {
        let raw: RawDataset = serde_json::from_str(text)?;
        Self::from_raw(raw, enhancer)
    }

    pub fn from_raw(raw: RawDataset, enhancer: &Enhancer) -> Result<Self, DatasetError> {
        let mut regions = HashMap::with_capacity(raw.regions.len());
        for region in raw.regions {
            validate_region(&region)?;
            if regions.contains_key(&region.zip_code) {
                return Err(DatasetError::DuplicateRegion(region.zip_code.clone()));
            }
            regions.insert(region.zip_code.clone(), region);
        }

        let candidates = enhancer.enhance_all(&raw.candidates, &regions)?;

        Ok(Self {
            regions,
            candidates,
        })
    }

    /// Look up a region by zip code
    pub fn region(&self, zip_code: &str) -> Option<&Region> {
        self.regions.get(zip_code)
    }

    /// All regions, ordered by zip code for deterministic listings
    pub fn regions_sorted(&self) -> Vec<&Region> {
        let mut list: Vec<&Region> = self.regions.values().collect();
        list.sort_by(|a, b| a.zip_code.cmp(&b.zip_code));
        list
    }

    /// The precomputed enhanced candidate collection, in provider order
    pub fn candidates(&self) -> &[EnhancedCandidate] {
        &self.candidates
    }
}

fn validate_region(region: &Region) -> Result<(), DatasetError> {
    let checks = [
        (
            "communityEngagementScore",
            region.community_engagement_score,
        ),
        ("avgCivicEngagement", region.avg_civic_engagement),
    ];
    for (field, value) in checks {
        if !(0.0..=10.0).contains(&value) {
            return Err(DatasetError::RegionScoreOutOfRange {
                zip_code: region.zip_code.clone(),
                field,
                value,
            });
        }
    }
    Ok(())
}
