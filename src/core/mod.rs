// Core engine exports
pub mod enhancer;
pub mod error;
pub mod export;
pub mod proximity;
pub mod query;
pub mod scoring;
pub mod stats;

pub use enhancer::Enhancer;
pub use error::ValidationError;
pub use export::{default_columns, to_csv, ExportColumn, ExportError};
pub use proximity::{classify_distance, in_distance_band};
pub use query::{matches_filter, query};
pub use scoring::{classify_engagement, compute_enhanced_score, density_component};
pub use stats::{summarize, summarize_region};
