// Service exports
pub mod dataset;

pub use dataset::{Catalog, DatasetError, RawDataset};
