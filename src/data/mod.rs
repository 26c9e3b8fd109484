// Dataset loading and dashboard export
pub mod export;
pub mod loader;

// Re-export commonly used types
pub use loader::{Datasets, LoadedDatasets, bundled_datasets, load_datasets};
