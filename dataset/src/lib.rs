//! Dataset acquisition for the Conformance Board.
//!
//! Loads the three tabular sources (fields, standards, standard-components)
//! into row collections with all-or-nothing semantics: either every table
//! arrives and parses, or the loader falls back atomically to the embedded
//! fixture dataset. Partial arrival is never applied.
//!
//! - [`DatasetConfig`]: source locations and fetch settings
//! - [`TableFetcher`]: the transport seam ([`HttpTableFetcher`] for real
//!   sources, [`StaticTableFetcher`] for tests)
//! - [`DatasetLoader`]: concurrent fetch + parse + fallback
//! - [`Dataset`]: the immutable loaded tables, content-hashed
//! - [`fixture`]: the embedded fallback rows
//!
//! # Example
//!
//! ```no_run
//! use dataset::{DatasetConfig, DatasetLoader, HttpTableFetcher};
//!
//! # async fn run() {
//! let config = DatasetConfig::default();
//! let fetcher = HttpTableFetcher::new(&config);
//! let dataset = DatasetLoader::new(config).load(&fetcher).await;
//! println!("{} fields ({:?})", dataset.fields.len(), dataset.origin);
//! # }
//! ```

pub mod config;
pub mod fetch;
pub mod fixture;
pub mod loader;
pub mod table;

// Re-export main types
pub use config::DatasetConfig;
pub use fetch::{FetchError, HttpTableFetcher, StaticTableFetcher, TableFetcher};
pub use loader::{Dataset, DatasetLoader, DatasetOrigin};
pub use table::{parse_table, Row, TableError};
