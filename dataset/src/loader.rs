//! All-or-nothing dataset loading with fixture fallback.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use compliance::{AttributeValue, Field, Standard, StandardComponent};

use crate::config::DatasetConfig;
use crate::fetch::{FetchError, TableFetcher};
use crate::fixture;
use crate::table::{component_from_row, field_from_row, parse_table, standard_from_row, TableError};

/// Error types for a load attempt. Never escapes [`DatasetLoader::load`];
/// any variant triggers the fixture fallback.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A source could not be fetched
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// A source arrived but was not a table
    #[error("Table parse failed: {0}")]
    Table(#[from] TableError),
}

/// Where the loaded tables came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetOrigin {
    /// All three live sources arrived and parsed
    Remote,
    /// At least one source failed; the embedded fixture is in effect
    Fixture,
}

/// The three loaded tables. Immutable for the session once loaded.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Fields table, in file order
    pub fields: Vec<Field>,
    /// Standards table, in file order
    pub standards: Vec<Standard>,
    /// Components table, in file order
    pub components: Vec<StandardComponent>,
    /// Source of the tables
    pub origin: DatasetOrigin,
    /// Deterministic hash over the table contents
    pub content_hash: String,
    /// When the load completed
    pub loaded_at: DateTime<Utc>,
}

impl Dataset {
    fn assemble(
        fields: Vec<Field>,
        standards: Vec<Standard>,
        components: Vec<StandardComponent>,
        origin: DatasetOrigin,
    ) -> Self {
        let content_hash = content_hash(&fields, &standards, &components);
        Self {
            fields,
            standards,
            components,
            origin,
            content_hash,
            loaded_at: Utc::now(),
        }
    }

    /// Build the fixture dataset directly, without a load attempt.
    pub fn fixture() -> Self {
        Self::assemble(
            fixture::fields(),
            fixture::standards(),
            fixture::components(),
            DatasetOrigin::Fixture,
        )
    }
}

/// Loads the three tables through a [`TableFetcher`].
pub struct DatasetLoader {
    config: DatasetConfig,
}

impl DatasetLoader {
    /// Create a loader for the configured sources.
    pub fn new(config: DatasetConfig) -> Self {
        Self { config }
    }

    /// Load all three tables, falling back to the fixture dataset.
    ///
    /// The three fetches run concurrently and the result is all-or-nothing:
    /// a failure on any source discards whatever else arrived. A second call
    /// replaces, never merges. Source failure is logged, not surfaced.
    pub async fn load(&self, fetcher: &dyn TableFetcher) -> Dataset {
        match self.try_load(fetcher).await {
            Ok(dataset) => {
                info!(
                    fields = dataset.fields.len(),
                    standards = dataset.standards.len(),
                    components = dataset.components.len(),
                    "Loaded dataset from live sources"
                );
                dataset
            }
            Err(error) => {
                warn!(%error, "Live sources unavailable, loading fixture dataset");
                Dataset::fixture()
            }
        }
    }

    async fn try_load(&self, fetcher: &dyn TableFetcher) -> Result<Dataset, LoadError> {
        let (fields_text, standards_text, components_text) = tokio::try_join!(
            fetcher.fetch(&self.config.fields_url),
            fetcher.fetch(&self.config.standards_url),
            fetcher.fetch(&self.config.components_url),
        )?;

        let fields = parse_table(&fields_text)?.iter().map(field_from_row).collect();
        let standards = parse_table(&standards_text)?
            .iter()
            .map(standard_from_row)
            .collect();
        let components = parse_table(&components_text)?
            .iter()
            .map(component_from_row)
            .collect();

        Ok(Dataset::assemble(
            fields,
            standards,
            components,
            DatasetOrigin::Remote,
        ))
    }
}

/// Deterministic hash over the three tables.
///
/// Attribute maps are hashed in sorted key order so the hash is stable for
/// equal content regardless of map iteration order. Session state stores
/// this hash; a mismatch on restore marks stored selections as stale.
pub fn content_hash(
    fields: &[Field],
    standards: &[Standard],
    components: &[StandardComponent],
) -> String {
    let mut hasher = Sha256::new();

    for field in fields {
        hash_str(&mut hasher, &field.field_name);
        hash_str(&mut hasher, &field.module);
        hash_opt(&mut hasher, field.snapshot_link.as_deref());
        hash_opt(&mut hasher, field.screenshot.as_deref());

        let mut attributes: Vec<_> = field.attributes.iter().collect();
        attributes.sort_by(|a, b| a.0.cmp(b.0));
        for (name, value) in attributes {
            hash_str(&mut hasher, name);
            match value {
                AttributeValue::Null => hasher.update(b"#n"),
                AttributeValue::Bool(true) => hasher.update(b"#t"),
                AttributeValue::Bool(false) => hasher.update(b"#f"),
                AttributeValue::Text(text) => {
                    hasher.update(b"#s");
                    hash_str(&mut hasher, text);
                }
            }
        }
        hasher.update(b"\x1e");
    }

    for standard in standards {
        hash_str(&mut hasher, &standard.standard_name);
        hash_str(&mut hasher, &standard.standard_definition);
        hash_opt(&mut hasher, standard.wiki_link.as_deref());
        hash_opt(&mut hasher, standard.issue_link.as_deref());
        hasher.update(b"\x1e");
    }

    for component in components {
        hash_str(&mut hasher, &component.standard_component);
        hash_str(&mut hasher, &component.standard_name);
        hash_str(&mut hasher, &component.definition);
        hasher.update(b"\x1e");
    }

    hex::encode(hasher.finalize())
}

fn hash_str(hasher: &mut Sha256, value: &str) {
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}

fn hash_opt(hasher: &mut Sha256, value: Option<&str>) {
    match value {
        Some(value) => {
            hasher.update(b"\x01");
            hash_str(hasher, value);
        }
        None => hasher.update(b"\x00"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::StaticTableFetcher;

    const FIELDS_CSV: &str = "fieldName,module,snapshotLink,screenshot,Star wildcard\n\
                              Item Barcode,Circulation log,,,TRUE\n\
                              User Search,Users,,,limited support\n";
    const STANDARDS_CSV: &str = "standardName,standardDefinition,wikiLink,jiraLink\n\
                                 Wildcard Searching,Wildcards everywhere,,\n";
    const COMPONENTS_CSV: &str = "standardComponent,standardName,definition\n\
                                  Star wildcard,Wildcard Searching,star\n";

    fn fetcher_with_all() -> StaticTableFetcher {
        let config = DatasetConfig::default();
        StaticTableFetcher::new()
            .with_response(config.fields_url, FIELDS_CSV)
            .with_response(config.standards_url, STANDARDS_CSV)
            .with_response(config.components_url, COMPONENTS_CSV)
    }

    #[tokio::test]
    async fn test_load_from_live_sources() {
        let loader = DatasetLoader::new(DatasetConfig::default());
        let dataset = loader.load(&fetcher_with_all()).await;

        assert_eq!(dataset.origin, DatasetOrigin::Remote);
        assert_eq!(dataset.fields.len(), 2);
        assert_eq!(dataset.standards.len(), 1);
        assert_eq!(dataset.components.len(), 1);
        assert_eq!(dataset.fields[0].field_name, "Item Barcode");
    }

    #[tokio::test]
    async fn test_any_missing_source_falls_back_whole() {
        let config = DatasetConfig::default();
        let fetcher = StaticTableFetcher::new()
            .with_response(config.fields_url.clone(), FIELDS_CSV)
            .with_response(config.standards_url.clone(), STANDARDS_CSV);
        // components_url unset: partial arrival must not be applied

        let dataset = DatasetLoader::new(config).load(&fetcher).await;
        assert_eq!(dataset.origin, DatasetOrigin::Fixture);
        assert_eq!(dataset.fields.len(), fixture::fields().len());
        assert_eq!(dataset.standards.len(), fixture::standards().len());
        assert_eq!(dataset.components.len(), fixture::components().len());
    }

    #[tokio::test]
    async fn test_unparseable_source_falls_back() {
        let config = DatasetConfig::default();
        let fetcher = fetcher_with_all().with_response(config.standards_url.clone(), "\n\n");

        let dataset = DatasetLoader::new(config).load(&fetcher).await;
        assert_eq!(dataset.origin, DatasetOrigin::Fixture);
    }

    #[tokio::test]
    async fn test_second_load_replaces() {
        let loader = DatasetLoader::new(DatasetConfig::default());
        let first = loader.load(&fetcher_with_all()).await;
        let second = loader.load(&fetcher_with_all()).await;

        assert_eq!(second.fields.len(), first.fields.len());
        assert_eq!(second.content_hash, first.content_hash);
    }

    #[test]
    fn test_content_hash_deterministic_and_sensitive() {
        let fixture_hash = content_hash(
            &fixture::fields(),
            &fixture::standards(),
            &fixture::components(),
        );
        assert_eq!(
            fixture_hash,
            content_hash(
                &fixture::fields(),
                &fixture::standards(),
                &fixture::components(),
            )
        );

        let mut altered = fixture::fields();
        altered[0].module = "Elsewhere".to_string();
        assert_ne!(
            fixture_hash,
            content_hash(&altered, &fixture::standards(), &fixture::components())
        );
    }

    #[test]
    fn test_fixture_dataset_is_marked() {
        let dataset = Dataset::fixture();
        assert_eq!(dataset.origin, DatasetOrigin::Fixture);
        assert!(!dataset.content_hash.is_empty());
    }
}
