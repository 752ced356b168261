//! Configuration for dataset loading.

use serde::{Deserialize, Serialize};

/// Where the three tabular sources live and how to fetch them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Fields table location
    pub fields_url: String,
    /// Standards table location
    pub standards_url: String,
    /// Standard-components table location
    pub components_url: String,
    /// Per-request timeout (seconds)
    pub request_timeout_secs: u64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            fields_url: "data/fields-data.csv".to_string(),
            standards_url: "data/standards-data.csv".to_string(),
            components_url: "data/standard-components-data.csv".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl DatasetConfig {
    /// Create a config with all three sources under a common base URL,
    /// keeping the default file names.
    pub fn under_base(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            fields_url: format!("{}/data/fields-data.csv", base),
            standards_url: format!("{}/data/standards-data.csv", base),
            components_url: format!("{}/data/standard-components-data.csv", base),
            ..Default::default()
        }
    }

    /// Load config from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
