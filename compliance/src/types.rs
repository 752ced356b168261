//! Entity types for the three loaded tables and the compliance lattice.
//!
//! With the `typescript` feature enabled, these types can be exported to
//! TypeScript using ts-rs for consistency with the browser renderer.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// The four-state compliance lattice.
///
/// Derived, never stored: computed live from a field's raw attribute value
/// for a given component name, or rolled up from other states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum ComplianceState {
    /// Requirement fully met
    Full,
    /// Met with caveats (carries a free-form annotation)
    Partial,
    /// Requirement not met
    None,
    /// No data recorded
    Unknown,
}

impl ComplianceState {
    /// String form used in filter dropdowns and row metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Partial => "partial",
            Self::None => "none",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a dropdown value back into a state.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "full" => Some(Self::Full),
            "partial" => Some(Self::Partial),
            "none" => Some(Self::None),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    /// All states, in display order.
    pub fn all() -> [Self; 4] {
        [Self::Full, Self::Partial, Self::None, Self::Unknown]
    }
}

/// A raw attribute value as it appears in a field row.
///
/// The value domain is {boolean, null, empty string, arbitrary string};
/// absence of the map entry is the fourth case and is handled at lookup
/// sites. Untagged so fixture and session JSON keep real booleans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Explicit null cell
    Null,
    /// Typed boolean cell
    Bool(bool),
    /// Anything textual, including the literal "TRUE"/"FALSE" and ""
    Text(String),
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A searchable field: one row of the fields table.
///
/// The open-ended mapping from standard-component name to raw value is
/// flattened, so the wire shape matches the source rows where component
/// names are columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Display name; unique in practice but not enforced by the loader
    #[serde(default)]
    pub field_name: String,
    /// Module/category label the field belongs to
    #[serde(default)]
    pub module: String,
    /// Link to a live environment showing the field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_link: Option<String>,
    /// Screenshot URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
    /// Raw value per standard-component name
    #[serde(flatten)]
    #[cfg_attr(feature = "typescript", ts(type = "Record<string, boolean | string | null>"))]
    pub attributes: HashMap<String, AttributeValue>,
}

impl Field {
    /// Create a named field with no recorded attributes.
    pub fn new(field_name: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            module: module.into(),
            ..Default::default()
        }
    }

    /// Builder: record a raw attribute value.
    pub fn with_attribute(
        mut self,
        component: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.insert(component.into(), value.into());
        self
    }

    /// Builder: set the snapshot link.
    pub fn with_snapshot_link(mut self, link: impl Into<String>) -> Self {
        self.snapshot_link = Some(link.into());
        self
    }

    /// Builder: set the screenshot URL.
    pub fn with_screenshot(mut self, url: impl Into<String>) -> Self {
        self.screenshot = Some(url.into());
        self
    }

    /// Look up the raw value recorded for a component, if any.
    pub fn attribute(&self, component_name: &str) -> Option<&AttributeValue> {
        self.attributes.get(component_name)
    }
}

/// A named policy: one row of the standards table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Standard {
    /// Join key to components; must be non-empty to be selectable
    #[serde(default)]
    pub standard_name: String,
    /// Human-readable definition
    #[serde(default)]
    pub standard_definition: String,
    /// Reference wiki page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wiki_link: Option<String>,
    /// Issue tracker link (wire name kept from the source schema)
    #[serde(default, rename = "jiraLink", skip_serializing_if = "Option::is_none")]
    pub issue_link: Option<String>,
}

impl Standard {
    /// Create a named standard.
    pub fn new(standard_name: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            standard_name: standard_name.into(),
            standard_definition: definition.into(),
            ..Default::default()
        }
    }

    /// Builder: set the wiki link.
    pub fn with_wiki_link(mut self, link: impl Into<String>) -> Self {
        self.wiki_link = Some(link.into());
        self
    }

    /// Builder: set the issue tracker link.
    pub fn with_issue_link(mut self, link: impl Into<String>) -> Self {
        self.issue_link = Some(link.into());
        self
    }
}

/// An atomic testable requirement belonging to exactly one standard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct StandardComponent {
    /// Component name; also the attribute key on fields
    #[serde(default)]
    pub standard_component: String,
    /// Name of the owning standard
    #[serde(default)]
    pub standard_name: String,
    /// Human-readable definition, surfaced as tooltip text
    #[serde(default)]
    pub definition: String,
}

impl StandardComponent {
    /// Create a component under the named standard.
    pub fn new(
        standard_component: impl Into<String>,
        standard_name: impl Into<String>,
        definition: impl Into<String>,
    ) -> Self {
        Self {
            standard_component: standard_component.into(),
            standard_name: standard_name.into(),
            definition: definition.into(),
        }
    }
}
