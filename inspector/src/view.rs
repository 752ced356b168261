//! Serializable view models for the external renderer.
//!
//! The render boundary is data-only: the renderer receives these structs
//! (or their TypeScript exports) and owns all templating, tooltip wiring,
//! and widget concerns. Indicator symbols and style classes are provided
//! here as plain mappings so the renderer does not re-encode the lattice.

use compliance::{
    compliance_annotation, field_compliance, standard_compliance, ComplianceState, Field,
    Standard, StandardComponent, StandardsCatalog,
};
use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Prompt shown while no field is selected.
pub const FIELD_PLACEHOLDER: &str = "Select a field to view its search behavior analysis";

/// Prompt shown while no standard is selected.
pub const STANDARD_PLACEHOLDER: &str = "Select a standard to view compliance data";

/// Placeholder row text for a fully filtered-out compliance table.
pub const NO_MATCHES_MESSAGE: &str = "No fields match the current filters";

/// Indicator glyph for a compliance state.
pub fn indicator_symbol(state: ComplianceState) -> &'static str {
    match state {
        ComplianceState::Full => "✓",
        ComplianceState::Partial => "–",
        ComplianceState::None => "✗",
        ComplianceState::Unknown => "?",
    }
}

/// Style class for a compliance state.
pub fn indicator_class(state: ComplianceState) -> &'static str {
    match state {
        ComplianceState::Full => "compliance-full",
        ComplianceState::Partial => "compliance-partial",
        ComplianceState::None => "compliance-none",
        ComplianceState::Unknown => "compliance-unknown",
    }
}

/// One component line in the field detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ComponentLine {
    /// Component name
    pub name: String,
    /// Definition, surfaced as tooltip text
    pub definition: String,
    /// The field's state for this component
    pub state: ComplianceState,
    /// Free-form nuance, only in the partial case
    pub annotation: Option<String>,
}

/// One standard with its component lines and the field's rollup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct StandardSection {
    pub standard_name: String,
    pub definition: String,
    pub wiki_link: Option<String>,
    pub issue_link: Option<String>,
    /// Rollup of the field across this standard's components
    pub rollup: ComplianceState,
    pub components: Vec<ComponentLine>,
}

/// Everything the renderer needs for the field inspector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct FieldDetailView {
    pub field_name: String,
    pub module: String,
    pub snapshot_link: Option<String>,
    pub screenshot: Option<String>,
    /// Standard sections in catalog (file) order
    pub sections: Vec<StandardSection>,
}

impl FieldDetailView {
    /// Build the detail view for one field against the whole catalog.
    ///
    /// Groups whose standard record is missing were already dropped by the
    /// catalog; they simply do not appear.
    pub fn build(
        field: &Field,
        standards: &[Standard],
        components: &[StandardComponent],
        catalog: &StandardsCatalog,
    ) -> Self {
        let sections = catalog
            .groups()
            .iter()
            .map(|group| {
                let standard = &standards[group.standard];
                let group_components: Vec<&StandardComponent> = group
                    .components
                    .iter()
                    .map(|&index| &components[index])
                    .collect();

                let lines = group_components
                    .iter()
                    .map(|component| ComponentLine {
                        name: component.standard_component.clone(),
                        definition: component.definition.clone(),
                        state: field_compliance(field, &component.standard_component),
                        annotation: compliance_annotation(field, &component.standard_component)
                            .map(str::to_string),
                    })
                    .collect();

                StandardSection {
                    standard_name: standard.standard_name.clone(),
                    definition: standard.standard_definition.clone(),
                    wiki_link: standard.wiki_link.clone(),
                    issue_link: standard.issue_link.clone(),
                    rollup: standard_compliance(field, &group_components),
                    components: lines,
                }
            })
            .collect();

        Self {
            field_name: field.field_name.clone(),
            module: field.module.clone(),
            snapshot_link: field.snapshot_link.clone(),
            screenshot: field.screenshot.clone(),
            sections,
        }
    }
}

/// One column header of the compliance table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ComponentColumn {
    pub name: String,
    /// Definition, surfaced as tooltip text
    pub definition: String,
}

/// One cell of the compliance table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ComplianceCell {
    pub state: ComplianceState,
    pub annotation: Option<String>,
}

/// One row of the compliance table: a field against every component of the
/// selected standard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ComplianceRow {
    pub field_name: String,
    pub module: String,
    /// Rollup across the row's cells
    pub overall: ComplianceState,
    pub cells: Vec<ComplianceCell>,
}

/// Everything the renderer needs for the standard inspector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ComplianceTableView {
    pub standard_name: String,
    pub definition: String,
    pub wiki_link: Option<String>,
    pub issue_link: Option<String>,
    /// Column headers in component file order
    pub columns: Vec<ComponentColumn>,
    /// Rows passing the active filters, sorted by field name
    pub rows: Vec<ComplianceRow>,
}

impl ComplianceTableView {
    /// Whether the renderer should show the no-matches placeholder row.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The placeholder row text.
    pub fn no_matches_message() -> &'static str {
        NO_MATCHES_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_mappings() {
        assert_eq!(indicator_symbol(ComplianceState::Full), "✓");
        assert_eq!(indicator_symbol(ComplianceState::Partial), "–");
        assert_eq!(indicator_symbol(ComplianceState::None), "✗");
        assert_eq!(indicator_symbol(ComplianceState::Unknown), "?");
        assert_eq!(indicator_class(ComplianceState::Full), "compliance-full");
        assert_eq!(indicator_class(ComplianceState::Unknown), "compliance-unknown");
    }

    #[test]
    fn test_field_detail_sections_follow_catalog_order() {
        let standards = vec![
            Standard::new("Alpha", "first"),
            Standard::new("Beta", "second"),
        ];
        // Beta's component appears first in the file, so Beta groups first
        let components = vec![
            StandardComponent::new("b1", "Beta", "beta one"),
            StandardComponent::new("a1", "Alpha", "alpha one"),
            StandardComponent::new("b2", "Beta", "beta two"),
        ];
        let catalog = StandardsCatalog::new(&standards, &components);
        let field = Field::new("F", "M")
            .with_attribute("b1", true)
            .with_attribute("b2", true)
            .with_attribute("a1", "partially there");

        let view = FieldDetailView::build(&field, &standards, &components, &catalog);

        assert_eq!(view.sections.len(), 2);
        assert_eq!(view.sections[0].standard_name, "Beta");
        assert_eq!(view.sections[0].rollup, ComplianceState::Full);
        assert_eq!(view.sections[0].components.len(), 2);
        assert_eq!(view.sections[1].standard_name, "Alpha");
        assert_eq!(view.sections[1].rollup, ComplianceState::Partial);
        assert_eq!(
            view.sections[1].components[0].annotation.as_deref(),
            Some("partially there")
        );
    }

    #[test]
    fn test_view_serializes_states_lowercase() {
        let cell = ComplianceCell {
            state: ComplianceState::Partial,
            annotation: Some("limited support".to_string()),
        };
        let json = serde_json::to_value(&cell).unwrap();
        assert_eq!(json["state"], "partial");
        assert_eq!(json["annotation"], "limited support");
    }
}
