//! Pure picker and table computations.
//!
//! Deterministic functions from the loaded tables and the active filters to
//! ordered lists. No state lives here; the [`Board`](crate::board::Board)
//! owns the filter values and calls in.

use compliance::{
    aggregate, compliance_annotation, field_compliance, ComplianceState, Field, Standard,
    StandardComponent,
};
use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

use crate::view::{ComplianceCell, ComplianceRow};

/// One entry of the field picker.
///
/// Carries the index into the unfiltered fields table so a pick maps back
/// to the row it came from regardless of filtering and sorting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct FieldOption {
    /// Index into the fields table
    pub index: usize,
    /// Display name
    pub field_name: String,
}

/// One entry of the standard picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct StandardOption {
    /// Index into the standards table
    pub index: usize,
    /// Display name
    pub standard_name: String,
}

/// The three AND-combined compliance-table filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct TableFilters {
    /// Case-insensitive substring on field name; empty means no restriction
    pub name_query: String,
    /// Exact module match; empty means no restriction
    pub module: String,
    /// Overall-rollup equality; absent means no restriction
    pub compliance: Option<ComplianceState>,
}

/// Compute the field picker list.
///
/// Module filter is an exact match, the name query a case-insensitive
/// substring; an empty filter means no restriction. Unnamed fields are
/// excluded. Output is sorted ascending by case-insensitive name.
pub fn field_picker(fields: &[Field], module_filter: &str, name_query: &str) -> Vec<FieldOption> {
    let query = name_query.to_lowercase();

    let mut options: Vec<(String, FieldOption)> = fields
        .iter()
        .enumerate()
        .filter(|(_, field)| !field.field_name.is_empty())
        .filter(|(_, field)| module_filter.is_empty() || field.module == module_filter)
        .map(|(index, field)| {
            let lower = field.field_name.to_lowercase();
            (
                lower,
                FieldOption {
                    index,
                    field_name: field.field_name.clone(),
                },
            )
        })
        .filter(|(lower, _)| query.is_empty() || lower.contains(&query))
        .collect();

    options.sort_by(|a, b| a.0.cmp(&b.0));
    options.into_iter().map(|(_, option)| option).collect()
}

/// Compute the standard picker list: every named standard, sorted ascending
/// by case-insensitive name. No filtering.
pub fn standard_picker(standards: &[Standard]) -> Vec<StandardOption> {
    let mut options: Vec<(String, StandardOption)> = standards
        .iter()
        .enumerate()
        .filter(|(_, standard)| !standard.standard_name.is_empty())
        .map(|(index, standard)| {
            (
                standard.standard_name.to_lowercase(),
                StandardOption {
                    index,
                    standard_name: standard.standard_name.clone(),
                },
            )
        })
        .collect();

    options.sort_by(|a, b| a.0.cmp(&b.0));
    options.into_iter().map(|(_, option)| option).collect()
}

/// Distinct non-empty module labels, sorted ascending. Feeds the module
/// dropdowns of both views.
pub fn module_options(fields: &[Field]) -> Vec<String> {
    let mut modules: Vec<String> = fields
        .iter()
        .map(|field| field.module.clone())
        .filter(|module| !module.is_empty())
        .collect();
    modules.sort();
    modules.dedup();
    modules
}

/// Compute the compliance-table rows for one standard's components.
///
/// Fields are sorted as in the picker and unnamed fields excluded. Each row
/// carries per-component cells and the field's overall rollup; the three
/// filters are AND-combined. An empty result means the caller renders the
/// no-matches placeholder instead of an empty body.
pub fn compliance_rows(
    fields: &[Field],
    components: &[&StandardComponent],
    filters: &TableFilters,
) -> Vec<ComplianceRow> {
    let query = filters.name_query.to_lowercase();

    field_picker(fields, "", "")
        .into_iter()
        .filter_map(|option| {
            let field = &fields[option.index];

            let cells: Vec<ComplianceCell> = components
                .iter()
                .map(|component| ComplianceCell {
                    state: field_compliance(field, &component.standard_component),
                    annotation: compliance_annotation(field, &component.standard_component)
                        .map(str::to_string),
                })
                .collect();
            let states: Vec<ComplianceState> = cells.iter().map(|cell| cell.state).collect();
            let overall = aggregate(&states);

            let name_matches =
                query.is_empty() || field.field_name.to_lowercase().contains(&query);
            let module_matches = filters.module.is_empty() || field.module == filters.module;
            let compliance_matches = filters
                .compliance
                .map(|wanted| wanted == overall)
                .unwrap_or(true);

            if !(name_matches && module_matches && compliance_matches) {
                return None;
            }

            Some(ComplianceRow {
                field_name: field.field_name.clone(),
                module: field.module.clone(),
                overall,
                cells,
            })
        })
        .collect()
}
