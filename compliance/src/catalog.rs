//! The standards↔components join.
//!
//! Components reference their standard by name; the catalog groups them in
//! first-encounter file order and resolves each group to its standard
//! record. Components whose standard has no record are skipped (logged, not
//! an error). The catalog stores indices into the loaded tables, never
//! clones of the rows, so the loader stays the sole owner of the data.

use std::collections::HashMap;

use crate::types::{Standard, StandardComponent};

/// One standard with its components, both as indices into the loaded tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardGroup {
    /// Index into the standards table
    pub standard: usize,
    /// Indices into the components table, in file order
    pub components: Vec<usize>,
}

/// Grouped, resolved view over the standards and components tables.
#[derive(Debug, Clone, Default)]
pub struct StandardsCatalog {
    groups: Vec<StandardGroup>,
    group_by_standard: HashMap<String, usize>,
    parent_by_component: HashMap<String, String>,
}

impl StandardsCatalog {
    /// Build the catalog from the loaded tables.
    ///
    /// Group order follows the components file: a standard appears when its
    /// first component does. Standards with no components are not grouped
    /// (there is nothing to evaluate against them).
    pub fn new(standards: &[Standard], components: &[StandardComponent]) -> Self {
        let mut groups: Vec<StandardGroup> = Vec::new();
        let mut group_by_standard: HashMap<String, usize> = HashMap::new();
        let mut parent_by_component: HashMap<String, String> = HashMap::new();

        for (component_index, component) in components.iter().enumerate() {
            parent_by_component
                .entry(component.standard_component.clone())
                .or_insert_with(|| component.standard_name.clone());

            match group_by_standard.get(&component.standard_name) {
                Some(&group_index) => {
                    groups[group_index].components.push(component_index);
                }
                None => {
                    let Some(standard_index) = standards
                        .iter()
                        .position(|s| s.standard_name == component.standard_name)
                    else {
                        tracing::debug!(
                            standard = %component.standard_name,
                            component = %component.standard_component,
                            "Skipping component group with no standard record"
                        );
                        continue;
                    };

                    group_by_standard.insert(component.standard_name.clone(), groups.len());
                    groups.push(StandardGroup {
                        standard: standard_index,
                        components: vec![component_index],
                    });
                }
            }
        }

        Self {
            groups,
            group_by_standard,
            parent_by_component,
        }
    }

    /// All resolved groups, in first-encounter order.
    pub fn groups(&self) -> &[StandardGroup] {
        &self.groups
    }

    /// Component indices belonging to the named standard, in file order.
    ///
    /// Empty for unknown standards and for standards with no components.
    pub fn components_of(&self, standard_name: &str) -> &[usize] {
        self.group_by_standard
            .get(standard_name)
            .map(|&group_index| self.groups[group_index].components.as_slice())
            .unwrap_or(&[])
    }

    /// The name of the standard a component belongs to, if the component is
    /// known at all (its standard record may still be missing).
    pub fn component_standard(&self, component_name: &str) -> Option<&str> {
        self.parent_by_component
            .get(component_name)
            .map(String::as_str)
    }
}
