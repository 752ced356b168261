//! Pure compliance evaluation.
//!
//! Maps a (field, component-name) pair onto the compliance lattice and rolls
//! sequences of states up into a single verdict. Every function here is
//! total: any raw value, including garbage, lands on exactly one state.

use crate::types::{AttributeValue, ComplianceState, Field, StandardComponent};

/// Evaluate one field against one standard component.
///
/// - boolean `true` or the literal string `"TRUE"` → [`ComplianceState::Full`]
/// - boolean `false` or the literal string `"FALSE"` → [`ComplianceState::None`]
/// - absent, null, or empty string → [`ComplianceState::Unknown`]
/// - any other non-empty string → [`ComplianceState::Partial`]
pub fn field_compliance(field: &Field, component_name: &str) -> ComplianceState {
    match field.attribute(component_name) {
        Some(AttributeValue::Bool(true)) => ComplianceState::Full,
        Some(AttributeValue::Bool(false)) => ComplianceState::None,
        Some(AttributeValue::Null) | None => ComplianceState::Unknown,
        Some(AttributeValue::Text(text)) => match text.as_str() {
            "TRUE" => ComplianceState::Full,
            "FALSE" => ComplianceState::None,
            "" => ComplianceState::Unknown,
            _ => ComplianceState::Partial,
        },
    }
}

/// The raw value as display text, only in the partial case.
///
/// Free-form strings like "limited support" surface nuance without changing
/// the coarse state; booleans, `TRUE`/`FALSE`, empty, and absent values
/// yield nothing.
pub fn compliance_annotation<'a>(field: &'a Field, component_name: &str) -> Option<&'a str> {
    match field.attribute(component_name) {
        Some(AttributeValue::Text(text)) if !matches!(text.as_str(), "" | "TRUE" | "FALSE") => {
            Some(text.as_str())
        }
        _ => None,
    }
}

/// Roll a sequence of states up into one, order-independently.
///
/// All full → full; all none → none; all unknown → unknown; any mix →
/// partial. The empty sequence rolls up to unknown: with nothing evaluated
/// there is no data, and the all-X rules are vacuous.
pub fn aggregate(states: &[ComplianceState]) -> ComplianceState {
    if states.is_empty() {
        return ComplianceState::Unknown;
    }
    if states.iter().all(|s| *s == ComplianceState::Full) {
        return ComplianceState::Full;
    }
    if states.iter().all(|s| *s == ComplianceState::None) {
        return ComplianceState::None;
    }
    if states.iter().all(|s| *s == ComplianceState::Unknown) {
        return ComplianceState::Unknown;
    }
    ComplianceState::Partial
}

/// Roll up one field's compliance across a standard's components.
pub fn standard_compliance(field: &Field, components: &[&StandardComponent]) -> ComplianceState {
    let states: Vec<ComplianceState> = components
        .iter()
        .map(|component| field_compliance(field, &component.standard_component))
        .collect();
    aggregate(&states)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ComplianceState::{Full, None as NoneState, Partial, Unknown};

    fn sample_field() -> Field {
        Field::new("Add contacts modal search", "Add contacts modal")
            .with_attribute("Case-insensitive searching", true)
            .with_attribute("Supports exact phrase searching", false)
            .with_attribute("Boolean operators (AND, OR, NOT)", "partial support")
            .with_attribute("Second search 1", "TRUE")
            .with_attribute("Second search 2", "FALSE")
            .with_attribute("Third search 1", "")
            .with_attribute("Range searching", AttributeValue::Null)
    }

    #[test]
    fn test_field_compliance_is_total() {
        let field = sample_field();

        assert_eq!(field_compliance(&field, "Case-insensitive searching"), Full);
        assert_eq!(field_compliance(&field, "Second search 1"), Full);
        assert_eq!(
            field_compliance(&field, "Supports exact phrase searching"),
            NoneState
        );
        assert_eq!(field_compliance(&field, "Second search 2"), NoneState);
        assert_eq!(
            field_compliance(&field, "Boolean operators (AND, OR, NOT)"),
            Partial
        );
        assert_eq!(field_compliance(&field, "Third search 1"), Unknown);
        assert_eq!(field_compliance(&field, "Range searching"), Unknown);
        assert_eq!(field_compliance(&field, "never recorded"), Unknown);
    }

    #[test]
    fn test_annotation_only_for_free_form_text() {
        let field = sample_field();

        assert_eq!(
            compliance_annotation(&field, "Boolean operators (AND, OR, NOT)"),
            Some("partial support")
        );
        assert_eq!(compliance_annotation(&field, "Case-insensitive searching"), None);
        assert_eq!(compliance_annotation(&field, "Second search 1"), None);
        assert_eq!(compliance_annotation(&field, "Second search 2"), None);
        assert_eq!(compliance_annotation(&field, "Third search 1"), None);
        assert_eq!(compliance_annotation(&field, "Range searching"), None);
        assert_eq!(compliance_annotation(&field, "never recorded"), None);
    }

    #[test]
    fn test_aggregate_uniform_inputs() {
        assert_eq!(aggregate(&[Full, Full, Full]), Full);
        assert_eq!(aggregate(&[NoneState, NoneState]), NoneState);
        assert_eq!(aggregate(&[Unknown, Unknown]), Unknown);
    }

    #[test]
    fn test_aggregate_mixed_degrades_to_partial() {
        assert_eq!(aggregate(&[Full, NoneState]), Partial);
        assert_eq!(aggregate(&[Full, Unknown]), Partial);
        assert_eq!(aggregate(&[NoneState, Unknown]), Partial);
        assert_eq!(aggregate(&[Partial]), Partial);
        // Order-independent
        assert_eq!(aggregate(&[Unknown, Full]), aggregate(&[Full, Unknown]));
    }

    #[test]
    fn test_aggregate_empty_is_unknown() {
        assert_eq!(aggregate(&[]), Unknown);
    }

    #[test]
    fn test_standard_rollup_scenario() {
        // The "Basic Search Behavior" scenario: {full, unknown, partial} → partial.
        let field = Field::new("Title Search", "Inventory")
            .with_attribute("Case-insensitive searching", true)
            .with_attribute("Boolean operators (AND, OR, NOT)", "partial support");

        let components = [
            StandardComponent::new(
                "Case-insensitive searching",
                "Basic Search Behavior",
                "Search should not be case-sensitive by default",
            ),
            StandardComponent::new(
                "Range searching",
                "Basic Search Behavior",
                "Ability to search within specified ranges",
            ),
            StandardComponent::new(
                "Boolean operators (AND, OR, NOT)",
                "Basic Search Behavior",
                "Support for boolean logic in search queries",
            ),
        ];
        let refs: Vec<&StandardComponent> = components.iter().collect();

        let states: Vec<ComplianceState> = refs
            .iter()
            .map(|c| field_compliance(&field, &c.standard_component))
            .collect();
        assert_eq!(states, vec![Full, Unknown, Partial]);
        assert_eq!(standard_compliance(&field, &refs), Partial);
    }
}
