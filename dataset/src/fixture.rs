//! Embedded fallback dataset.
//!
//! Used when any of the three live sources is unreachable. Structurally
//! identical to the real schema (same join keys), so evaluation and
//! filtering behave the same against fixture rows as against live ones.

use compliance::{AttributeValue, Field, Standard, StandardComponent};

const WILDCARD_STAR: &str = "Wildcards should use * for Multicharacter Searches";
const WILDCARD_QUESTION: &str = "Wildcards should use ? for single character replacement";
const WILDCARD_OTHER: &str = "Wildcards also do this thing";
const PHRASE: &str = "Supports exact phrase searching";
const BOOLEANS: &str = "Boolean operators (AND, OR, NOT)";
const RANGE: &str = "Range searching";
const BASIC_ONE: &str = "Second search 1";
const BASIC_TWO: &str = "Second search 2";
const BASIC_THREE: &str = "Third search 1";
const CASE_INSENSITIVE: &str = "Case-insensitive searching";

/// The fixture fields table.
pub fn fields() -> Vec<Field> {
    vec![
        Field::new("Add contacts modal search", "Add contacts modal")
            .with_screenshot("https://placehold.co/600x300/4C7EA5/FFFFFF?text=Add+Contacts+Modal+Search")
            .with_attribute(WILDCARD_STAR, true)
            .with_attribute(WILDCARD_QUESTION, true)
            .with_attribute(WILDCARD_OTHER, AttributeValue::Null)
            .with_attribute(BASIC_ONE, true)
            .with_attribute(BASIC_TWO, "other text")
            .with_attribute(BASIC_THREE, false)
            .with_attribute(PHRASE, true)
            .with_attribute(CASE_INSENSITIVE, false)
            .with_attribute(BOOLEANS, "partial support")
            .with_attribute(RANGE, AttributeValue::Null),
        Field::new("Item Barcode", "Circulation log")
            .with_snapshot_link("https://folio-snapshot.dev.folio.org/some-page")
            .with_screenshot("https://placehold.co/600x300/5D6883/FFFFFF?text=Item+Barcode+Field")
            .with_attribute(WILDCARD_STAR, false)
            .with_attribute(WILDCARD_QUESTION, true)
            .with_attribute(WILDCARD_OTHER, "partial support")
            .with_attribute(BASIC_ONE, false)
            .with_attribute(BASIC_TWO, true)
            .with_attribute(BASIC_THREE, true)
            .with_attribute(PHRASE, true)
            .with_attribute(CASE_INSENSITIVE, true)
            .with_attribute(BOOLEANS, false)
            .with_attribute(RANGE, "limited support"),
        Field::new("User Search", "Users")
            .with_snapshot_link("https://folio-snapshot.dev.folio.org/users")
            .with_screenshot("https://placehold.co/600x300/FF674C/FFFFFF?text=User+Search+Interface")
            .with_attribute(WILDCARD_STAR, true)
            .with_attribute(WILDCARD_QUESTION, false)
            .with_attribute(WILDCARD_OTHER, true)
            .with_attribute(BASIC_ONE, true)
            .with_attribute(BASIC_TWO, false)
            .with_attribute(BASIC_THREE, "needs improvement")
            .with_attribute(PHRASE, false)
            .with_attribute(CASE_INSENSITIVE, true)
            .with_attribute(BOOLEANS, true)
            .with_attribute(RANGE, false),
        Field::new("Title Search", "Inventory")
            .with_snapshot_link("https://folio-snapshot.dev.folio.org/inventory")
            .with_attribute(WILDCARD_STAR, true)
            .with_attribute(WILDCARD_QUESTION, true)
            .with_attribute(WILDCARD_OTHER, false)
            .with_attribute(BASIC_ONE, "not implemented")
            .with_attribute(BASIC_TWO, true)
            .with_attribute(BASIC_THREE, true)
            .with_attribute(PHRASE, true)
            .with_attribute(CASE_INSENSITIVE, true)
            .with_attribute(BOOLEANS, "full support")
            .with_attribute(RANGE, true),
        Field::new("Author Search", "Inventory")
            .with_snapshot_link("https://folio-snapshot.dev.folio.org/inventory")
            .with_screenshot("https://placehold.co/600x300/EFEFEF/3B3B3B?text=Author+Search+Field")
            .with_attribute(WILDCARD_STAR, false)
            .with_attribute(WILDCARD_QUESTION, false)
            .with_attribute(WILDCARD_OTHER, "under development")
            .with_attribute(BASIC_ONE, true)
            .with_attribute(BASIC_TWO, true)
            .with_attribute(BASIC_THREE, false)
            .with_attribute(PHRASE, true)
            .with_attribute(CASE_INSENSITIVE, false)
            .with_attribute(BOOLEANS, false)
            .with_attribute(RANGE, AttributeValue::Null),
        Field::new("Patron Search", "Check out")
            .with_screenshot("https://dummyimage.com/600x300/4C7EA5/FFFFFF&text=Patron+Search")
            .with_attribute(WILDCARD_STAR, true)
            .with_attribute(WILDCARD_QUESTION, true)
            .with_attribute(WILDCARD_OTHER, true)
            .with_attribute(BASIC_ONE, false)
            .with_attribute(BASIC_TWO, "experimental")
            .with_attribute(BASIC_THREE, true)
            .with_attribute(PHRASE, false)
            .with_attribute(CASE_INSENSITIVE, true)
            .with_attribute(BOOLEANS, AttributeValue::Null)
            .with_attribute(RANGE, false),
    ]
}

/// The fixture standards table.
pub fn standards() -> Vec<Standard> {
    vec![
        Standard::new(
            "Wildcard Searching",
            "Wildcard searching should be standard across all search fields to allow flexible pattern matching",
        )
        .with_wiki_link("https://folio-org.atlassian.net/wiki/spaces/AppInt/pages/4098958/Search+expectations+across+apps")
        .with_issue_link("https://folio-org.atlassian.net/browse/UXPROD-4545"),
        Standard::new(
            "Advanced Search Features",
            "Advanced search capabilities including boolean operators and phrase searching",
        )
        .with_wiki_link("https://folio-org.atlassian.net/wiki/spaces/AppInt/pages/4098958/Search+expectations+across+apps")
        .with_issue_link("https://folio-org.atlassian.net/browse/UXPROD-4546"),
        Standard::new(
            "Basic Search Behavior",
            "Fundamental search behaviors that should be consistent across all modules",
        )
        .with_wiki_link("https://folio-org.atlassian.net/wiki/spaces/AppInt/pages/4098958/Search+expectations+across+apps")
        .with_issue_link("https://folio-org.atlassian.net/browse/UXPROD-4547"),
    ]
}

/// The fixture components table, in file order.
pub fn components() -> Vec<StandardComponent> {
    vec![
        StandardComponent::new(
            WILDCARD_STAR,
            "Wildcard Searching",
            "The asterisk (*) should replace zero or more characters in search terms",
        ),
        StandardComponent::new(
            WILDCARD_QUESTION,
            "Wildcard Searching",
            "The question mark (?) should replace exactly one character in search terms",
        ),
        StandardComponent::new(
            WILDCARD_OTHER,
            "Wildcard Searching",
            "Additional wildcard functionality for advanced pattern matching",
        ),
        StandardComponent::new(
            PHRASE,
            "Advanced Search Features",
            "Users should be able to search for exact phrases using quotation marks",
        ),
        StandardComponent::new(
            BOOLEANS,
            "Advanced Search Features",
            "Support for boolean logic in search queries to combine or exclude terms",
        ),
        StandardComponent::new(
            RANGE,
            "Advanced Search Features",
            "Ability to search within specified ranges (dates, numbers, etc.)",
        ),
        StandardComponent::new(BASIC_ONE, "Basic Search Behavior", "Core search functionality component one"),
        StandardComponent::new(BASIC_TWO, "Basic Search Behavior", "Core search functionality component two"),
        StandardComponent::new(BASIC_THREE, "Basic Search Behavior", "Additional basic search behavior requirement"),
        StandardComponent::new(
            CASE_INSENSITIVE,
            "Basic Search Behavior",
            "Search should not be case-sensitive by default",
        ),
    ]
}
