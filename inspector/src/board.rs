//! The application-state object.
//!
//! One [`Board`] owns the loaded dataset, the standards catalog, the current
//! selections and filters, and the session tracker. Every user action is a
//! method here; each mutating action re-captures and persists the session
//! state as its observable side effect. The board never renders — it hands
//! plain view models to the caller.

use std::sync::Arc;

use tracing::debug;

use compliance::{ComplianceState, Field, Standard, StandardsCatalog};
use dataset::Dataset;

use crate::filter::{self, FieldOption, StandardOption, TableFilters};
use crate::session::{SessionState, SessionStore, SessionTracker, ViewId};
use crate::view::{ComplianceTableView, ComponentColumn, FieldDetailView};

/// Application state for one browser session.
///
/// Selections are held as indices into the immutable loaded tables but are
/// exchanged with callers and with session storage by name. Duplicate field
/// names are not rejected by the loader; name lookups resolve to the last
/// matching row.
pub struct Board {
    dataset: Dataset,
    catalog: StandardsCatalog,
    tracker: SessionTracker,
    active_view: ViewId,
    field_selection: Option<usize>,
    standard_selection: Option<usize>,
    module_filter: String,
    field_query: String,
    table_filters: TableFilters,
}

impl Board {
    /// Create a board over a loaded dataset.
    ///
    /// Starts with all-empty defaults; call [`restore_session`] to pick up
    /// where the previous load left off.
    ///
    /// [`restore_session`]: Board::restore_session
    pub fn new(dataset: Dataset, store: Arc<dyn SessionStore>) -> Self {
        let catalog = StandardsCatalog::new(&dataset.standards, &dataset.components);
        Self {
            dataset,
            catalog,
            tracker: SessionTracker::new(store),
            active_view: ViewId::default(),
            field_selection: None,
            standard_selection: None,
            module_filter: String::new(),
            field_query: String::new(),
            table_filters: TableFilters::default(),
        }
    }

    /// The loaded tables.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The currently active inspector.
    pub fn active_view(&self) -> ViewId {
        self.active_view
    }

    /// The selected field row, if any.
    pub fn selected_field(&self) -> Option<&Field> {
        self.field_selection.map(|index| &self.dataset.fields[index])
    }

    /// The selected standard row, if any.
    pub fn selected_standard(&self) -> Option<&Standard> {
        self.standard_selection
            .map(|index| &self.dataset.standards[index])
    }

    /// The field-inspector module filter value.
    pub fn module_filter(&self) -> &str {
        &self.module_filter
    }

    /// The field-inspector name search text.
    pub fn field_query(&self) -> &str {
        &self.field_query
    }

    /// The compliance-table filters.
    pub fn table_filters(&self) -> &TableFilters {
        &self.table_filters
    }

    /// Switch between the two inspectors.
    pub fn switch_view(&mut self, view: ViewId) {
        self.active_view = view;
        self.persist_state();
    }

    /// Select a field by name. Reselecting the current field is idempotent
    /// but still persists. Unknown names leave the selection untouched.
    pub fn select_field(&mut self, name: &str) -> bool {
        let Some(index) = find_field(&self.dataset.fields, name) else {
            debug!(field = %name, "Ignoring selection of unknown field");
            return false;
        };
        self.field_selection = Some(index);
        self.persist_state();
        true
    }

    /// Drop the field selection.
    pub fn clear_field_selection(&mut self) {
        self.field_selection = None;
        self.persist_state();
    }

    /// Select a standard by name. Only named standards are selectable.
    pub fn select_standard(&mut self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        let Some(index) = find_standard(&self.dataset.standards, name) else {
            debug!(standard = %name, "Ignoring selection of unknown standard");
            return false;
        };
        self.standard_selection = Some(index);
        self.persist_state();
        true
    }

    /// Drop the standard selection.
    pub fn clear_standard_selection(&mut self) {
        self.standard_selection = None;
        self.persist_state();
    }

    /// Set the field-inspector module filter.
    pub fn set_module_filter(&mut self, value: impl Into<String>) {
        self.module_filter = value.into();
        self.persist_state();
    }

    /// Set the field-inspector name search text.
    pub fn set_field_query(&mut self, value: impl Into<String>) {
        self.field_query = value.into();
        self.persist_state();
    }

    /// Set the compliance-table name filter.
    pub fn set_table_name_filter(&mut self, value: impl Into<String>) {
        self.table_filters.name_query = value.into();
        self.persist_state();
    }

    /// Set the compliance-table module filter.
    pub fn set_table_module_filter(&mut self, value: impl Into<String>) {
        self.table_filters.module = value.into();
        self.persist_state();
    }

    /// Set the compliance-table rollup filter.
    pub fn set_compliance_filter(&mut self, value: Option<ComplianceState>) {
        self.table_filters.compliance = value;
        self.persist_state();
    }

    /// Clear all three compliance-table filters.
    pub fn reset_table_filters(&mut self) {
        self.table_filters = TableFilters::default();
        self.persist_state();
    }

    /// Reset the field inspector: filters cleared, selection dropped.
    pub fn reset_field_inspector(&mut self) {
        self.module_filter.clear();
        self.field_query.clear();
        self.field_selection = None;
        self.persist_state();
    }

    /// Reset the standard inspector: selection dropped, table filters
    /// cleared.
    pub fn reset_standard_inspector(&mut self) {
        self.standard_selection = None;
        self.table_filters = TableFilters::default();
        self.persist_state();
    }

    /// Jump to the standard inspector with the named standard selected.
    pub fn navigate_to_standard(&mut self, name: &str) -> bool {
        let Some(index) = find_standard(&self.dataset.standards, name) else {
            return false;
        };
        self.active_view = ViewId::StandardInspector;
        self.standard_selection = Some(index);
        self.persist_state();
        true
    }

    /// Jump to the standard owning the named component.
    pub fn navigate_to_component(&mut self, component_name: &str) -> bool {
        let Some(standard_name) = self.catalog.component_standard(component_name) else {
            return false;
        };
        let standard_name = standard_name.to_string();
        self.navigate_to_standard(&standard_name)
    }

    /// Jump to the field inspector with the named field selected.
    pub fn navigate_to_field(&mut self, name: &str) -> bool {
        let Some(index) = find_field(&self.dataset.fields, name) else {
            return false;
        };
        self.active_view = ViewId::FieldInspector;
        self.field_selection = Some(index);
        self.persist_state();
        true
    }

    /// The field picker under the current filters.
    pub fn field_picker(&self) -> Vec<FieldOption> {
        filter::field_picker(&self.dataset.fields, &self.module_filter, &self.field_query)
    }

    /// The standard picker; always the full catalog.
    pub fn standard_picker(&self) -> Vec<StandardOption> {
        filter::standard_picker(&self.dataset.standards)
    }

    /// Module dropdown options for both views.
    pub fn module_options(&self) -> Vec<String> {
        filter::module_options(&self.dataset.fields)
    }

    /// The field-inspector view model, once a field is selected.
    pub fn field_detail(&self) -> Option<FieldDetailView> {
        let field = self.selected_field()?;
        Some(FieldDetailView::build(
            field,
            &self.dataset.standards,
            &self.dataset.components,
            &self.catalog,
        ))
    }

    /// The standard-inspector view model, once a standard is selected.
    ///
    /// An empty `rows` means every field was filtered out; the renderer
    /// shows the placeholder row instead of an empty body.
    pub fn compliance_table(&self) -> Option<ComplianceTableView> {
        let standard = self.selected_standard()?;

        let components: Vec<_> = self
            .catalog
            .components_of(&standard.standard_name)
            .iter()
            .map(|&index| &self.dataset.components[index])
            .collect();

        let columns = components
            .iter()
            .map(|component| ComponentColumn {
                name: component.standard_component.clone(),
                definition: component.definition.clone(),
            })
            .collect();

        let rows = filter::compliance_rows(&self.dataset.fields, &components, &self.table_filters);

        Some(ComplianceTableView {
            standard_name: standard.standard_name.clone(),
            definition: standard.standard_definition.clone(),
            wiki_link: standard.wiki_link.clone(),
            issue_link: standard.issue_link.clone(),
            columns,
            rows,
        })
    }

    /// Snapshot the current navigation state.
    pub fn capture(&self) -> SessionState {
        SessionState {
            active_view: self.active_view,
            field_selection: self
                .selected_field()
                .map(|field| field.field_name.clone()),
            standard_selection: self
                .selected_standard()
                .map(|standard| standard.standard_name.clone()),
            module_filter: self.module_filter.clone(),
            field_query: self.field_query.clone(),
            dataset_hash: self.dataset.content_hash.clone(),
            saved_at: chrono::Utc::now(),
        }
    }

    /// Restore the previous session's state from storage, if present and
    /// still applicable. Returns whether anything was applied.
    pub fn restore_session(&mut self) -> bool {
        match self.tracker.restore() {
            Some(state) => self.apply_restored(state),
            None => false,
        }
    }

    /// Apply a restored snapshot.
    ///
    /// A snapshot taken against a dataset with a different content hash is
    /// ignored wholesale; stored names that no longer resolve degrade to
    /// no-selection. Never faults.
    pub fn apply_restored(&mut self, state: SessionState) -> bool {
        if state.dataset_hash != self.dataset.content_hash {
            debug!("Stored session state refers to different data, starting fresh");
            return false;
        }

        self.active_view = state.active_view;
        self.module_filter = state.module_filter;
        self.field_query = state.field_query;
        self.field_selection = state
            .field_selection
            .as_deref()
            .and_then(|name| find_field(&self.dataset.fields, name));
        self.standard_selection = state
            .standard_selection
            .as_deref()
            .and_then(|name| find_standard(&self.dataset.standards, name));

        self.persist_state();
        true
    }

    fn persist_state(&self) {
        self.tracker.persist(&self.capture());
    }
}

/// Resolve a field name to its row index. Duplicate names resolve to the
/// last matching row.
fn find_field(fields: &[Field], name: &str) -> Option<usize> {
    fields.iter().rposition(|field| field.field_name == name)
}

/// Resolve a standard name to its row index.
fn find_standard(standards: &[Standard], name: &str) -> Option<usize> {
    standards
        .iter()
        .rposition(|standard| standard.standard_name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;
    use crate::view::NO_MATCHES_MESSAGE;

    fn board() -> (Board, Arc<MemorySessionStore>) {
        let store = Arc::new(MemorySessionStore::new());
        (Board::new(Dataset::fixture(), store.clone()), store)
    }

    #[test]
    fn test_starts_with_empty_defaults() {
        let (board, _) = board();
        assert_eq!(board.active_view(), ViewId::FieldInspector);
        assert!(board.selected_field().is_none());
        assert!(board.selected_standard().is_none());
        assert!(board.module_filter().is_empty());
    }

    #[test]
    fn test_select_field_and_detail() {
        let (mut board, _) = board();

        assert!(board.select_field("Item Barcode"));
        let detail = board.field_detail().unwrap();
        assert_eq!(detail.field_name, "Item Barcode");
        assert_eq!(detail.module, "Circulation log");
        // Every fixture standard has components, so every group renders
        assert_eq!(detail.sections.len(), 3);

        let wildcard = &detail.sections[0];
        assert_eq!(wildcard.standard_name, "Wildcard Searching");
        assert_eq!(wildcard.rollup, ComplianceState::Partial);
    }

    #[test]
    fn test_select_unknown_field_is_ignored() {
        let (mut board, _) = board();
        assert!(board.select_field("Item Barcode"));
        assert!(!board.select_field("No Such Field"));
        assert_eq!(
            board.selected_field().unwrap().field_name,
            "Item Barcode"
        );
    }

    #[test]
    fn test_reselecting_is_idempotent() {
        let (mut board, _) = board();
        board.select_field("User Search");
        let first = board.capture();
        board.select_field("User Search");
        let second = board.capture();

        assert_eq!(first.field_selection, second.field_selection);
        assert_eq!(first.active_view, second.active_view);
    }

    #[test]
    fn test_duplicate_field_names_last_wins() {
        let store = Arc::new(MemorySessionStore::new());
        let mut dataset = Dataset::fixture();
        dataset
            .fields
            .push(Field::new("Item Barcode", "Shadowing module"));

        let mut board = Board::new(dataset, store);
        assert!(board.select_field("Item Barcode"));
        assert_eq!(board.selected_field().unwrap().module, "Shadowing module");
    }

    #[test]
    fn test_empty_standard_name_not_selectable() {
        let (mut board, _) = board();
        assert!(!board.select_standard(""));
        assert!(board.selected_standard().is_none());
    }

    #[test]
    fn test_compliance_table_with_filters() {
        let (mut board, _) = board();
        board.select_standard("Wildcard Searching");

        let table = board.compliance_table().unwrap();
        assert_eq!(table.columns.len(), 3);
        assert_eq!(table.rows.len(), 6);
        // Sorted by field name
        assert_eq!(table.rows[0].field_name, "Add contacts modal search");

        // Only Patron Search is fully wildcard-compliant in the fixture
        board.set_compliance_filter(Some(ComplianceState::Full));
        let table = board.compliance_table().unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].field_name, "Patron Search");

        board.set_table_name_filter("zzz");
        let table = board.compliance_table().unwrap();
        assert!(table.is_empty());
        assert_eq!(ComplianceTableView::no_matches_message(), NO_MATCHES_MESSAGE);
    }

    #[test]
    fn test_session_round_trip_across_boards() {
        let store = Arc::new(MemorySessionStore::new());
        let mut first = Board::new(Dataset::fixture(), store.clone());

        first.switch_view(ViewId::StandardInspector);
        first.select_standard("Basic Search Behavior");
        first.set_module_filter("Inventory");
        first.set_field_query("title");
        first.select_field("Title Search");

        let mut second = Board::new(Dataset::fixture(), store);
        assert!(second.restore_session());
        assert_eq!(second.active_view(), ViewId::StandardInspector);
        assert_eq!(
            second.selected_standard().unwrap().standard_name,
            "Basic Search Behavior"
        );
        assert_eq!(
            second.selected_field().unwrap().field_name,
            "Title Search"
        );
        assert_eq!(second.module_filter(), "Inventory");
        assert_eq!(second.field_query(), "title");
    }

    #[test]
    fn test_restore_with_stale_hash_starts_fresh() {
        let (mut board, _) = board();
        let mut state = board.capture();
        state.field_selection = Some("Item Barcode".to_string());
        state.dataset_hash = "something else".to_string();

        assert!(!board.apply_restored(state));
        assert!(board.selected_field().is_none());
    }

    #[test]
    fn test_restore_with_vanished_name_degrades_to_no_selection() {
        let (mut board, _) = board();
        let mut state = board.capture();
        state.field_selection = Some("Renamed Field".to_string());
        state.standard_selection = Some("Wildcard Searching".to_string());

        assert!(board.apply_restored(state));
        assert!(board.selected_field().is_none());
        assert_eq!(
            board.selected_standard().unwrap().standard_name,
            "Wildcard Searching"
        );
    }

    #[test]
    fn test_restore_with_empty_store_keeps_defaults() {
        let (mut board, _) = board();
        assert!(!board.restore_session());
        assert_eq!(board.active_view(), ViewId::FieldInspector);
    }

    #[test]
    fn test_navigation_jumps() {
        let (mut board, _) = board();

        assert!(board.navigate_to_component("Range searching"));
        assert_eq!(board.active_view(), ViewId::StandardInspector);
        assert_eq!(
            board.selected_standard().unwrap().standard_name,
            "Advanced Search Features"
        );

        assert!(board.navigate_to_field("Author Search"));
        assert_eq!(board.active_view(), ViewId::FieldInspector);

        assert!(!board.navigate_to_component("no such component"));
        assert!(!board.navigate_to_standard("no such standard"));
    }

    #[test]
    fn test_resets() {
        let (mut board, _) = board();
        board.set_module_filter("Users");
        board.set_field_query("user");
        board.select_field("User Search");
        board.reset_field_inspector();
        assert!(board.module_filter().is_empty());
        assert!(board.field_query().is_empty());
        assert!(board.selected_field().is_none());

        board.select_standard("Wildcard Searching");
        board.set_table_module_filter("Users");
        board.reset_standard_inspector();
        assert!(board.selected_standard().is_none());
        assert_eq!(board.table_filters(), &TableFilters::default());
    }

    #[test]
    fn test_picker_delegation() {
        let (mut board, _) = board();
        board.set_module_filter("Inventory");

        let names: Vec<String> = board
            .field_picker()
            .into_iter()
            .map(|o| o.field_name)
            .collect();
        assert_eq!(names, vec!["Author Search", "Title Search"]);

        let standards: Vec<String> = board
            .standard_picker()
            .into_iter()
            .map(|o| o.standard_name)
            .collect();
        assert_eq!(
            standards,
            vec![
                "Advanced Search Features",
                "Basic Search Behavior",
                "Wildcard Searching"
            ]
        );

        assert_eq!(
            board.module_options(),
            vec![
                "Add contacts modal",
                "Check out",
                "Circulation log",
                "Inventory",
                "Users"
            ]
        );
    }
}
