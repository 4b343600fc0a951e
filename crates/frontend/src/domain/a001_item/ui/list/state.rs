use contracts::domain::a001_item::aggregate::Item;
use leptos::prelude::*;

use crate::shared::list_utils::sort_list;

/// What the modal form will do when submitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalMode {
    #[default]
    Create,
    Update,
}

/// Snapshot of everything the items screen renders from.
#[derive(Clone, Debug)]
pub struct ItemListState {
    pub items: Vec<Item>,
    pub loading: bool,
    pub is_loaded: bool,
    pub error: Option<String>,
    pub modal_visible: bool,
    pub modal_mode: ModalMode,
    pub current_item: Option<Item>,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ItemListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            is_loaded: false,
            error: None,
            modal_visible: false,
            modal_mode: ModalMode::Create,
            current_item: None,
            sort_field: "name".to_string(),
            sort_ascending: true,
            page: 0,
            page_size: 10,
        }
    }
}

/// Everything that can happen on the items screen. The view layer emits
/// these and [`apply`] folds them into the state, so every transition is
/// observable in a plain unit test.
#[derive(Clone, Debug)]
pub enum ItemListEvent {
    LoadStarted,
    LoadSucceeded(Vec<Item>),
    LoadFailed(String),
    SearchPending(bool),
    SearchResults(Vec<Item>),
    CreateRequested,
    EditRequested(Item),
    ModalClosed,
    SubmitSucceeded,
    DeleteFailed(String),
    SortToggled(&'static str),
    PageChanged(usize),
    PageSizeChanged(usize),
}

/// Fold a single event into the state.
pub fn apply(state: &mut ItemListState, event: ItemListEvent) {
    match event {
        ItemListEvent::LoadStarted => {
            state.loading = true;
            state.error = None;
        }
        ItemListEvent::LoadSucceeded(items) => {
            state.items = items;
            state.loading = false;
            state.is_loaded = true;
            state.page = 0;
        }
        // A failed load keeps the spinner up. The banner is the only
        // signal that the screen is stuck.
        ItemListEvent::LoadFailed(message) => {
            state.error = Some(message);
        }
        ItemListEvent::SearchPending(flag) => {
            state.loading = flag;
        }
        ItemListEvent::SearchResults(items) => {
            state.items = items;
            state.loading = false;
            state.is_loaded = true;
            state.page = 0;
        }
        ItemListEvent::CreateRequested => {
            state.modal_visible = true;
            state.modal_mode = ModalMode::Create;
            state.current_item = None;
        }
        ItemListEvent::EditRequested(item) => {
            state.modal_visible = true;
            state.modal_mode = ModalMode::Update;
            state.current_item = Some(item);
        }
        ItemListEvent::ModalClosed | ItemListEvent::SubmitSucceeded => {
            state.modal_visible = false;
            state.current_item = None;
        }
        ItemListEvent::DeleteFailed(message) => {
            state.error = Some(message);
        }
        ItemListEvent::SortToggled(field) => {
            if state.sort_field == field {
                state.sort_ascending = !state.sort_ascending;
            } else {
                state.sort_field = field.to_string();
                state.sort_ascending = true;
            }
        }
        ItemListEvent::PageChanged(page) => {
            state.page = page.min(total_pages(state).saturating_sub(1));
        }
        ItemListEvent::PageSizeChanged(size) => {
            state.page_size = size.max(1);
            state.page = 0;
        }
    }
}

/// Page count for the current collection, never less than one.
pub fn total_pages(state: &ItemListState) -> usize {
    ((state.items.len() + state.page_size - 1) / state.page_size).max(1)
}

/// The slice of the collection the table shows: sorted, then windowed to
/// the current page. The full collection stays in [`ItemListState::items`].
pub fn visible_items(state: &ItemListState) -> Vec<Item> {
    let mut sorted = state.items.clone();
    sort_list(&mut sorted, &state.sort_field, state.sort_ascending);
    sorted
        .into_iter()
        .skip(state.page * state.page_size)
        .take(state.page_size)
        .collect()
}

pub fn create_state() -> RwSignal<ItemListState> {
    RwSignal::new(ItemListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(id: &str, name: &str) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_defaults_show_spinner_before_first_load() {
        let state = ItemListState::default();
        assert!(state.loading);
        assert!(!state.is_loaded);
        assert!(state.items.is_empty());
        assert_eq!(state.page_size, 10);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_load_replaces_collection_and_clears_spinner() {
        let mut state = ItemListState::default();
        apply(&mut state, ItemListEvent::LoadStarted);
        apply(
            &mut state,
            ItemListEvent::LoadSucceeded(vec![named("1", "Coffee"), named("2", "Tea")]),
        );
        assert_eq!(state.items.len(), 2);
        assert!(!state.loading);
        assert!(state.is_loaded);
        assert_eq!(state.page, 0);
    }

    #[test]
    fn test_failed_load_keeps_spinner_and_sets_banner() {
        let mut state = ItemListState::default();
        apply(&mut state, ItemListEvent::LoadStarted);
        apply(&mut state, ItemListEvent::LoadFailed("boom".to_string()));
        assert!(state.loading, "a failed load does not clear the spinner");
        assert_eq!(state.error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_search_results_replace_items_regardless_of_prior_content() {
        let mut state = ItemListState::default();
        apply(
            &mut state,
            ItemListEvent::LoadSucceeded(vec![
                named("1", "Coffee"),
                named("2", "Tea"),
                named("3", "Juice"),
            ]),
        );
        apply(&mut state, ItemListEvent::SearchPending(true));
        assert!(state.loading);
        apply(
            &mut state,
            ItemListEvent::SearchResults(vec![named("2", "Tea")]),
        );
        assert_eq!(state.items.len(), 1);
        assert!(!state.loading);
        assert_eq!(state.page, 0);
    }

    #[test]
    fn test_create_mode_never_carries_a_previous_edit() {
        let mut state = ItemListState::default();
        apply(&mut state, ItemListEvent::EditRequested(named("1", "Coffee")));
        apply(&mut state, ItemListEvent::ModalClosed);
        apply(&mut state, ItemListEvent::CreateRequested);
        assert!(state.modal_visible);
        assert_eq!(state.modal_mode, ModalMode::Create);
        assert_eq!(state.current_item, None);
    }

    #[test]
    fn test_edit_seeds_the_selected_record() {
        let mut state = ItemListState::default();
        apply(&mut state, ItemListEvent::EditRequested(named("7", "Coffee")));
        assert!(state.modal_visible);
        assert_eq!(state.modal_mode, ModalMode::Update);
        assert_eq!(state.current_item.as_ref().map(|i| i.name.as_str()), Some("Coffee"));
    }

    #[test]
    fn test_submit_success_closes_the_modal() {
        let mut state = ItemListState::default();
        apply(&mut state, ItemListEvent::EditRequested(named("7", "Coffee")));
        apply(&mut state, ItemListEvent::SubmitSucceeded);
        assert!(!state.modal_visible);
        assert_eq!(state.current_item, None);
    }

    #[test]
    fn test_pagination_window_and_clamping() {
        let mut state = ItemListState::default();
        let items = (0..25)
            .map(|n| named(&n.to_string(), &format!("Item {:02}", n)))
            .collect();
        apply(&mut state, ItemListEvent::LoadSucceeded(items));

        assert_eq!(total_pages(&state), 3);
        assert_eq!(visible_items(&state).len(), 10);

        apply(&mut state, ItemListEvent::PageChanged(99));
        assert_eq!(state.page, 2);
        assert_eq!(visible_items(&state).len(), 5);

        apply(&mut state, ItemListEvent::PageSizeChanged(25));
        assert_eq!(state.page, 0);
        assert_eq!(total_pages(&state), 1);
        assert_eq!(visible_items(&state).len(), 25);
    }

    #[test]
    fn test_sort_toggle_flips_direction() {
        let mut state = ItemListState::default();
        apply(
            &mut state,
            ItemListEvent::LoadSucceeded(vec![named("1", "Tea"), named("2", "Coffee")]),
        );
        assert_eq!(visible_items(&state)[0].name, "Coffee");

        apply(&mut state, ItemListEvent::SortToggled("name"));
        assert!(!state.sort_ascending);
        assert_eq!(visible_items(&state)[0].name, "Tea");
    }
}
