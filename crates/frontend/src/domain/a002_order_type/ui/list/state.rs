use contracts::domain::a002_order_type::aggregate::OrderType;
use leptos::prelude::*;

use crate::shared::list_utils::sort_list;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalMode {
    #[default]
    Create,
    Update,
}

/// Snapshot of everything the order types screen renders from.
#[derive(Clone, Debug)]
pub struct OrderTypeListState {
    pub items: Vec<OrderType>,
    pub loading: bool,
    pub is_loaded: bool,
    pub error: Option<String>,
    pub modal_visible: bool,
    pub modal_mode: ModalMode,
    pub current_item: Option<OrderType>,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
}

impl Default for OrderTypeListState {
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

/// Discrete events of the order types screen, folded by [`apply`].
#[derive(Clone, Debug)]
pub enum OrderTypeListEvent {
    LoadStarted,
    LoadSucceeded(Vec<OrderType>),
    LoadFailed(String),
    SearchPending(bool),
    SearchResults(Vec<OrderType>),
    CreateRequested,
    EditRequested(OrderType),
    ModalClosed,
    SubmitSucceeded,
    DeleteFailed(String),
    SortToggled(&'static str),
    PageChanged(usize),
    PageSizeChanged(usize),
}

pub fn apply(state: &mut OrderTypeListState, event: OrderTypeListEvent) {
    match event {
        OrderTypeListEvent::LoadStarted => {
            state.loading = true;
            state.error = None;
        }
        OrderTypeListEvent::LoadSucceeded(items) => {
            state.items = items;
            state.loading = false;
            state.is_loaded = true;
            state.page = 0;
        }
        // Same as the items screen: a failed load does not clear the
        // spinner, only the banner reports it.
        OrderTypeListEvent::LoadFailed(message) => {
            state.error = Some(message);
        }
        OrderTypeListEvent::SearchPending(flag) => {
            state.loading = flag;
        }
        OrderTypeListEvent::SearchResults(items) => {
            state.items = items;
            state.loading = false;
            state.is_loaded = true;
            state.page = 0;
        }
        OrderTypeListEvent::CreateRequested => {
            state.modal_visible = true;
            state.modal_mode = ModalMode::Create;
            state.current_item = None;
        }
        OrderTypeListEvent::EditRequested(order_type) => {
            state.modal_visible = true;
            state.modal_mode = ModalMode::Update;
            state.current_item = Some(order_type);
        }
        OrderTypeListEvent::ModalClosed | OrderTypeListEvent::SubmitSucceeded => {
            state.modal_visible = false;
            state.current_item = None;
        }
        OrderTypeListEvent::DeleteFailed(message) => {
            state.error = Some(message);
        }
        OrderTypeListEvent::SortToggled(field) => {
            if state.sort_field == field {
                state.sort_ascending = !state.sort_ascending;
            } else {
                state.sort_field = field.to_string();
                state.sort_ascending = true;
            }
        }
        OrderTypeListEvent::PageChanged(page) => {
            state.page = page.min(total_pages(state).saturating_sub(1));
        }
        OrderTypeListEvent::PageSizeChanged(size) => {
            state.page_size = size.max(1);
            state.page = 0;
        }
    }
}

pub fn total_pages(state: &OrderTypeListState) -> usize {
    ((state.items.len() + state.page_size - 1) / state.page_size).max(1)
}

pub fn visible_items(state: &OrderTypeListState) -> Vec<OrderType> {
    let mut sorted = state.items.clone();
    sort_list(&mut sorted, &state.sort_field, state.sort_ascending);
    sorted
        .into_iter()
        .skip(state.page * state.page_size)
        .take(state.page_size)
        .collect()
}

pub fn create_state() -> RwSignal<OrderTypeListState> {
    RwSignal::new(OrderTypeListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(id: &str, name: &str) -> OrderType {
        OrderType {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_defaults_show_spinner_before_first_load() {
        let state = OrderTypeListState::default();
        assert!(state.loading);
        assert!(!state.is_loaded);
        assert!(state.items.is_empty());
        assert_eq!(state.page_size, 10);
    }

    #[test]
    fn test_load_replaces_collection_and_clears_spinner() {
        let mut state = OrderTypeListState::default();
        apply(&mut state, OrderTypeListEvent::LoadStarted);
        apply(
            &mut state,
            OrderTypeListEvent::LoadSucceeded(vec![
                named("1", "Delivery"),
                named("2", "Pickup"),
            ]),
        );
        assert_eq!(state.items.len(), 2);
        assert!(!state.loading);
        assert!(state.is_loaded);
    }

    #[test]
    fn test_failed_load_keeps_spinner_and_sets_banner() {
        let mut state = OrderTypeListState::default();
        apply(&mut state, OrderTypeListEvent::LoadStarted);
        apply(
            &mut state,
            OrderTypeListEvent::LoadFailed("connection refused".to_string()),
        );
        assert!(state.loading);
        assert_eq!(state.error.as_deref(), Some("connection refused"));
    }

    #[test]
    fn test_search_results_replace_items_regardless_of_prior_content() {
        let mut state = OrderTypeListState::default();
        apply(
            &mut state,
            OrderTypeListEvent::LoadSucceeded(vec![
                named("1", "Delivery"),
                named("2", "Pickup"),
                named("3", "Express"),
            ]),
        );
        apply(
            &mut state,
            OrderTypeListEvent::SearchResults(vec![named("3", "Express")]),
        );
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].name, "Express");
        assert!(!state.loading);
    }

    #[test]
    fn test_create_mode_never_carries_a_previous_edit() {
        let mut state = OrderTypeListState::default();
        apply(
            &mut state,
            OrderTypeListEvent::EditRequested(named("1", "Delivery")),
        );
        apply(&mut state, OrderTypeListEvent::ModalClosed);
        apply(&mut state, OrderTypeListEvent::CreateRequested);
        assert_eq!(state.modal_mode, ModalMode::Create);
        assert_eq!(state.current_item, None);
    }

    #[test]
    fn test_edit_seeds_the_selected_record() {
        let mut state = OrderTypeListState::default();
        apply(
            &mut state,
            OrderTypeListEvent::EditRequested(named("9", "Pickup")),
        );
        assert_eq!(state.modal_mode, ModalMode::Update);
        assert_eq!(
            state.current_item.as_ref().map(|t| t.name.as_str()),
            Some("Pickup")
        );
    }

    #[test]
    fn test_submit_success_closes_the_modal() {
        let mut state = OrderTypeListState::default();
        apply(
            &mut state,
            OrderTypeListEvent::EditRequested(named("9", "Pickup")),
        );
        apply(&mut state, OrderTypeListEvent::SubmitSucceeded);
        assert!(!state.modal_visible);
        assert_eq!(state.current_item, None);
    }

    #[test]
    fn test_pagination_window_and_clamping() {
        let mut state = OrderTypeListState::default();
        let items = (0..12)
            .map(|n| named(&n.to_string(), &format!("Type {:02}", n)))
            .collect();
        apply(&mut state, OrderTypeListEvent::LoadSucceeded(items));

        assert_eq!(total_pages(&state), 2);
        apply(&mut state, OrderTypeListEvent::PageChanged(5));
        assert_eq!(state.page, 1);
        assert_eq!(visible_items(&state).len(), 2);
    }

    #[test]
    fn test_sort_toggle_flips_direction() {
        let mut state = OrderTypeListState::default();
        apply(
            &mut state,
            OrderTypeListEvent::LoadSucceeded(vec![
                named("1", "Pickup"),
                named("2", "Delivery"),
            ]),
        );
        assert_eq!(visible_items(&state)[0].name, "Delivery");

        apply(&mut state, OrderTypeListEvent::SortToggled("name"));
        assert_eq!(visible_items(&state)[0].name, "Pickup");
    }
}
