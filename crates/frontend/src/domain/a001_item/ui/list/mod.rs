pub mod state;

use contracts::domain::a001_item::aggregate::Item;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_item::api;
use crate::domain::a001_item::ui::details::ItemForm;
use crate::domain::a001_item::ui::search::ItemSearch;
use crate::shared::components::breadcrumb::Breadcrumb;
use crate::shared::components::drop_option::DropOption;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, Sortable};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::request_context::RequestContext;
use state::{apply, create_state, total_pages, visible_items, ItemListEvent, ModalMode};

const TABLE_ID: &str = "a001-item-table";

impl Sortable for Item {
    fn compare_by_field(&self, other: &Self, _field: &str) -> std::cmp::Ordering {
        // Only the name column sorts.
        self.name.to_lowercase().cmp(&other.name.to_lowercase())
    }
}

#[component]
pub fn ItemsListPage() -> impl IntoView {
    let state = create_state();

    let load_items = move || {
        state.update(|s| apply(s, ItemListEvent::LoadStarted));
        spawn_local(async move {
            let ctx = RequestContext::current();
            match api::fetch_items(&ctx).await {
                Ok(data) => {
                    state.update(|s| apply(s, ItemListEvent::LoadSucceeded(data)));
                }
                Err(e) => {
                    log::error!("Failed to fetch items: {}", e);
                    state.update(|s| apply(s, ItemListEvent::LoadFailed(e)));
                }
            }
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_items();
        }
    });

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| apply(s, ItemListEvent::SortToggled(field)));
        }
    };

    let go_to_page = move |page: usize| {
        state.update(|s| apply(s, ItemListEvent::PageChanged(page)));
    };

    let change_page_size = move |size: usize| {
        state.update(|s| apply(s, ItemListEvent::PageSizeChanged(size)));
    };

    let delete_item = move |item: Item| {
        let confirmed = {
            if let Some(win) = web_sys::window() {
                win.confirm_with_message("Delete Item\nDo you want to delete this item?")
                    .unwrap_or(false)
            } else {
                false
            }
        };
        if !confirmed {
            return;
        }
        spawn_local(async move {
            let ctx = RequestContext::current();
            match api::delete_item(&ctx, &item.id).await {
                Ok(()) => load_items(),
                Err(e) => {
                    log::error!("Failed to delete item: {}", e);
                    state.update(|s| apply(s, ItemListEvent::DeleteFailed(e)));
                }
            }
        });
    };

    view! {
        <PageFrame page_id="a001_item--list" category=PAGE_CAT_LIST>
            <Breadcrumb items=vec![("Dashboard", Some("/")), ("Items", None)] />

            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Items"</h1>
                    <Badge>
                        {move || state.get().items.len().to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_items()
                        disabled=Signal::derive(move || state.get().loading)
                    >
                        {icon("refresh")}
                        {move || if state.get().loading { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || state.get().error.map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("filter")}
                            <span class="filter-panel__title">"Search"</span>
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || state.get().page)
                                total_pages=Signal::derive(move || state.with(|s| total_pages(s)))
                                total_count=Signal::derive(move || state.get().items.len())
                                page_size=Signal::derive(move || state.get().page_size)
                                on_page_change=Callback::new(go_to_page)
                                on_page_size_change=Callback::new(change_page_size)
                            />
                        </div>
                        <div class="filter-panel-header__right">
                        </div>
                    </div>

                    <div class="filter-panel-content">
                        <ItemSearch
                            on_loading=Callback::new(move |flag: bool| {
                                state.update(|s| apply(s, ItemListEvent::SearchPending(flag)))
                            })
                            on_results=Callback::new(move |found: Vec<Item>| {
                                state.update(|s| apply(s, ItemListEvent::SearchResults(found)))
                            })
                            on_add=Callback::new(move |_: ()| {
                                state.update(|s| apply(s, ItemListEvent::CreateRequested))
                            })
                        />
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:id=TABLE_ID attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=200.0>
                                    <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("name")>
                                        "Item name"
                                        <span class=move || state.with(|s| get_sort_class(&s.sort_field, "name"))>
                                            {move || get_sort_indicator(&state.with(|s| s.sort_field.clone()), "name", state.with(|s| s.sort_ascending))}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>
                                    "Operation"
                                </TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| visible_items(s))
                                key=|item| item.id.clone()
                                children=move |item: Item| {
                                    let item_for_menu = item.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{item.name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <DropOption
                                                    menu_options=vec![("edit", "Edit"), ("delete", "Delete")]
                                                    on_menu_click=Callback::new(move |key: String| {
                                                        let row = item_for_menu.clone();
                                                        match key.as_str() {
                                                            "edit" => state.update(|s| {
                                                                apply(s, ItemListEvent::EditRequested(row))
                                                            }),
                                                            "delete" => delete_item(row),
                                                            _ => {}
                                                        }
                                                    })
                                                />
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                {move || {
                    let snapshot = state.get();
                    if snapshot.modal_visible {
                        // Create mode always starts from an empty record,
                        // whatever the last edit left behind.
                        let seed = match snapshot.modal_mode {
                            ModalMode::Update => snapshot.current_item.clone(),
                            ModalMode::Create => None,
                        };
                        view! {
                            <ItemForm
                                item=seed
                                on_close=move || state.update(|s| apply(s, ItemListEvent::ModalClosed))
                                on_saved=move || {
                                    state.update(|s| apply(s, ItemListEvent::SubmitSucceeded));
                                    load_items();
                                }
                            />
                        }
                        .into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}
            </div>
        </PageFrame>
    }
}
