use contracts::domain::a002_order_type::aggregate::OrderType;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_order_type::api;
use crate::shared::icons::icon;
use crate::system::auth::request_context::RequestContext;

const DEBOUNCE_MS: u32 = 300;

/// Search bar for the order types screen. Queries on its own and reports
/// results through the page's callbacks; an empty query reloads the full
/// list.
#[component]
pub fn OrderTypeSearch(
    on_loading: Callback<bool>,
    on_results: Callback<Vec<OrderType>>,
    on_add: Callback<()>,
) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let generation = StoredValue::new(0u32);
    let initialized = StoredValue::new(false);

    Effect::new(move |_| {
        let value = query.get();
        // The page triggers the initial load itself.
        if !initialized.get_value() {
            initialized.set_value(true);
            return;
        }

        generation.update_value(|g| *g += 1);
        let my_generation = generation.get_value();

        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if generation.get_value() != my_generation {
                return;
            }

            on_loading.run(true);
            let ctx = RequestContext::current();
            let trimmed = value.trim();
            let result = if trimmed.is_empty() {
                api::fetch_order_types(&ctx).await
            } else {
                api::search_order_types(&ctx, trimmed).await
            };
            match result {
                Ok(types) => on_results.run(types),
                Err(e) => log::error!("Failed to search order types: {}", e),
            }
        });
    });

    view! {
        <div class="search-bar">
            <Flex gap=FlexGap::Small align=FlexAlign::End>
                <div style="flex: 1; max-width: 320px;">
                    <Input value=query placeholder="Search order types..." />
                </div>
                <Show when=move || !query.get().is_empty()>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| query.set(String::new())
                    >
                        {icon("x")}
                    </Button>
                </Show>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_add.run(())>
                    {icon("plus")}
                    " New Type"
                </Button>
            </Flex>
        </div>
    }
}
