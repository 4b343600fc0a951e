use contracts::domain::a001_item::aggregate::Item;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_item::api;
use crate::shared::icons::icon;
use crate::system::auth::request_context::RequestContext;

const DEBOUNCE_MS: u32 = 300;

/// Search bar for the items screen.
///
/// Owns its queries end to end: the page only hands over a loading-flag
/// setter and a results setter and treats whatever comes back as the new
/// collection. An empty query reloads the full list.
#[component]
pub fn ItemSearch(
    on_loading: Callback<bool>,
    on_results: Callback<Vec<Item>>,
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
                api::fetch_items(&ctx).await
            } else {
                api::search_items(&ctx, trimmed).await
            };
            match result {
                Ok(items) => on_results.run(items),
                // There is no error channel back into the page from here.
                Err(e) => log::error!("Failed to search items: {}", e),
            }
        });
    });

    view! {
        <div class="search-bar">
            <Flex gap=FlexGap::Small align=FlexAlign::End>
                <div style="flex: 1; max-width: 320px;">
                    <Input value=query placeholder="Search items..." />
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
                    " New Item"
                </Button>
            </Flex>
        </div>
    }
}
