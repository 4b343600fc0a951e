//! DropOption component - per-row operations menu.
//!
//! Renders a trigger button that opens a small dropdown of commands and
//! reports the selected command key upward.

use leptos::ev;
use leptos::prelude::*;

use crate::shared::icons::icon;

#[component]
pub fn DropOption(
    /// Pairs of (command key, label). The key doubles as the entry icon name.
    menu_options: Vec<(&'static str, &'static str)>,
    /// Invoked with the command key of the selected entry.
    on_menu_click: Callback<String>,
) -> impl IntoView {
    let is_open = RwSignal::new(false);

    let toggle_menu = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        is_open.update(|open| *open = !*open);
    };

    view! {
        <div class="drop-option">
            <button class="drop-option__trigger" on:click=toggle_menu title="Operations">
                {icon("more-vertical")}
            </button>

            <Show when=move || is_open.get()>
                <div class="drop-option__menu">
                    {menu_options
                        .iter()
                        .map(|&(key, label)| {
                            view! {
                                <button
                                    class="drop-option__item"
                                    on:click=move |ev: ev::MouseEvent| {
                                        ev.stop_propagation();
                                        is_open.set(false);
                                        on_menu_click.run(key.to_string());
                                    }
                                >
                                    {icon(key)}
                                    <span class="drop-option__item-label">{label}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
