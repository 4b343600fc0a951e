//! TopHeader component - application top navigation bar.
//!
//! Contains the application title and the links to the two catalog pages.

use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Sunshine Admin"</span>
            </div>

            <nav class="top-header__nav">
                <a class="top-header__nav-link" href="/items">"Items"</a>
                <a class="top-header__nav-link" href="/order-types">"Order Types"</a>
            </nav>
        </div>
    }
}
