pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Application shell: top navigation bar plus the routed content area.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |              Content                      |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-main">
                {children()}
            </div>
        </div>
    }
}
