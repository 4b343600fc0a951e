use crate::domain::a001_item::ui::list::ItemsListPage;
use crate::domain::a002_order_type::ui::list::OrderTypesListPage;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/items" /> } />
                    <Route path=path!("/items") view=ItemsListPage />
                    <Route path=path!("/order-types") view=OrderTypesListPage />
                </Routes>
            </Shell>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page__content">
                <h1 class="page__title">"404"</h1>
                <p>"Page not found"</p>
                <a href="/items">"Go to Items"</a>
            </div>
        </div>
    }
}
