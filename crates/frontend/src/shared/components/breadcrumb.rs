//! Breadcrumb trail for pages nested under a parent section.

use leptos::prelude::*;

#[component]
pub fn Breadcrumb(
    /// Pairs of (label, href). `None` marks the current page.
    items: Vec<(&'static str, Option<&'static str>)>,
) -> impl IntoView {
    let last = items.len().saturating_sub(1);

    view! {
        <nav class="breadcrumb" aria-label="Breadcrumb">
            {items
                .iter()
                .enumerate()
                .map(|(index, &(label, href))| {
                    let separator = (index < last)
                        .then(|| view! { <span class="breadcrumb__separator">"/"</span> });
                    let entry = match href {
                        Some(path) => view! {
                            <a class="breadcrumb__link" href=path>
                                {label}
                            </a>
                        }
                            .into_any(),
                        None => view! { <span class="breadcrumb__current">{label}</span> }.into_any(),
                    };
                    view! {
                        <span class="breadcrumb__item">{entry}{separator}</span>
                    }
                })
                .collect_view()}
        </nav>
    }
}
