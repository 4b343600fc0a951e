use crate::shared::icons::icon;
use leptos::prelude::*;

/// Where a pager button sends the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PageJump {
    First,
    Back,
    Forward,
    Last,
}

/// Clamp a jump to the valid page range. Pages are 0-indexed.
fn resolve_jump(jump: PageJump, page: usize, total_pages: usize) -> usize {
    let last = total_pages.saturating_sub(1);
    match jump {
        PageJump::First => 0,
        PageJump::Back => page.saturating_sub(1),
        PageJump::Forward => (page + 1).min(last),
        PageJump::Last => last,
    }
}

/// Pager strip shown in the filter panel: jump buttons around a
/// `page / pages (count)` readout, plus the page-size select.
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Page sizes offered in the select (optional, defaults to [10, 25, 50])
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let sizes = page_size_options.unwrap_or_else(|| vec![10, 25, 50]);

    let at_first = move || current_page.get() == 0;
    let at_last = move || current_page.get() + 1 >= total_pages.get();

    let jump_to = move |jump: PageJump| {
        let page = current_page.get();
        let target = resolve_jump(jump, page, total_pages.get());
        if target != page {
            on_page_change.run(target);
        }
    };

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                title="First page"
                disabled=at_first
                on:click=move |_| jump_to(PageJump::First)
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                title="Previous page"
                disabled=at_first
                on:click=move |_| jump_to(PageJump::Back)
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    format!(
                        "{} / {} ({})",
                        current_page.get() + 1,
                        total_pages.get().max(1),
                        total_count.get(),
                    )
                }}
            </span>
            <button
                class="pagination-btn"
                title="Next page"
                disabled=at_last
                on:click=move |_| jump_to(PageJump::Forward)
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                title="Last page"
                disabled=at_last
                on:click=move |_| jump_to(PageJump::Last)
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {sizes
                    .iter()
                    .map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jumps_stay_inside_the_page_range() {
        assert_eq!(resolve_jump(PageJump::First, 4, 5), 0);
        assert_eq!(resolve_jump(PageJump::Back, 0, 5), 0);
        assert_eq!(resolve_jump(PageJump::Forward, 4, 5), 4);
        assert_eq!(resolve_jump(PageJump::Last, 0, 5), 4);
    }

    #[test]
    fn test_jumps_move_one_page_at_a_time() {
        assert_eq!(resolve_jump(PageJump::Back, 3, 5), 2);
        assert_eq!(resolve_jump(PageJump::Forward, 3, 5), 4);
    }

    #[test]
    fn test_empty_collection_keeps_the_pager_on_page_zero() {
        assert_eq!(resolve_jump(PageJump::Last, 0, 0), 0);
        assert_eq!(resolve_jump(PageJump::Forward, 0, 0), 0);
    }
}
