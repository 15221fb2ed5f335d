use contracts::shared::Pagination;
use leptos::prelude::*;

/// Reusable pagination strip: first/prev/next/last plus a page-size select.
///
/// Pages are 1-indexed, matching the backend's `page` query parameter.
#[component]
pub fn PaginationControls(
    /// Current pagination metadata from the store
    #[prop(into)]
    pagination: Signal<Pagination>,
    /// Callback when page changes
    on_page_change: Callback<u32>,
    /// Callback when page size changes
    on_page_size_change: Callback<u32>,
    /// Available page size options (optional, defaults to [10, 20, 50, 100])
    #[prop(optional)]
    page_size_options: Option<Vec<u32>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![10, 20, 50, 100]);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || !pagination.get().has_prev
                title="First page"
            >
                {"«"}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let p = pagination.get();
                    if p.has_prev {
                        on_page_change.run(p.page.saturating_sub(1).max(1));
                    }
                }
                disabled=move || !pagination.get().has_prev
                title="Previous page"
            >
                {"‹"}
            </button>
            <span class="pagination-info">
                {move || {
                    let p = pagination.get();
                    format!("Page {} of {} ({})", p.page, p.total_pages.max(1), p.total_count)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let p = pagination.get();
                    if p.has_next {
                        on_page_change.run(p.page + 1);
                    }
                }
                disabled=move || !pagination.get().has_next
                title="Next page"
            >
                {"›"}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let p = pagination.get();
                    if p.total_pages > 0 {
                        on_page_change.run(p.total_pages);
                    }
                }
                disabled=move || !pagination.get().has_next
                title="Last page"
            >
                {"»"}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let val = event_target_value(&ev).parse().unwrap_or(20);
                    on_page_size_change.run(val);
                }
                prop:value=move || pagination.get().page_size.to_string()
            >
                {page_size_opts.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || pagination.get().page_size == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
