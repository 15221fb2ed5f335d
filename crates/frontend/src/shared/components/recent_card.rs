use leptos::prelude::*;

/// Generic "recent items" card for the dashboard.
///
/// The caller supplies the row renderer; an empty list shows
/// `empty_message` instead of an empty box.
#[component]
pub fn RecentCard<T, F>(
    /// Card title
    title: String,
    /// Items to render
    #[prop(into)]
    items: Signal<Vec<T>>,
    /// Message shown when there are no items
    empty_message: String,
    /// Row renderer
    render_item: F,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    F: Fn(&T) -> AnyView + Send + Sync + 'static,
{
    view! {
        <div class="card recent-card">
            <div class="card__header">
                <h3>{title}</h3>
            </div>
            <div class="card__content">
                {move || {
                    let rows = items.get();
                    if rows.is_empty() {
                        view! { <div class="recent-card__empty">{empty_message.clone()}</div> }
                            .into_any()
                    } else {
                        rows.iter().map(&render_item).collect_view().into_any()
                    }
                }}
            </div>
        </div>
    }
}
