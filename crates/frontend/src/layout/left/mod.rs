pub mod sidebar;

use super::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Sidebar container; visibility is driven by the global `left_open` flag.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <aside
            class="app-sidebar"
            style:display=move || if ctx.left_open.get() { "block" } else { "none" }
        >
            {children()}
        </aside>
    }
}
