use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;

const NAV_ITEMS: &[(&str, &str, &str)] = &[
    ("dashboard", "Dashboard", "📊"),
    ("customers", "Customers", "👤"),
    ("products", "Products", "🏷️"),
    ("orders", "Orders", "📦"),
    ("order_new", "New Order", "🧾"),
    ("warehouses", "Warehouses", "🏭"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <nav class="sidebar">
            {NAV_ITEMS.iter().map(|&(key, title, icon)| {
                let is_active = move || ctx.active.get().as_deref() == Some(key);
                view! {
                    <button
                        class="sidebar__item"
                        class=("sidebar__item--active", is_active)
                        on:click=move |_| ctx.open_tab(key, title)
                    >
                        <span class="sidebar__icon">{icon}</span>
                        <span>{title}</span>
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
