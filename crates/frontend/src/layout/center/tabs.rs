use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::registry::render_tab_content;

/// Tab strip plus the active tab's content.
#[component]
pub fn Tabs() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="tabs">
            <div class="tabs__strip">
                <For
                    each=move || ctx.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| {
                        let key_for_activate = tab.key.clone();
                        let key_for_close = tab.key.clone();
                        let key_for_active = tab.key.clone();
                        let is_active = move || {
                            ctx.active.get().as_deref() == Some(key_for_active.as_str())
                        };
                        view! {
                            <div
                                class="tabs__tab"
                                class=("tabs__tab--active", is_active)
                                on:click=move |_| ctx.activate_tab(&key_for_activate)
                            >
                                <span>{tab.title.clone()}</span>
                                <button
                                    class="tabs__close"
                                    title="Close tab"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        ctx.close_tab(&key_for_close);
                                    }
                                >
                                    {"×"}
                                </button>
                            </div>
                        }
                    }
                />
            </div>
            <div class="tabs__content">
                {move || ctx.active.get().map(|key| render_tab_content(&key, ctx))}
            </div>
        </div>
    }
}
