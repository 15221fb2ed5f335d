use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::context::{use_auth, AuthState};
use crate::system::auth::storage;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let (_, set_auth) = use_auth();

    let handle_logout = move |_| {
        storage::clear_token();
        set_auth.set(AuthState::default());
    };

    view! {
        <header class="top-header">
            <button class="top-header__toggle" title="Toggle sidebar" on:click=move |_| ctx.toggle_left()>
                {"☰"}
            </button>
            <span class="top-header__title">"Sales Admin Dashboard"</span>
            <span class="top-header__spacer"></span>
            <button class="top-header__logout" on:click=handle_logout>
                "Logout"
            </button>
        </header>
    }
}
