use leptos::prelude::*;

use super::context::use_auth;

/// Gate that renders its children only for authenticated users and the
/// fallback (the login page) otherwise.
#[component]
pub fn RequireAuth(#[prop(into)] fallback: ViewFn, children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().token.is_some()
            fallback=fallback
        >
            {children()}
        </Show>
    }
}
