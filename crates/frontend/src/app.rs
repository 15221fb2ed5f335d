use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::events;
use crate::shared::state::AppStores;
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // Provide the tab/layout context and the domain stores app-wide.
    provide_context(AppGlobalContext::new());
    provide_context(AppStores::new());

    // Long-lived push-update stream; reconnects are the browser's job.
    let _events = events::connect(|event| {
        log::debug!("push event: {}", event.kind);
    });

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
