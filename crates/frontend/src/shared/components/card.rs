use leptos::prelude::*;

/// Plain content card used by every page
#[component]
pub fn Card(
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();
    view! {
        <div class=move || format!("card {}", additional_class())>
            {children()}
        </div>
    }
}

/// Card header row: title on the left, actions on the right
#[component]
pub fn CardHeader(children: Children) -> impl IntoView {
    view! { <div class="card__header">{children()}</div> }
}

#[component]
pub fn CardContent(children: Children) -> impl IntoView {
    view! { <div class="card__content">{children()}</div> }
}
