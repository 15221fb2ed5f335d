use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::ui::{Button, Input};
use crate::shared::components::{Card, CardContent, CardHeader};
use crate::system::auth::{api, context::use_auth, context::AuthState, storage};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (_, set_auth) = use_auth();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (username_error, set_username_error) = signal(Option::<String>::None);
    let (password_error, set_password_error) = signal(Option::<String>::None);
    let (error, set_error) = signal(Option::<String>::None);
    let (signing_in, set_signing_in) = signal(false);

    let handle_submit = move |_| {
        set_error.set(None);

        let user = username.get_untracked();
        let pass = password.get_untracked();
        let mut valid = true;
        if user.trim().is_empty() {
            set_username_error.set(Some("Username is required".to_string()));
            valid = false;
        } else {
            set_username_error.set(None);
        }
        if pass.trim().is_empty() {
            set_password_error.set(Some("Password is required".to_string()));
            valid = false;
        } else {
            set_password_error.set(None);
        }
        if !valid {
            return;
        }

        set_signing_in.set(true);
        spawn_local(async move {
            match api::login(user, pass).await {
                Ok(response) => {
                    storage::save_token(&response.token);
                    set_auth.set(AuthState {
                        token: Some(response.token),
                    });
                }
                Err(err) => set_error.set(Some(err.message)),
            }
            set_signing_in.set(false);
        });
    };

    view! {
        <div style="display: flex; justify-content: center; align-items: center; min-height: 100vh; background: #f5f5f5;">
            <Card class="login-card">
                <CardHeader>
                    <h2 style="width: 100%; text-align: center;">"Sales Admin Dashboard"</h2>
                </CardHeader>
                <CardContent>
                    {move || error.get().map(|msg| view! {
                        <div style="color: #b71c1c; background: #fdecea; padding: 8px; border-radius: 6px; margin-bottom: 12px; text-align: center;">
                            {msg}
                        </div>
                    })}
                    <Input
                        id="username"
                        label="Username"
                        value=Signal::derive(move || username.get())
                        on_input=Callback::new(move |value| username.set(value))
                        error=Signal::derive(move || username_error.get())
                        required=true
                    />
                    <Input
                        id="password"
                        label="Password"
                        input_type="password"
                        value=Signal::derive(move || password.get())
                        on_input=Callback::new(move |value| password.set(value))
                        error=Signal::derive(move || password_error.get())
                        required=true
                    />
                    <div style="margin-top: 16px;">
                        <Button
                            disabled=Signal::derive(move || signing_in.get())
                            on_click=Callback::new(handle_submit)
                        >
                            {move || if signing_in.get() { "Signing in..." } else { "Sign In" }}
                        </Button>
                    </div>
                </CardContent>
            </Card>
        </div>
    }
}
