//! Login Page
//!
//! Login and signup forms. Field values live in local signals, updated per
//! keystroke and discarded on navigation; nothing is sent over the network
//! in this revision.

use leptos::*;

use crate::state::forms::{LoginForm, SignupForm};
use crate::state::global::AppState;

/// Login page with both forms
#[component]
pub fn Login() -> impl IntoView {
    view! {
        <div class="max-w-xl mx-auto space-y-8">
            <LoginPanel />

            <p class="text-center text-gray-400">
                "Don't have an account? Sign up below!"
            </p>

            <SignupPanel />
        </div>
    }
}

/// Log-in form
#[component]
fn LoginPanel() -> impl IntoView {
    let form = create_rw_signal(LoginForm::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // No backend yet, the submitted fields only go to the console
        let info = form.get();
        web_sys::console::log_1(&format!("login submitted for {:?}", info.username).into());
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Log in"</h2>

            <form on:submit=on_submit class="space-y-4">
                <TextField
                    label="Username / Email"
                    value=Signal::derive(move || form.get().username)
                    on_input=move |v| form.update(|f| f.username = v)
                    required=true
                />
                <TextField
                    label="Password"
                    input_type="password"
                    value=Signal::derive(move || form.get().password)
                    on_input=move |v| form.update(|f| f.password = v)
                    required=true
                />

                <button
                    type="submit"
                    class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3
                           font-semibold transition-colors"
                >
                    "Log in"
                </button>
            </form>
        </section>
    }
}

/// Sign-up form
#[component]
fn SignupPanel() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let form = create_rw_signal(SignupForm::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let info = form.get();
        if let Err(msg) = info.validate() {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&msg);
            }
            return;
        }

        let payload = info.payload();
        match serde_json::to_string(&payload) {
            Ok(json) => {
                web_sys::console::log_1(&format!("signup payload: {}", json).into());
            }
            Err(e) => {
                web_sys::console::error_1(
                    &format!("failed to encode signup payload: {}", e).into(),
                );
            }
        }

        state.show_notice(&format!("Welcome aboard, {}!", payload.username));
        form.set(SignupForm::default());
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Sign up"</h2>

            <form on:submit=on_submit class="space-y-4">
                <TextField
                    label="Username"
                    value=Signal::derive(move || form.get().username)
                    on_input=move |v| form.update(|f| f.username = v)
                    required=true
                />

                <div class="grid grid-cols-2 gap-4">
                    <TextField
                        label="Password"
                        input_type="password"
                        value=Signal::derive(move || form.get().password)
                        on_input=move |v| form.update(|f| f.password = v)
                        required=true
                    />
                    <TextField
                        label="Confirm Password"
                        input_type="password"
                        value=Signal::derive(move || form.get().conf_password)
                        on_input=move |v| form.update(|f| f.conf_password = v)
                        required=true
                    />
                </div>

                <TextField
                    label="Email"
                    input_type="email"
                    value=Signal::derive(move || form.get().email)
                    on_input=move |v| form.update(|f| f.email = v)
                    required=true
                />

                <div class="grid grid-cols-2 gap-4">
                    <TextField
                        label="First Name"
                        value=Signal::derive(move || form.get().firstname)
                        on_input=move |v| form.update(|f| f.firstname = v)
                        required=true
                    />
                    <TextField
                        label="Last Name"
                        value=Signal::derive(move || form.get().lastname)
                        on_input=move |v| form.update(|f| f.lastname = v)
                        required=true
                    />
                </div>

                <TextField
                    label="Profile Image URL"
                    value=Signal::derive(move || form.get().profile_img_url)
                    on_input=move |v| form.update(|f| f.profile_img_url = v)
                />

                <button
                    type="submit"
                    class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3
                           font-semibold transition-colors"
                >
                    "Register"
                </button>
            </form>
        </section>
    }
}

/// Labelled text input bound to a form field
#[component]
fn TextField(
    label: &'static str,
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_input: impl Fn(String) + 'static,
    #[prop(default = false)]
    required: bool,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type=input_type
                required=required
                autocomplete="off"
                prop:value=move || value.get()
                on:input=move |ev| on_input(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}
