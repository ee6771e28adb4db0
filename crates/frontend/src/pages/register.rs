//! Registration page

use wicket_client::types::Registration;
use yew::prelude::*;
use yew_router::prelude::*;

use super::bind_input;
use crate::app::Route;
use crate::auth::{ActionState, use_is_authenticated, use_session_actions};
use crate::components::ErrorAlert;

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let actions = use_session_actions();
    let is_authenticated = use_is_authenticated();

    let email = use_state(String::new);
    let username = use_state(String::new);
    let password = use_state(String::new);
    let first_name = use_state(String::new);
    let middle_name = use_state(String::new);
    let last_name = use_state(String::new);

    if is_authenticated {
        return html! { <Redirect<Route> to={Route::Dashboard} /> };
    }

    // All fields are required for submission.
    let complete = [
        &email,
        &username,
        &password,
        &first_name,
        &middle_name,
        &last_name,
    ]
    .iter()
    .all(|field| !field.is_empty());

    let on_submit = {
        let actions = actions.clone();
        let email = email.clone();
        let username = username.clone();
        let password = password.clone();
        let first_name = first_name.clone();
        let middle_name = middle_name.clone();
        let last_name = last_name.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            actions.register(Registration {
                email: (*email).clone(),
                username: (*username).clone(),
                password: (*password).clone(),
                first_name: (*first_name).clone(),
                middle_name: (*middle_name).clone(),
                last_name: (*last_name).clone(),
            });
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center py-12 px-4">
            <div class="max-w-md w-full space-y-6">
                <h2 class="text-3xl font-extrabold text-gray-900 text-center">{"Create your account"}</h2>

                if let ActionState::Error(message) = actions.state() {
                    <ErrorAlert {message} />
                }

                <form class="space-y-4" onsubmit={on_submit}>
                    <input
                        type="email"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md"
                        placeholder="Email address"
                        value={(*email).clone()}
                        oninput={bind_input(&email)}
                    />
                    <input
                        type="text"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md"
                        placeholder="Username"
                        value={(*username).clone()}
                        oninput={bind_input(&username)}
                    />
                    <input
                        type="password"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md"
                        placeholder="Password"
                        value={(*password).clone()}
                        oninput={bind_input(&password)}
                    />
                    <input
                        type="text"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md"
                        placeholder="First name"
                        value={(*first_name).clone()}
                        oninput={bind_input(&first_name)}
                    />
                    <input
                        type="text"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md"
                        placeholder="Middle name"
                        value={(*middle_name).clone()}
                        oninput={bind_input(&middle_name)}
                    />
                    <input
                        type="text"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md"
                        placeholder="Last name"
                        value={(*last_name).clone()}
                        oninput={bind_input(&last_name)}
                    />
                    <button
                        type="submit"
                        class="w-full py-2 px-4 bg-blue-600 hover:bg-blue-700 text-white rounded-md font-medium disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled={actions.is_busy() || !complete}
                    >
                        { if actions.is_busy() { "Creating account..." } else { "Register" } }
                    </button>
                </form>

                <p class="text-center text-sm text-gray-600">
                    {"Already registered? "}
                    <Link<Route> to={Route::Login} classes="text-blue-600 hover:underline">
                        {"Sign in"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
