//! Login page

use yew::prelude::*;
use yew_router::prelude::*;

use super::bind_input;
use crate::app::Route;
use crate::auth::{ActionState, use_is_authenticated, use_session_actions};
use crate::components::ErrorAlert;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let actions = use_session_actions();
    let is_authenticated = use_is_authenticated();

    let username = use_state(String::new);
    let password = use_state(String::new);

    if is_authenticated {
        return html! { <Redirect<Route> to={Route::Dashboard} /> };
    }

    let on_submit = {
        let actions = actions.clone();
        let username = username.clone();
        let password = password.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            actions.login((*username).clone(), (*password).clone());
        })
    };

    let can_submit = !actions.is_busy() && !username.is_empty() && !password.is_empty();

    html! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center py-12 px-4">
            <div class="max-w-md w-full space-y-6">
                <h2 class="text-3xl font-extrabold text-gray-900 text-center">{"Sign in"}</h2>

                if let ActionState::Error(message) = actions.state() {
                    <ErrorAlert {message} />
                }

                <form class="space-y-4" onsubmit={on_submit}>
                    <input
                        type="text"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-blue-500"
                        placeholder="Username"
                        value={(*username).clone()}
                        oninput={bind_input(&username)}
                    />
                    <input
                        type="password"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-blue-500"
                        placeholder="Password"
                        value={(*password).clone()}
                        oninput={bind_input(&password)}
                    />
                    <button
                        type="submit"
                        class="w-full py-2 px-4 bg-blue-600 hover:bg-blue-700 text-white rounded-md font-medium disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled={!can_submit}
                    >
                        { if actions.is_busy() { "Signing in..." } else { "Sign in" } }
                    </button>
                </form>

                <p class="text-center text-sm text-gray-600">
                    {"No account yet? "}
                    <Link<Route> to={Route::Register} classes="text-blue-600 hover:underline">
                        {"Register"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
