//! Profile settings page

use wicket_client::types::ProfileUpdate;
use yew::prelude::*;
use yew_router::prelude::*;

use super::bind_input;
use crate::app::Route;
use crate::auth::{ActionState, use_session_actions, use_session_user};
use crate::components::{ErrorAlert, LoadingSpinner};

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let actions = use_session_actions();
    let user = use_session_user();

    let email = use_state(String::new);
    let username = use_state(String::new);
    let first_name = use_state(String::new);
    let middle_name = use_state(String::new);
    let last_name = use_state(String::new);

    // Reset the form whenever the held user changes; after a save the
    // server's returned representation lands here.
    {
        let email = email.clone();
        let username = username.clone();
        let first_name = first_name.clone();
        let middle_name = middle_name.clone();
        let last_name = last_name.clone();
        use_effect_with(user.clone(), move |user| {
            if let Some(user) = user {
                email.set(user.email.clone());
                username.set(user.username.clone());
                first_name.set(user.first_name.clone().unwrap_or_default());
                middle_name.set(user.middle_name.clone().unwrap_or_default());
                last_name.set(user.last_name.clone().unwrap_or_default());
            }
        });
    }

    // The guard keeps this page behind an authenticated session.
    if user.is_none() {
        return html! { <LoadingSpinner /> };
    }

    let on_submit = {
        let actions = actions.clone();
        let email = email.clone();
        let username = username.clone();
        let first_name = first_name.clone();
        let middle_name = middle_name.clone();
        let last_name = last_name.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // Empty fields are stripped from the payload before the
            // PATCH goes out.
            actions.update_profile(ProfileUpdate {
                email: Some((*email).clone()),
                username: Some((*username).clone()),
                first_name: Some((*first_name).clone()),
                middle_name: Some((*middle_name).clone()),
                last_name: Some((*last_name).clone()),
            });
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50 py-12 px-4">
            <div class="max-w-md mx-auto space-y-6">
                <h2 class="text-3xl font-extrabold text-gray-900 text-center">{"Profile Settings"}</h2>

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
                        class="w-full py-2 px-4 bg-blue-600 hover:bg-blue-700 text-white rounded-md font-medium disabled:opacity-50"
                        disabled={actions.is_busy()}
                    >
                        { if actions.is_busy() { "Saving..." } else { "Save changes" } }
                    </button>
                </form>

                <p class="text-center text-sm">
                    <Link<Route> to={Route::Dashboard} classes="text-blue-600 hover:underline">
                        {"Back to dashboard"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
