//! Post-login landing page

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::auth::{use_session_actions, use_session_user};

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let actions = use_session_actions();
    let user = use_session_user();

    let on_logout = {
        let actions = actions.clone();
        Callback::from(move |_| {
            actions.logout();
        })
    };

    let greeting = user
        .as_ref()
        .map(|user| {
            user.first_name
                .clone()
                .unwrap_or_else(|| user.username.clone())
        })
        .unwrap_or_default();

    html! {
        <div class="min-h-screen bg-gray-50 py-12 px-4">
            <div class="max-w-2xl mx-auto space-y-6">
                <div class="flex items-center justify-between">
                    <h2 class="text-3xl font-extrabold text-gray-900">
                        { format!("Welcome, {greeting}") }
                    </h2>
                    <button
                        class="py-2 px-4 bg-gray-200 hover:bg-gray-300 text-gray-800 rounded-md font-medium"
                        onclick={on_logout}
                        disabled={actions.is_busy()}
                    >
                        {"Sign out"}
                    </button>
                </div>

                <div class="bg-white rounded-lg shadow p-6 space-y-2">
                    if let Some(user) = &user {
                        <p class="text-gray-600">{ format!("Username: {}", user.username) }</p>
                        <p class="text-gray-600">{ format!("Email: {}", user.email) }</p>
                    }
                    <Link<Route> to={Route::Profile} classes="text-blue-600 hover:underline">
                        {"Edit profile"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
