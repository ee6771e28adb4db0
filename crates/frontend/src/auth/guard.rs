//! Session guard component for protected routes

use yew::prelude::*;
use yew_router::prelude::*;

use super::context::{SessionState, use_session};
use crate::app::Route;
use crate::components::LoadingSpinner;

/// RequireSession props
#[derive(Properties, PartialEq)]
pub struct RequireSessionProps {
    pub children: Children,
}

/// Guard that shows a spinner while the silent session check runs and
/// bounces to the login page when it resolves unauthenticated
#[function_component(RequireSession)]
pub fn require_session(props: &RequireSessionProps) -> Html {
    let session = use_session();

    match &session.state {
        SessionState::Loading => html! {
            <div class="min-h-screen flex items-center justify-center">
                <LoadingSpinner text={Some("Checking session...".to_string())} />
            </div>
        },
        SessionState::Authenticated(_) => html! { <>{ props.children.clone() }</> },
        SessionState::Unauthenticated => html! { <Redirect<Route> to={Route::Login} /> },
    }
}
