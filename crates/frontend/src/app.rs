use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::{RequireSession, SessionProvider, use_session};
use crate::components::LoadingSpinner;
use crate::pages::{DashboardPage, LoginPage, ProfilePage, RegisterPage};

/// Application routes
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <Switch<Route> render={switch} />
            </SessionProvider>
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomeRedirect /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::Dashboard => html! {
            <RequireSession>
                <DashboardPage />
            </RequireSession>
        },
        Route::Profile => html! {
            <RequireSession>
                <ProfilePage />
            </RequireSession>
        },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

/// Landing route: forward to the dashboard or the login page depending
/// on how the session check resolved
#[function_component(HomeRedirect)]
fn home_redirect() -> Html {
    let session = use_session();

    if session.is_loading() {
        return html! {
            <div class="min-h-screen flex items-center justify-center">
                <LoadingSpinner />
            </div>
        };
    }

    if session.user().is_some() {
        html! { <Redirect<Route> to={Route::Dashboard} /> }
    } else {
        html! { <Redirect<Route> to={Route::Login} /> }
    }
}
