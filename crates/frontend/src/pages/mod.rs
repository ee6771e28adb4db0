//! Pages

mod dashboard;
mod login;
mod profile;
mod register;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use profile::ProfilePage;
pub use register::RegisterPage;

use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Bind a text input to a state handle
fn bind_input(handle: &UseStateHandle<String>) -> Callback<InputEvent> {
    let handle = handle.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        handle.set(input.value());
    })
}
