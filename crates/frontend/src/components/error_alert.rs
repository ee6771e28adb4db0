//! Inline error banner for form submission failures

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ErrorAlertProps {
    pub message: String,
}

#[function_component(ErrorAlert)]
pub fn error_alert(props: &ErrorAlertProps) -> Html {
    html! {
        <div class="bg-red-50 border border-red-200 rounded-lg p-3 text-center">
            <p class="text-red-700 text-sm m-0">{ &props.message }</p>
        </div>
    }
}
