mod app;
mod auth;
mod client;
mod components;
mod config;
mod pages;
mod token_store;

use app::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
