// src/main.rs
mod app;
mod content;
mod error;
mod home;
mod session;
mod waitlist;

fn main() {
    gloo::console::log!("The Station: starting");
    yew::Renderer::<app::App>::new().render();
}
