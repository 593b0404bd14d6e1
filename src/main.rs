mod app;
mod commands;
mod components;
mod deck;
mod dom;
mod pages;
mod session_context;
mod theme;

use app::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
