mod app;
mod components;
mod layout;
mod navigation;
mod pages;

use app::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
