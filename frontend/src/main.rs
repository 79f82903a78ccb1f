use crate::app::App;

mod api;
mod app;
mod nav;
mod pages;
mod session;
mod templates;
mod toast;

fn main() {
    yew::Renderer::<App>::new().render();
}
