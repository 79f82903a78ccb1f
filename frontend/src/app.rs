//! Root component: mounts the page matching the location path.
//!
//! Routing proper (history, links) is outside the core; page transitions go
//! through `nav::redirect_to`, so the path only needs to be read once at
//! startup.

use yew::{html, Component, Context, Html};

use crate::nav;
use crate::pages::company::CompanyPage;
use crate::pages::editor::EditorPage;
use crate::pages::gallery::GalleryPage;
use crate::pages::login::LoginPage;
use crate::pages::partner::PartnerPage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Editor,
    Company,
    Partner(String),
    Gallery,
}

impl Route {
    fn from_path(path: &str) -> Route {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] | ["login"] => Route::Login,
            ["wedding", "edit"] => Route::Editor,
            ["dashboard", "company"] => Route::Company,
            ["partner", id] => Route::Partner((*id).to_string()),
            ["websites"] => Route::Gallery,
            _ => Route::Login,
        }
    }
}

pub struct App {
    route: Route,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        App {
            route: Route::from_path(&nav::current_path()),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match &self.route {
            Route::Login => html! { <LoginPage /> },
            Route::Editor => html! { <EditorPage /> },
            Route::Company => html! { <CompanyPage /> },
            Route::Partner(id) => html! { <PartnerPage partner_id={id.clone()} /> },
            Route::Gallery => html! { <GalleryPage /> },
        }
    }
}
