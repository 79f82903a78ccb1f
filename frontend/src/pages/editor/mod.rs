//! Wedding editor: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `EditorPage`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - On first render, resolve the session and kick off the initial data
//!   fetch; tear down the login-redirect timer when the page goes away.

use yew::platform::spawn_local;
use yew::prelude::*;

mod helpers;
mod messages;
mod sidebar;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::EditorPage;

use crate::session;

impl Component for EditorPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        EditorPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            spawn_local(async move {
                let session = session::restore().await;
                link.send_message(Msg::AuthResolved(session));
            });
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // dropping the handle cancels a still-pending login redirect
        self.redirect_timer.take();
    }
}
