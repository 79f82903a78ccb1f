//! Resolves the selected template key into a rendered page.
//!
//! The component re-requests whenever the key prop changes. Completions are
//! committed through the resolver's staleness guard, so a slow load that was
//! superseded by a newer selection can never overwrite it. There is no
//! abort: stale results are simply ignored.

use common::resolver::{RequestToken, ResolveState, TemplateResolver};
use common::model::template::TemplateKey;
use common::model::wedding::WeddingRecord;
use gloo_console::{debug, error};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::{load, TemplateRenderer};
use crate::nav;

#[derive(Properties, PartialEq)]
pub struct DynamicWeddingPageProps {
    pub template: TemplateKey,
    pub record: WeddingRecord,
}

pub enum Msg {
    Loaded(RequestToken, TemplateRenderer),
    LoadFailed(RequestToken),
}

pub struct DynamicWeddingPage {
    resolver: TemplateResolver<TemplateRenderer>,
}

impl Component for DynamicWeddingPage {
    type Message = Msg;
    type Properties = DynamicWeddingPageProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut page = DynamicWeddingPage {
            resolver: TemplateResolver::new(),
        };
        page.request(ctx, ctx.props().template.clone());
        page
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().template != old_props.template {
            self.request(ctx, ctx.props().template.clone());
        }
        true
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(token, renderer) => {
                let committed = self.resolver.succeed(token, renderer);
                if !committed {
                    debug!("stale template load ignored");
                }
                committed
            }
            Msg::LoadFailed(token) => self.resolver.fail(token),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match self.resolver.state() {
            ResolveState::Ready(_, renderer) => {
                html! { <main>{ renderer(&ctx.props().record) }</main> }
            }
            ResolveState::Idle | ResolveState::Loading(_) => {
                html! { <div class="template-loading">{"Loading..."}</div> }
            }
            ResolveState::Failed(key) => failed_panel(key),
        }
    }
}

impl DynamicWeddingPage {
    fn request(&mut self, ctx: &Context<Self>, key: TemplateKey) {
        let token = self.resolver.request(key.clone());
        let link = ctx.link().clone();
        spawn_local(async move {
            match load(key).await {
                Ok(renderer) => link.send_message(Msg::Loaded(token, renderer)),
                Err(e) => {
                    error!(format!("Failed to load template: {}", e));
                    link.send_message(Msg::LoadFailed(token));
                }
            }
        });
    }
}

fn failed_panel(key: &TemplateKey) -> Html {
    html! {
        <div class="template-error">
            <h2>{"Oops! Something went wrong"}</h2>
            <p>{ format!("The layout \"{}\" could not be loaded.", key) }</p>
            <div class="template-error-actions">
                <button onclick={Callback::from(|_| nav::reload())}>
                    {"Refresh Page"}
                </button>
                <button onclick={Callback::from(|_| nav::redirect_to("/contact"))}>
                    {"Contact Support"}
                </button>
            </div>
        </div>
    }
}
