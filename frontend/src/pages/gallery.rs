//! Public gallery of generated wedding sites.

use common::model::website::WebsiteSummary;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

pub enum Msg {
    Loaded(Result<Vec<WebsiteSummary>, String>),
}

pub struct GalleryPage {
    websites: Vec<WebsiteSummary>,
    loaded: bool,
}

impl Component for GalleryPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        GalleryPage {
            websites: Vec::new(),
            loaded: false,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::list_websites().await.map_err(|e| e.to_string());
                link.send_message(Msg::Loaded(result));
            });
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(websites)) => {
                self.websites = websites;
                true
            }
            Msg::Loaded(Err(e)) => {
                gloo_console::error!(format!("Error fetching websites: {}", e));
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div style="min-height:100vh; background:#faf7f2;">
                <section style="text-align:center; padding:64px 24px 32px;">
                    <h1 style="font-size:40px; margin-bottom:16px;">{"Wedding Website Gallery"}</h1>
                    <p style="color:#666; max-width:640px; margin:0 auto;">
                        {"Explore real wedding websites created with Matson. Click any card to view the live site."}
                    </p>
                </section>

                <section style="max-width:1080px; margin:0 auto; padding:24px;">
                    <div style="display:grid; grid-template-columns:repeat(auto-fill, minmax(280px, 1fr)); gap:24px;">
                        { for self.websites.iter().map(website_card) }
                    </div>
                </section>
            </div>
        }
    }
}

fn website_card(site: &WebsiteSummary) -> Html {
    let url = site.url();
    html! {
        <div style="background:#fff; border-radius:12px; overflow:hidden; box-shadow:0 2px 12px rgba(0,0,0,0.08);">
            <div style="padding:24px;">
                <h3 style="margin:0 0 8px;">
                    { format!("{} & {}", site.bride_name, site.groom_name) }
                </h3>
                <p style="color:#666; font-size:14px; margin:0 0 16px; overflow:hidden; text-overflow:ellipsis;">
                    { format!("{}.matson.app", site.website_name) }
                </p>
                <a
                    href={url}
                    target="_blank"
                    rel="noopener noreferrer"
                    style="display:inline-block; padding:8px 20px; background:#6366f1; color:#fff; border-radius:20px; text-decoration:none;"
                >
                    {"Visit Website"}
                </a>
            </div>
        </div>
    }
}
