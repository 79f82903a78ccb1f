//! Template registry and the dynamic page component that resolves a key
//! into one of the fixed layouts.
//!
//! Layouts are treated as remote modules: obtaining a renderer is
//! asynchronous and can fail, and the dynamic page tracks that lifecycle
//! through `common::resolver`. The registry itself is pure and total over
//! the closed key set.

mod dynamic_page;
mod model_1;
mod model_2;
mod model_3;
mod model_4;

pub use dynamic_page::DynamicWeddingPage;

use common::model::template::{lookup, TemplateKey};
use common::model::wedding::WeddingRecord;
use gloo_timers::future::TimeoutFuture;
use pulldown_cmark::{html, Parser};
use yew::virtual_dom::AttrValue;
use yew::Html;

/// A loaded layout: a function from the normalized record to its page.
pub type TemplateRenderer = fn(&WeddingRecord) -> Html;

fn renderer_for(key: &TemplateKey) -> Option<TemplateRenderer> {
    match key {
        TemplateKey::Model1 => Some(model_1::render),
        TemplateKey::Model2 => Some(model_2::render),
        TemplateKey::Model3 => Some(model_3::render),
        TemplateKey::Model4 => Some(model_4::render),
        TemplateKey::Unknown(_) => None,
    }
}

/// Obtains the renderer for `key`, resolving on the next tick of the event
/// loop. A missing key is an error value, not a fault; callers route it to
/// the resolver's failed state.
pub async fn load(key: TemplateKey) -> Result<TemplateRenderer, String> {
    if lookup(&key).is_none() {
        return Err(format!("Template {} not found in available templates", key));
    }
    TimeoutFuture::new(0).await;
    renderer_for(&key).ok_or_else(|| format!("Template {} has no renderer", key))
}

/// Renders the couple's story markdown, shared by all four layouts.
fn story_html(content: &str) -> Html {
    let parser = Parser::new(content);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    Html::from_html_unchecked(AttrValue::from(html_output))
}

/// Inline style carrying the record's design choices into a layout.
fn design_style(record: &WeddingRecord) -> String {
    let (accent, background, text) = record.color_scheme.palette();
    format!(
        "--accent:{}; background:{}; color:{}; font-family:{};",
        accent,
        background,
        text,
        record.font_family.css_stack()
    )
}
