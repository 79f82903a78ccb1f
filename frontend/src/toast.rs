//! Notification collaborator: temporary toast messages injected into the
//! DOM. Fire-and-forget; the toast removes itself after a few seconds.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

/// Displays a toast with a bold title and a description line.
pub fn toast(title: &str, description: &str, variant: ToastVariant) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_inner_html(&format!(
                    "<div style=\"font-weight:bold; margin-bottom:2px;\">{}</div><div>{}</div>",
                    escape_html(title),
                    escape_html(description)
                ));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                let background = match variant {
                    ToastVariant::Default => "rgba(0, 0, 0, 0.85)",
                    ToastVariant::Destructive => "rgba(179, 38, 30, 0.95)",
                };
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", background).ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("max-width", "420px").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3500).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Escapes special HTML characters before injecting user-derived text into
/// the toast markup.
fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
