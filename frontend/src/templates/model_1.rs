//! Layout 1: centered classic hero with a framed story card.

use common::model::wedding::WeddingRecord;
use yew::prelude::*;

use super::{design_style, story_html};

pub fn render(record: &WeddingRecord) -> Html {
    let couple = &record.couple;
    html! {
        <div style={design_style(record)} class="wedding-page model-1">
            <section style="text-align:center; padding:96px 24px 48px;">
                <p style="letter-spacing:4px; text-transform:uppercase; font-size:13px;">
                    {"We are getting married"}
                </p>
                <h1 style="font-size:56px; margin:16px 0; color:var(--accent);">
                    { format!("{} & {}", couple.bride_name, couple.groom_name) }
                </h1>
                {
                    if couple.wedding_quote.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <blockquote style="font-style:italic; max-width:560px; margin:0 auto;">
                                { format!("\u{201c}{}\u{201d}", couple.wedding_quote) }
                            </blockquote>
                        }
                    }
                }
            </section>
            {
                if record.story.content.is_empty() {
                    html! {}
                } else {
                    html! {
                        <section style="max-width:640px; margin:0 auto 96px; padding:32px; border:1px solid var(--accent); border-radius:8px;">
                            <h2 style="text-align:center; color:var(--accent);">
                                { if record.story.title.is_empty() { "Our Story".to_string() } else { record.story.title.clone() } }
                            </h2>
                            { story_html(&record.story.content) }
                        </section>
                    }
                }
            }
        </div>
    }
}
