//! Layout 4: full-bleed hero with a quote footer. The library default.

use common::model::wedding::WeddingRecord;
use yew::prelude::*;

use super::{design_style, story_html};

pub fn render(record: &WeddingRecord) -> Html {
    let couple = &record.couple;
    html! {
        <div style={design_style(record)} class="wedding-page model-4">
            <section style="min-height:80vh; display:flex; flex-direction:column; align-items:center; justify-content:center; padding:24px; text-align:center;">
                <h1 style="font-size:64px; margin:0;">
                    { format!("{} & {}", couple.bride_name, couple.groom_name) }
                </h1>
                <div style="width:80px; height:2px; background:var(--accent); margin:24px auto;"></div>
                <p style="letter-spacing:2px; text-transform:uppercase; font-size:14px;">
                    {"Together with their families"}
                </p>
            </section>
            {
                if record.story.content.is_empty() {
                    html! {}
                } else {
                    html! {
                        <section style="max-width:680px; margin:0 auto; padding:0 24px 48px;">
                            <h2 style="color:var(--accent); text-align:center;">
                                { if record.story.title.is_empty() { "Our Story".to_string() } else { record.story.title.clone() } }
                            </h2>
                            { story_html(&record.story.content) }
                        </section>
                    }
                }
            }
            {
                if couple.wedding_quote.is_empty() {
                    html! {}
                } else {
                    html! {
                        <footer style="padding:32px; text-align:center; background:var(--accent); color:#fff; font-style:italic;">
                            { &couple.wedding_quote }
                        </footer>
                    }
                }
            }
        </div>
    }
}
