//! Layout 3: minimal single card.

use common::model::wedding::WeddingRecord;
use yew::prelude::*;

use super::{design_style, story_html};

pub fn render(record: &WeddingRecord) -> Html {
    let couple = &record.couple;
    html! {
        <div style={design_style(record)} class="wedding-page model-3">
            <div style="max-width:520px; margin:64px auto; padding:48px; box-shadow:0 4px 24px rgba(0,0,0,0.12); border-radius:12px; text-align:center;">
                <h1 style="font-size:32px;">
                    { format!("{} \u{2661} {}", couple.groom_name, couple.bride_name) }
                </h1>
                {
                    if couple.wedding_quote.is_empty() {
                        html! {}
                    } else {
                        html! { <p style="color:var(--accent);">{ &couple.wedding_quote }</p> }
                    }
                }
                {
                    if record.story.content.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <div style="text-align:left; margin-top:24px;">
                                { story_html(&record.story.content) }
                            </div>
                        }
                    }
                }
            </div>
        </div>
    }
}
