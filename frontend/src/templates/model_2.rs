//! Layout 2: split banner, names on the left, quote and story on the right.

use common::model::wedding::WeddingRecord;
use yew::prelude::*;

use super::{design_style, story_html};

pub fn render(record: &WeddingRecord) -> Html {
    let couple = &record.couple;
    html! {
        <div style={design_style(record)} class="wedding-page model-2">
            <div style="display:flex; flex-wrap:wrap; min-height:70vh;">
                <section style="flex:1 1 320px; display:flex; flex-direction:column; justify-content:center; padding:48px; background:var(--accent); color:#fff;">
                    <h1 style="font-size:44px; margin:0;">{ &couple.bride_name }</h1>
                    <p style="font-size:28px; margin:8px 0;">{"&"}</p>
                    <h1 style="font-size:44px; margin:0;">{ &couple.groom_name }</h1>
                </section>
                <section style="flex:2 1 420px; padding:48px;">
                    {
                        if couple.wedding_quote.is_empty() {
                            html! {}
                        } else {
                            html! {
                                <p style="font-size:20px; font-style:italic; border-left:3px solid var(--accent); padding-left:16px;">
                                    { &couple.wedding_quote }
                                </p>
                            }
                        }
                    }
                    {
                        if record.story.content.is_empty() {
                            html! {}
                        } else {
                            html! {
                                <>
                                    <h2>{ if record.story.title.is_empty() { "Our Story".to_string() } else { record.story.title.clone() } }</h2>
                                    { story_html(&record.story.content) }
                                </>
                            }
                        }
                    }
                </section>
            </div>
        </div>
    }
}
