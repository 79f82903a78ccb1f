//! Template sidebar: the form controller's surface.
//!
//! Template cards update the selection; the text fields merge into the
//! draft without saving; the color and font pickers are instant-apply and
//! save immediately, bypassing the save button's "unchanged" gate. The save
//! button is disabled while a save is in flight or when the selection
//! matches the persisted template.

use common::model::draft::{DraftPatch, EditableDraft};
use common::model::template::{TemplateKey, TEMPLATES};
use common::model::wedding::{ColorScheme, FontFamily};
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TemplateSidebarProps {
    pub selected: TemplateKey,
    pub persisted: TemplateKey,
    pub draft: EditableDraft,
    pub saving: bool,
    pub on_select: Callback<TemplateKey>,
    pub on_edit: Callback<DraftPatch>,
    pub on_edit_save: Callback<DraftPatch>,
    pub on_save: Callback<()>,
}

pub struct TemplateSidebar;

impl Component for TemplateSidebar {
    type Message = ();
    type Properties = TemplateSidebarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        TemplateSidebar
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <aside class="template-sidebar" style="width:280px; overflow-y:auto; padding:16px; background:#fafafa; border-right:1px solid #e0e0e0;">
                <div style="font-weight:bold; margin-bottom:8px;">{"Choose a Template"}</div>
                <div style="display:flex; flex-direction:column; gap:12px;">
                    { for TEMPLATES.iter().map(|t| template_card(ctx, t.key.clone(), t.label, t.preview_url)) }
                </div>

                { form_fields(ctx) }
                { design_pickers(ctx) }

                <button
                    onclick={props.on_save.reform(|_| ())}
                    disabled={props.saving || props.selected == props.persisted}
                    style="width:100%; padding:10px; margin-top:16px; background:#6366f1; color:#fff; border:none; border-radius:6px; font-weight:bold; cursor:pointer;"
                >
                    { if props.saving { "Saving..." } else { "Save Template" } }
                </button>
            </aside>
        }
    }
}

fn template_card(
    ctx: &Context<TemplateSidebar>,
    key: TemplateKey,
    label: &str,
    preview_url: &str,
) -> Html {
    let props = ctx.props();
    let is_selected = props.selected == key;
    let is_current = props.persisted == key;
    let border = if is_selected {
        "3px solid #6366f1"
    } else {
        "1px solid #ccc"
    };

    let on_select = props.on_select.clone();
    let card_key = key.clone();
    let onclick = Callback::from(move |_| on_select.emit(card_key.clone()));

    html! {
        <div
            {onclick}
            style={format!(
                "border:{}; border-radius:8px; padding:8px; cursor:pointer; text-align:center; position:relative; background:{}; pointer-events:{};",
                border,
                if is_selected { "#f0f4ff" } else { "#fff" },
                if props.saving { "none" } else { "auto" },
            )}
        >
            <img
                src={preview_url.to_string()}
                alt={format!("{} preview", label)}
                style="width:120px; height:70px; object-fit:cover; border-radius:4px;"
            />
            <div style="font-weight:bold; font-size:14px;">{ label }</div>
            {
                if is_current {
                    html! {
                        <span style="position:absolute; top:8px; right:8px; background:#6366f1; color:#fff; border-radius:50%; width:22px; height:22px; display:flex; align-items:center; justify-content:center;">
                            {"\u{2713}"}
                        </span>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn form_fields(ctx: &Context<TemplateSidebar>) -> Html {
    let props = ctx.props();
    let draft = &props.draft;

    html! {
        <div style="margin-top:24px;">
            <div style="font-weight:bold; margin-bottom:8px;">{"Couple"}</div>
            { text_input(ctx, "Groom's name", &draft.couple.groom_name, DraftPatch::groom_name) }
            { text_input(ctx, "Bride's name", &draft.couple.bride_name, DraftPatch::bride_name) }
            { text_input(ctx, "Wedding quote", &draft.couple.wedding_quote, DraftPatch::wedding_quote) }

            <div style="font-weight:bold; margin:16px 0 8px;">{"Our Story"}</div>
            { text_input(ctx, "Title", &draft.story.title, DraftPatch::story_title) }
            {
                story_textarea(ctx, &draft.story.content)
            }
        </div>
    }
}

fn text_input(
    ctx: &Context<TemplateSidebar>,
    placeholder: &str,
    value: &str,
    patch: fn(String) -> DraftPatch,
) -> Html {
    let on_edit = ctx.props().on_edit.clone();
    let oninput = Callback::from(move |e: InputEvent| {
        let value = e.target_unchecked_into::<HtmlInputElement>().value();
        on_edit.emit(patch(value));
    });
    html! {
        <input
            type="text"
            placeholder={placeholder.to_string()}
            value={value.to_string()}
            {oninput}
            style="width:100%; margin-bottom:8px; padding:6px 8px; border:1px solid #ccc; border-radius:4px;"
        />
    }
}

fn story_textarea(ctx: &Context<TemplateSidebar>, value: &str) -> Html {
    let on_edit = ctx.props().on_edit.clone();
    let oninput = Callback::from(move |e: InputEvent| {
        let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
        on_edit.emit(DraftPatch::story_content(value));
    });
    html! {
        <textarea
            placeholder="Tell your story (markdown supported)"
            value={value.to_string()}
            {oninput}
            rows={5}
            style="width:100%; padding:6px 8px; border:1px solid #ccc; border-radius:4px; resize:vertical;"
        />
    }
}

fn design_pickers(ctx: &Context<TemplateSidebar>) -> Html {
    let props = ctx.props();

    let on_scheme = props.on_edit_save.clone();
    let onchange_scheme = Callback::from(move |e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        if let Some(scheme) = ColorScheme::parse(&value) {
            on_scheme.emit(DraftPatch::color_scheme(scheme));
        }
    });

    let on_font = props.on_edit_save.clone();
    let onchange_font = Callback::from(move |e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        if let Some(font) = FontFamily::parse(&value) {
            on_font.emit(DraftPatch::font_family(font));
        }
    });

    html! {
        <div style="margin-top:16px;">
            <div style="font-weight:bold; margin-bottom:8px;">{"Design"}</div>
            <label style="display:block; font-size:13px; margin-bottom:4px;">{"Color scheme"}</label>
            <select onchange={onchange_scheme} style="width:100%; margin-bottom:8px; padding:6px;">
                {
                    for ColorScheme::ALL.iter().map(|scheme| html! {
                        <option
                            value={scheme.as_str()}
                            selected={*scheme == props.draft.color_scheme}
                        >
                            { scheme.as_str() }
                        </option>
                    })
                }
            </select>
            <label style="display:block; font-size:13px; margin-bottom:4px;">{"Heading font"}</label>
            <select onchange={onchange_font} style="width:100%; padding:6px;">
                {
                    for FontFamily::ALL.iter().map(|font| html! {
                        <option
                            value={font.as_str()}
                            selected={*font == props.draft.font_family}
                        >
                            { font.as_str() }
                        </option>
                    })
                }
            </select>
        </div>
    }
}
