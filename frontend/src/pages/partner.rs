//! Partner dashboard: customer intake form and purchase history.
//!
//! Submitting the form creates the couple's account and their seeded
//! wedding record; the WhatsApp number becomes their initial password.

use common::model::purchase::Purchase;
use common::requests::{IntakeRequest, SessionInfo, SessionRole};
use web_sys::{HtmlInputElement, InputEvent};
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::nav;
use crate::session;
use crate::toast::{toast, ToastVariant};

#[derive(Properties, PartialEq)]
pub struct PartnerPageProps {
    /// Partner id from the URL; display only, authorization comes from the
    /// session.
    pub partner_id: String,
}

pub enum Msg {
    SessionResolved(Option<SessionInfo>),
    PurchasesLoaded(Result<Vec<Purchase>, String>),
    SetGroom(String),
    SetBride(String),
    SetWhatsapp(String),
    SetEmail(String),
    Submit,
    Submitted(Result<common::requests::IntakeResponse, String>),
}

pub struct PartnerPage {
    session: Option<SessionInfo>,
    form: IntakeRequest,
    submitting: bool,
    message: Option<String>,
    purchases: Vec<Purchase>,
    loaded: bool,
}

impl Component for PartnerPage {
    type Message = Msg;
    type Properties = PartnerPageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PartnerPage {
            session: None,
            form: IntakeRequest::default(),
            submitting: false,
            message: None,
            purchases: Vec::new(),
            loaded: false,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                let session = session::restore().await;
                link.send_message(Msg::SessionResolved(session));
            });
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SessionResolved(Some(info)) => {
                if !matches!(info.role, SessionRole::Partner { .. }) {
                    nav::redirect_to("/login");
                    return false;
                }
                let token = info.token.clone();
                self.session = Some(info);

                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::list_purchases(&token)
                        .await
                        .map_err(|e| e.to_string());
                    link.send_message(Msg::PurchasesLoaded(result));
                });
                true
            }
            Msg::SessionResolved(None) => {
                nav::redirect_to("/login");
                false
            }
            Msg::PurchasesLoaded(Ok(purchases)) => {
                self.purchases = purchases;
                true
            }
            Msg::PurchasesLoaded(Err(e)) => {
                gloo_console::error!(format!("Failed to load purchase history: {}", e));
                true
            }
            Msg::SetGroom(value) => {
                self.form.groom_name = value;
                true
            }
            Msg::SetBride(value) => {
                self.form.bride_name = value;
                true
            }
            Msg::SetWhatsapp(value) => {
                self.form.whatsapp_number = value;
                true
            }
            Msg::SetEmail(value) => {
                self.form.email = value;
                true
            }
            Msg::Submit => {
                let Some(session) = &self.session else {
                    return false;
                };
                self.submitting = true;
                self.message = None;

                let token = session.token.clone();
                let intake = self.form.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::submit_intake(&token, &intake)
                        .await
                        .map_err(|e| e.to_string());
                    link.send_message(Msg::Submitted(result));
                });
                true
            }
            Msg::Submitted(Ok(response)) => {
                self.submitting = false;
                self.form = IntakeRequest::default();
                self.message = Some(format!(
                    "Wedding data submitted successfully! The couple's site will be at {}.matson.app",
                    response.website_name
                ));
                toast(
                    "Success",
                    "Wedding data submitted successfully! We will contact you soon.",
                    ToastVariant::Default,
                );

                // the new purchase shows up in the history
                if let Some(session) = &self.session {
                    let token = session.token.clone();
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let result = api::list_purchases(&token)
                            .await
                            .map_err(|e| e.to_string());
                        link.send_message(Msg::PurchasesLoaded(result));
                    });
                }
                true
            }
            Msg::Submitted(Err(e)) => {
                self.submitting = false;
                gloo_console::error!(format!("Error submitting wedding data: {}", e));
                self.message = Some(format!("Error submitting form: {}", e));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let partner_name = match &self.session {
            Some(SessionInfo {
                role: SessionRole::Partner { name, .. },
                ..
            }) => name.clone(),
            _ => ctx.props().partner_id.clone(),
        };
        let incomplete = self.form.groom_name.is_empty()
            || self.form.bride_name.is_empty()
            || self.form.whatsapp_number.is_empty()
            || self.form.email.is_empty();

        html! {
            <div style="max-width:960px; margin:0 auto; padding:24px;">
                <h1>{ format!("{} | Partner Dashboard", partner_name) }</h1>

                <section style="background:#fff; padding:24px; border-radius:12px; box-shadow:0 2px 12px rgba(0,0,0,0.08); margin-bottom:32px;">
                    <h2>{"New Wedding Website"}</h2>
                    <form onsubmit={link.callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::Submit
                    })}>
                        { labeled_input(link, "Groom's name", &self.form.groom_name, Msg::SetGroom) }
                        { labeled_input(link, "Bride's name", &self.form.bride_name, Msg::SetBride) }
                        { labeled_input(link, "WhatsApp number", &self.form.whatsapp_number, Msg::SetWhatsapp) }
                        { labeled_input(link, "Email", &self.form.email, Msg::SetEmail) }

                        <button
                            type="submit"
                            disabled={self.submitting || incomplete}
                            style="padding:10px 24px; background:#6366f1; color:#fff; border:none; border-radius:6px; font-weight:bold; cursor:pointer;"
                        >
                            { if self.submitting { "Submitting..." } else { "Create Website" } }
                        </button>
                    </form>
                    {
                        if let Some(message) = &self.message {
                            html! { <p style="margin-top:12px; color:#444;">{ message }</p> }
                        } else {
                            html! {}
                        }
                    }
                </section>

                <section>
                    <h2>{"Purchase History"}</h2>
                    {
                        if self.purchases.is_empty() {
                            html! { <p style="color:#666;">{"No purchases yet."}</p> }
                        } else {
                            purchases_table(&self.purchases)
                        }
                    }
                </section>
            </div>
        }
    }
}

fn labeled_input(
    link: &Scope<PartnerPage>,
    label: &str,
    value: &str,
    make_msg: fn(String) -> Msg,
) -> Html {
    html! {
        <div style="margin-bottom:12px;">
            <label style="display:block; font-size:14px; margin-bottom:4px;">{ label }</label>
            <input
                type="text"
                value={value.to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    make_msg(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
                style="width:100%; max-width:420px; padding:8px; border:1px solid #ccc; border-radius:6px;"
            />
        </div>
    }
}

fn purchases_table(purchases: &[Purchase]) -> Html {
    html! {
        <table style="width:100%; border-collapse:collapse; background:#fff;">
            <thead>
                <tr style="text-align:left; border-bottom:2px solid #e0e0e0;">
                    <th style="padding:8px;">{"Template"}</th>
                    <th style="padding:8px;">{"Type"}</th>
                    <th style="padding:8px;">{"Amount"}</th>
                    <th style="padding:8px;">{"Status"}</th>
                    <th style="padding:8px;">{"Date"}</th>
                </tr>
            </thead>
            <tbody>
                {
                    for purchases.iter().map(|p| html! {
                        <tr style="border-bottom:1px solid #f0f0f0;">
                            <td style="padding:8px;">{ &p.template_id }</td>
                            <td style="padding:8px;">{ &p.purchase_type }</td>
                            <td style="padding:8px;">{ format!("\u{20b9}{:.2}", p.amount) }</td>
                            <td style="padding:8px;">{ &p.status }</td>
                            <td style="padding:8px;">{ &p.created_at }</td>
                        </tr>
                    })
                }
            </tbody>
        </table>
    }
}
