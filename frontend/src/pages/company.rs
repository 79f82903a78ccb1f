//! Company dashboard: overview stats, partner administration and the
//! purchase ledger. Company session required; anyone else is sent back to
//! the login page.

use common::model::partner::{NewPartner, Partner};
use common::model::purchase::Purchase;
use common::requests::{SessionInfo, SessionRole};
use num_format::{Locale, ToFormattedString};
use web_sys::{HtmlInputElement, InputEvent};
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::nav;
use crate::session;
use crate::toast::{toast, ToastVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Partners,
    Purchases,
}

pub enum Msg {
    SessionResolved(Option<SessionInfo>),
    SetTab(Tab),
    PartnersLoaded(Result<Vec<Partner>, String>),
    PurchasesLoaded(Result<Vec<Purchase>, String>),
    ToggleAddForm,
    SetNewName(String),
    SetNewEmail(String),
    SetNewPassword(String),
    SetNewPhone(String),
    SetNewCompany(String),
    SubmitPartner,
    PartnerCreated(Result<Partner, String>),
}

pub struct CompanyPage {
    session: Option<SessionInfo>,
    tab: Tab,
    partners: Vec<Partner>,
    purchases: Vec<Purchase>,
    new_partner: NewPartner,
    show_add_form: bool,
    submitting: bool,
    error: Option<String>,
    loaded: bool,
}

impl Component for CompanyPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        CompanyPage {
            session: None,
            tab: Tab::Overview,
            partners: Vec::new(),
            purchases: Vec::new(),
            new_partner: NewPartner::default(),
            show_add_form: false,
            submitting: false,
            error: None,
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
                if info.role != SessionRole::Company {
                    nav::redirect_to("/login");
                    return false;
                }
                let token = info.token.clone();
                self.session = Some(info);
                self.refresh(ctx, &token);
                true
            }
            Msg::SessionResolved(None) => {
                nav::redirect_to("/login");
                false
            }
            Msg::SetTab(tab) => {
                self.tab = tab;
                true
            }
            Msg::PartnersLoaded(Ok(partners)) => {
                self.partners = partners;
                true
            }
            Msg::PartnersLoaded(Err(e)) => {
                self.error = Some(e);
                true
            }
            Msg::PurchasesLoaded(Ok(purchases)) => {
                self.purchases = purchases;
                true
            }
            Msg::PurchasesLoaded(Err(e)) => {
                self.error = Some(e);
                true
            }
            Msg::ToggleAddForm => {
                self.show_add_form = !self.show_add_form;
                true
            }
            Msg::SetNewName(v) => {
                self.new_partner.name = v;
                true
            }
            Msg::SetNewEmail(v) => {
                self.new_partner.email = v;
                true
            }
            Msg::SetNewPassword(v) => {
                self.new_partner.password = v;
                true
            }
            Msg::SetNewPhone(v) => {
                self.new_partner.phone = if v.is_empty() { None } else { Some(v) };
                true
            }
            Msg::SetNewCompany(v) => {
                self.new_partner.company_name = if v.is_empty() { None } else { Some(v) };
                true
            }
            Msg::SubmitPartner => {
                let Some(session) = &self.session else {
                    return false;
                };
                self.submitting = true;

                let token = session.token.clone();
                let new_partner = self.new_partner.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::create_partner(&token, &new_partner)
                        .await
                        .map_err(|e| e.to_string());
                    link.send_message(Msg::PartnerCreated(result));
                });
                true
            }
            Msg::PartnerCreated(Ok(partner)) => {
                self.submitting = false;
                self.show_add_form = false;
                self.new_partner = NewPartner::default();
                toast(
                    "Partner added",
                    &format!("{} can now log in to the partner portal.", partner.name),
                    ToastVariant::Default,
                );
                self.partners.insert(0, partner);
                true
            }
            Msg::PartnerCreated(Err(e)) => {
                self.submitting = false;
                toast("Error", &e, ToastVariant::Destructive);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div style="max-width:1080px; margin:0 auto; padding:24px;">
                <h1>{"Company Dashboard"}</h1>
                {
                    if let Some(error) = &self.error {
                        html! { <p style="color:#b3261e;">{ error }</p> }
                    } else {
                        html! {}
                    }
                }

                <div style="display:flex; gap:8px; margin-bottom:24px;">
                    { self.tab_button(link, Tab::Overview, "Overview") }
                    { self.tab_button(link, Tab::Partners, "Partners") }
                    { self.tab_button(link, Tab::Purchases, "Purchases") }
                </div>

                {
                    match self.tab {
                        Tab::Overview => self.overview(),
                        Tab::Partners => self.partners_tab(ctx),
                        Tab::Purchases => purchases_table(&self.purchases),
                    }
                }
            </div>
        }
    }
}

impl CompanyPage {
    fn refresh(&self, ctx: &Context<Self>, token: &str) {
        let link = ctx.link().clone();
        let token_partners = token.to_string();
        spawn_local(async move {
            let result = api::list_partners(&token_partners)
                .await
                .map_err(|e| e.to_string());
            link.send_message(Msg::PartnersLoaded(result));
        });

        let link = ctx.link().clone();
        let token_purchases = token.to_string();
        spawn_local(async move {
            let result = api::list_purchases(&token_purchases)
                .await
                .map_err(|e| e.to_string());
            link.send_message(Msg::PurchasesLoaded(result));
        });
    }

    fn tab_button(&self, link: &Scope<Self>, tab: Tab, label: &str) -> Html {
        let active = self.tab == tab;
        html! {
            <button
                onclick={link.callback(move |_| Msg::SetTab(tab))}
                style={format!(
                    "padding:8px 16px; border-radius:6px; border:1px solid #6366f1; cursor:pointer; background:{}; color:{};",
                    if active { "#6366f1" } else { "#fff" },
                    if active { "#fff" } else { "#6366f1" },
                )}
            >
                { label }
            </button>
        }
    }

    fn overview(&self) -> Html {
        let revenue: f64 = self.purchases.iter().map(|p| p.amount).sum();
        let revenue = (revenue.round() as i64).to_formatted_string(&Locale::en);

        html! {
            <div style="display:flex; gap:16px; flex-wrap:wrap;">
                { stat_card("Partners", &self.partners.len().to_string()) }
                { stat_card("Purchases", &self.purchases.len().to_string()) }
                { stat_card("Revenue", &format!("\u{20b9}{}", revenue)) }
            </div>
        }
    }

    fn partners_tab(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div>
                <button
                    onclick={link.callback(|_| Msg::ToggleAddForm)}
                    style="margin-bottom:16px; padding:8px 16px; background:#6366f1; color:#fff; border:none; border-radius:6px; cursor:pointer;"
                >
                    { if self.show_add_form { "Cancel" } else { "Add Partner" } }
                </button>

                { if self.show_add_form { self.add_partner_form(ctx) } else { html! {} } }

                <table style="width:100%; border-collapse:collapse; background:#fff;">
                    <thead>
                        <tr style="text-align:left; border-bottom:2px solid #e0e0e0;">
                            <th style="padding:8px;">{"Name"}</th>
                            <th style="padding:8px;">{"Email"}</th>
                            <th style="padding:8px;">{"Company"}</th>
                            <th style="padding:8px;">{"Status"}</th>
                            <th style="padding:8px;">{"Created"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for self.partners.iter().map(|p| html! {
                                <tr style="border-bottom:1px solid #f0f0f0;">
                                    <td style="padding:8px;">{ &p.name }</td>
                                    <td style="padding:8px;">{ &p.email }</td>
                                    <td style="padding:8px;">{ p.company_name.clone().unwrap_or_default() }</td>
                                    <td style="padding:8px;">{ p.status.clone().unwrap_or_else(|| "active".to_string()) }</td>
                                    <td style="padding:8px;">{ &p.created_at }</td>
                                </tr>
                            })
                        }
                    </tbody>
                </table>
            </div>
        }
    }

    fn add_partner_form(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let incomplete = self.new_partner.name.is_empty()
            || self.new_partner.email.is_empty()
            || self.new_partner.password.is_empty();

        html! {
            <form
                onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::SubmitPartner
                })}
                style="background:#fff; padding:16px; border-radius:8px; margin-bottom:16px; box-shadow:0 2px 8px rgba(0,0,0,0.08);"
            >
                { form_input(link, "Name", &self.new_partner.name, Msg::SetNewName) }
                { form_input(link, "Email", &self.new_partner.email, Msg::SetNewEmail) }
                { form_input(link, "Password", &self.new_partner.password, Msg::SetNewPassword) }
                { form_input(link, "Phone", self.new_partner.phone.as_deref().unwrap_or(""), Msg::SetNewPhone) }
                { form_input(link, "Company name", self.new_partner.company_name.as_deref().unwrap_or(""), Msg::SetNewCompany) }
                <button
                    type="submit"
                    disabled={self.submitting || incomplete}
                    style="padding:8px 16px; background:#6366f1; color:#fff; border:none; border-radius:6px; cursor:pointer;"
                >
                    { if self.submitting { "Saving..." } else { "Create Partner" } }
                </button>
            </form>
        }
    }
}

fn form_input(
    link: &Scope<CompanyPage>,
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

fn stat_card(label: &str, value: &str) -> Html {
    html! {
        <div style="flex:1 1 200px; background:#fff; padding:24px; border-radius:12px; box-shadow:0 2px 12px rgba(0,0,0,0.08);">
            <div style="color:#666; font-size:14px;">{ label }</div>
            <div style="font-size:32px; font-weight:bold;">{ value }</div>
        </div>
    }
}

fn purchases_table(purchases: &[Purchase]) -> Html {
    html! {
        <table style="width:100%; border-collapse:collapse; background:#fff;">
            <thead>
                <tr style="text-align:left; border-bottom:2px solid #e0e0e0;">
                    <th style="padding:8px;">{"Partner"}</th>
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
                            <td style="padding:8px;">{ p.partner_id.clone().unwrap_or_default() }</td>
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
