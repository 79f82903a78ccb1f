//! Partner login page.
//!
//! One form serves all three account kinds: the company account lands on
//! the company dashboard, partners on their own dashboard, couples on the
//! wedding editor. Failures render an inline error instead of a toast.

use common::requests::{LoginRequest, SessionRole};
use web_sys::{HtmlInputElement, InputEvent};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::nav;
use crate::session;

pub enum Msg {
    SetEmail(String),
    SetPassword(String),
    Submit,
    Done(Result<common::requests::SessionInfo, String>),
}

pub struct LoginPage {
    credentials: LoginRequest,
    error: Option<String>,
    submitting: bool,
}

impl Component for LoginPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        LoginPage {
            credentials: LoginRequest::default(),
            error: None,
            submitting: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetEmail(email) => {
                self.credentials.email = email;
                true
            }
            Msg::SetPassword(password) => {
                self.credentials.password = password;
                true
            }
            Msg::Submit => {
                if self.credentials.email.is_empty() || self.credentials.password.is_empty() {
                    return false;
                }
                self.submitting = true;
                self.error = None;

                let request = self.credentials.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::login(&request).await.map_err(|e| e.to_string());
                    link.send_message(Msg::Done(result));
                });
                true
            }
            Msg::Done(Ok(info)) => {
                session::establish(&info);
                match &info.role {
                    SessionRole::Company => nav::redirect_to("/dashboard/company"),
                    SessionRole::Partner { id, .. } => {
                        nav::redirect_to(&format!("/partner/{}", id))
                    }
                    SessionRole::Couple { .. } => nav::redirect_to("/wedding/edit"),
                }
                false
            }
            Msg::Done(Err(_)) => {
                self.submitting = false;
                self.error = Some("Invalid partner credentials".to_string());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let disabled = self.submitting
            || self.credentials.email.is_empty()
            || self.credentials.password.is_empty();

        html! {
            <div style="min-height:100vh; display:flex; align-items:center; justify-content:center; background:#faf7f2;">
                <div style="width:100%; max-width:400px; padding:32px; background:#fff; border-radius:12px; box-shadow:0 4px 24px rgba(0,0,0,0.1);">
                    <div style="text-align:center; margin-bottom:24px;">
                        <h1 style="margin:0 0 8px;">{"Partner Login"}</h1>
                        <p style="color:#666; margin:0;">{"Access your Matson wedding portfolio"}</p>
                    </div>

                    <form onsubmit={link.callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::Submit
                    })}>
                        <label style="display:block; font-size:14px; margin-bottom:4px;">
                            {"Email / Partner Name"}
                        </label>
                        <input
                            type="text"
                            placeholder="Enter your email or partner name"
                            value={self.credentials.email.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetEmail(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                            style="width:100%; margin-bottom:16px; padding:8px; border:1px solid #ccc; border-radius:6px;"
                        />

                        <label style="display:block; font-size:14px; margin-bottom:4px;">
                            {"Password"}
                        </label>
                        <input
                            type="password"
                            placeholder="Enter your password"
                            value={self.credentials.password.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetPassword(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                            style="width:100%; margin-bottom:24px; padding:8px; border:1px solid #ccc; border-radius:6px;"
                        />

                        <button
                            type="submit"
                            {disabled}
                            style="width:100%; padding:10px; background:#6366f1; color:#fff; border:none; border-radius:6px; font-weight:bold; cursor:pointer;"
                        >
                            { if self.submitting { "Logging in..." } else { "Login to Partner Portal" } }
                        </button>
                        {
                            if let Some(error) = &self.error {
                                html! {
                                    <div style="color:#b3261e; text-align:center; font-size:14px; margin-top:12px;">
                                        { error }
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </form>

                    <p style="text-align:center; color:#666; font-size:14px; margin-top:24px;">
                        {"Need access? Contact Matson Wedding Solutions"}
                    </p>
                </div>
            </div>
        }
    }
}
