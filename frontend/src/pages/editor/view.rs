//! View rendering for the wedding editor page.
//!
//! The phase decides between three mutually exclusive screens: a loading
//! spinner while auth or the initial fetch is pending, a redirect notice for
//! unauthenticated visitors, and the editor itself (header, template
//! sidebar, resolved template preview). A failed initial fetch degrades to
//! an error panel whose only recovery actions are a full reload and the
//! contact page.

use common::page_phase::PagePhase;
use yew::prelude::*;

use crate::nav;
use crate::templates::DynamicWeddingPage;

use super::messages::Msg;
use super::sidebar::TemplateSidebar;
use super::state::EditorPage;

pub fn view(page: &EditorPage, ctx: &Context<EditorPage>) -> Html {
    if let Some(error) = &page.load_error {
        return error_panel(error);
    }

    match page.phase {
        PagePhase::AuthPending | PagePhase::LoadingData => loading_screen(),
        PagePhase::Unauthenticated => redirect_screen(),
        PagePhase::Ready => ready_screen(page, ctx),
    }
}

fn loading_screen() -> Html {
    html! {
        <div class="editor-loading" style="display:flex; align-items:center; justify-content:center; min-height:100vh;">
            <div style="text-align:center;">
                <div class="spinner"></div>
                <p style="margin-top:16px; color:#666;">{"Initializing authentication..."}</p>
            </div>
        </div>
    }
}

fn redirect_screen() -> Html {
    html! {
        <div class="editor-login-redirect" style="display:flex; align-items:center; justify-content:center; min-height:100vh;">
            <div style="text-align:center; padding:24px; background:#fff; border-radius:8px; box-shadow:0 2px 12px rgba(0,0,0,0.1);">
                <h2>{"Please log in to continue"}</h2>
                <p style="color:#666;">{"You're being redirected to the login page..."}</p>
            </div>
        </div>
    }
}

fn error_panel(message: &str) -> Html {
    html! {
        <div class="editor-error" style="display:flex; align-items:center; justify-content:center; min-height:100vh;">
            <div style="text-align:center; padding:32px; background:#fff; border-radius:12px; box-shadow:0 4px 24px rgba(0,0,0,0.12); max-width:560px;">
                <h2>{"Oops! Something went wrong"}</h2>
                <p style="color:#666;">
                    {"We encountered an error while loading the wedding editor. \
                      Please try refreshing the page or contact support if the issue persists."}
                </p>
                <div style="background:#f7f7f7; padding:12px; border-radius:8px; text-align:left; margin:16px 0;">
                    <p style="font-family:monospace; font-size:13px; color:#b3261e; word-break:break-word; margin:0;">
                        { message }
                    </p>
                </div>
                <div style="display:flex; gap:12px; justify-content:center;">
                    <button onclick={Callback::from(|_| nav::reload())}>
                        {"Refresh Page"}
                    </button>
                    <button onclick={Callback::from(|_| nav::redirect_to("/contact"))}>
                        {"Contact Support"}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn ready_screen(page: &EditorPage, ctx: &Context<EditorPage>) -> Html {
    let link = ctx.link();
    let Some(record) = &page.record else {
        return error_panel("User data not available");
    };

    html! {
        <div class="editor-root" style="display:flex; flex-direction:column; height:100vh; overflow:hidden;">
            <header style="display:flex; align-items:center; justify-content:space-between; padding:8px 16px; background:#fff; box-shadow:0 1px 3px rgba(0,0,0,0.1); z-index:10;">
                <div style="display:flex; align-items:center;">
                    <button
                        onclick={link.callback(|_| Msg::ToggleSidebar)}
                        aria-label="Toggle sidebar"
                        style="border:none; background:none; font-size:20px; cursor:pointer;"
                    >
                        {"\u{2630}"}
                    </button>
                    <h1 style="margin:0 0 0 16px; font-size:20px;">{"Wedding Editor"}</h1>
                </div>
                <button onclick={link.callback(|_| Msg::Logout)} style="cursor:pointer;">
                    {"Log out"}
                </button>
            </header>

            <div style="display:flex; flex:1; overflow:hidden;">
                {
                    if page.sidebar_open {
                        html! {
                            <TemplateSidebar
                                selected={page.selected_template.clone()}
                                persisted={record.template.clone()}
                                draft={page.draft.clone()}
                                saving={page.saving > 0}
                                on_select={link.callback(Msg::SelectTemplate)}
                                on_edit={link.callback(Msg::Edit)}
                                on_edit_save={link.callback(Msg::EditAndSave)}
                                on_save={link.callback(|_| Msg::Save)}
                            />
                        }
                    } else {
                        html! {}
                    }
                }
                <div style="flex:1; overflow-y:auto;">
                    <DynamicWeddingPage
                        template={page.selected_template.clone()}
                        record={record.clone()}
                    />
                </div>
            </div>
        </div>
    }
}
