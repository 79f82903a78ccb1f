//! Update function for the wedding editor page.
//!
//! Elm-style: receives the current `EditorPage` state, the `Context`, and a
//! `Msg`, mutates the state and returns whether the view should re-render.
//!
//! Key behaviors
//! - Auth resolution drives the page phase; a negative result schedules a
//!   cancellable login redirect.
//! - The draft is re-seeded from the record whenever the record or the
//!   template selection changes; user edits only ever mutate the draft.
//! - Saves are independent calls with no de-duplication; whichever response
//!   arrives last re-seeds the draft and the record (last writer wins).
//! - A failed save keeps the draft untouched so typed input is not lost.

use common::model::draft::EditableDraft;
use common::page_phase::PagePhase;
use gloo_console::error;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::nav;
use crate::session;
use crate::toast::{toast, ToastVariant};

use super::helpers::fire_save;
use super::messages::Msg;
use super::state::{EditorPage, LOGIN_REDIRECT_DELAY_MS};

pub fn update(page: &mut EditorPage, ctx: &Context<EditorPage>, msg: Msg) -> bool {
    match msg {
        Msg::AuthResolved(Some(info)) => {
            // late authentication also cancels a pending redirect
            page.redirect_timer.take();
            page.phase = page.phase.on_auth_resolved(true);

            let token = info.token.clone();
            page.session = Some(info);

            let link = ctx.link().clone();
            yew::platform::spawn_local(async move {
                match crate::api::fetch_wedding(&token).await {
                    Ok(record) => link.send_message(Msg::RecordLoaded(record)),
                    Err(e) => link.send_message(Msg::RecordLoadFailed(e.to_string())),
                }
            });
            true
        }
        Msg::AuthResolved(None) => {
            page.phase = page.phase.on_auth_resolved(false);
            toast(
                "Authentication Required",
                "Please log in to edit your wedding website.",
                ToastVariant::Destructive,
            );

            let link = ctx.link().clone();
            page.redirect_timer = Some(Timeout::new(LOGIN_REDIRECT_DELAY_MS, move || {
                link.send_message(Msg::RedirectToLogin);
            }));
            true
        }
        Msg::RedirectToLogin => {
            page.redirect_timer.take();
            if page.phase == PagePhase::Unauthenticated {
                nav::redirect_to("/login");
            }
            false
        }
        Msg::RecordLoaded(record) => {
            page.phase = page.phase.on_data_loaded();
            page.load_error = None;
            page.selected_template = record.template.clone();
            page.draft = EditableDraft::seed(&record, record.template.clone());
            page.record = Some(record);
            true
        }
        Msg::RecordLoadFailed(message) => {
            error!(format!("Failed to initialize wedding data: {}", message));
            toast(
                "Error Loading Data",
                &format!(
                    "Failed to load wedding data: {}. Please refresh the page to try again.",
                    message
                ),
                ToastVariant::Destructive,
            );
            page.load_error = Some(message);
            true
        }
        Msg::SelectTemplate(key) => {
            page.selected_template = key.clone();
            // the selection is a draft input: re-seed, discarding field edits
            if let Some(record) = &page.record {
                page.draft = EditableDraft::seed(record, key);
            }
            true
        }
        Msg::Edit(patch) => {
            page.draft.apply(patch);
            true
        }
        Msg::EditAndSave(patch) => {
            page.draft.apply(patch);
            // saves with the merged draft, bypassing the save button's gate
            fire_save(page, ctx);
            true
        }
        Msg::Save => {
            fire_save(page, ctx);
            true
        }
        Msg::SaveFinished(Ok(record)) => {
            page.saving = page.saving.saturating_sub(1);
            // the response re-seeds both drafts; with overlapping saves the
            // last response to arrive is the one that sticks
            page.selected_template = record.template.clone();
            page.draft = EditableDraft::seed(&record, record.template.clone());
            page.record = Some(record);
            toast(
                "Success",
                "Your changes have been saved.",
                ToastVariant::Default,
            );
            true
        }
        Msg::SaveFinished(Err(message)) => {
            page.saving = page.saving.saturating_sub(1);
            error!(format!("Failed to save wedding data: {}", message));
            toast(
                "Error",
                &format!("Failed to save changes: {}", message),
                ToastVariant::Destructive,
            );
            // the draft is deliberately not rolled back
            true
        }
        Msg::ToggleSidebar => {
            page.sidebar_open = !page.sidebar_open;
            true
        }
        Msg::Logout => {
            session::teardown();
            nav::redirect_to("/login");
            false
        }
    }
}
