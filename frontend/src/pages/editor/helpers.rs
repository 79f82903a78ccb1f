//! Helpers for the editor's save path.

use yew::prelude::*;

use crate::api;

use super::messages::Msg;
use super::state::EditorPage;

/// Fires one save call with the current draft overlaid on the record.
///
/// Every invocation produces an independent request: rapid consecutive
/// saves are not debounced or coalesced, and no in-flight de-duplication is
/// attempted. The externally observed record is decided by whichever
/// response is applied last.
pub fn fire_save(page: &mut EditorPage, ctx: &Context<EditorPage>) {
    let (Some(session), Some(record)) = (&page.session, &page.record) else {
        // nothing to save before the initial fetch resolved
        return;
    };

    let mut draft = page.draft.clone();
    // the selection is always part of the payload
    draft.template = page.selected_template.clone();
    let payload = draft.build_save_payload(record);

    page.saving += 1;
    let token = session.token.clone();
    let link = ctx.link().clone();
    yew::platform::spawn_local(async move {
        let result = api::save_wedding(&token, &payload)
            .await
            .map_err(|e| e.to_string());
        link.send_message(Msg::SaveFinished(result));
    });
}
