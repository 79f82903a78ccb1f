//! Component state for the wedding editor.
//!
//! The page composes two drafts: the `selected_template`, which may diverge
//! from the record's template until a save completes, and the form
//! controller's `EditableDraft`, re-seeded whenever the record or the
//! selection changes.

use common::model::draft::EditableDraft;
use common::model::template::TemplateKey;
use common::model::wedding::WeddingRecord;
use common::page_phase::PagePhase;
use common::requests::SessionInfo;
use gloo_timers::callback::Timeout;

/// Delay before an unauthenticated visitor is sent to the login page.
pub const LOGIN_REDIRECT_DELAY_MS: u32 = 2000;

/// Main state container for the `EditorPage`.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct EditorPage {
    /// Page-level readiness; drives which of the mutually exclusive screens
    /// is shown.
    pub phase: PagePhase,

    /// The resolved session, present from `LoadingData` onwards.
    pub session: Option<SessionInfo>,

    /// The authoritative record; replaced wholesale by every successful
    /// save response.
    pub record: Option<WeddingRecord>,

    /// The form controller's draft. Never merged with external changes.
    pub draft: EditableDraft,

    /// The template selection, allowed to diverge from `record.template`
    /// until saved.
    pub selected_template: TemplateKey,

    /// Number of save calls currently in flight. Saves are independent;
    /// this only feeds the save button's disabled state.
    pub saving: u32,

    pub sidebar_open: bool,

    /// Set when the initial fetch failed; shows the error panel.
    pub load_error: Option<String>,

    /// Pending login redirect. Dropping the handle cancels it.
    pub redirect_timer: Option<Timeout>,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl EditorPage {
    pub fn new() -> Self {
        EditorPage {
            phase: PagePhase::AuthPending,
            session: None,
            record: None,
            draft: EditableDraft::default(),
            selected_template: TemplateKey::default(),
            saving: 0,
            sidebar_open: true,
            load_error: None,
            redirect_timer: None,
            loaded: false,
        }
    }
}
