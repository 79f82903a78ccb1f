use common::model::draft::DraftPatch;
use common::model::template::TemplateKey;
use common::model::wedding::WeddingRecord;
use common::requests::SessionInfo;

pub enum Msg {
    AuthResolved(Option<SessionInfo>),
    RedirectToLogin,
    RecordLoaded(WeddingRecord),
    RecordLoadFailed(String),
    SelectTemplate(TemplateKey),
    /// Merge into the draft only.
    Edit(DraftPatch),
    /// Merge into the draft and fire a save with the merged draft.
    EditAndSave(DraftPatch),
    Save,
    SaveFinished(Result<WeddingRecord, String>),
    ToggleSidebar,
    Logout,
}
