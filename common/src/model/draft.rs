//! The form controller's editable draft and its typed overlay.
//!
//! The draft mirrors the subset of the wedding record the editor can change.
//! It is replaced wholesale whenever the authoritative record or the
//! selected template changes, mutated field-by-field through [`DraftPatch`],
//! and read once to build a save payload. Precedence is fixed: patch over
//! draft, draft over record, never the reverse. Concurrent external changes
//! are not merged; last writer wins from whichever side writes last.

use serde::{Deserialize, Serialize};

use crate::model::template::TemplateKey;
use crate::model::wedding::{
    ColorScheme, CoupleInfo, FontFamily, StoryInfo, WeddingRecord,
};

/// The in-progress, unsaved edit state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditableDraft {
    pub template: TemplateKey,
    pub couple: CoupleInfo,
    pub story: StoryInfo,
    pub color_scheme: ColorScheme,
    pub font_family: FontFamily,
}

/// Partial update for the couple section. `None` leaves a sibling untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CouplePatch {
    pub groom_name: Option<String>,
    pub bride_name: Option<String>,
    pub wedding_quote: Option<String>,
}

/// Partial update for the story section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StoryPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// One-level-deep typed overlay applied to the draft.
///
/// A partial `couple`/`story` preserves the sibling fields of that section,
/// not just the other top-level sections.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DraftPatch {
    pub template: Option<TemplateKey>,
    pub couple: Option<CouplePatch>,
    pub story: Option<StoryPatch>,
    pub color_scheme: Option<ColorScheme>,
    pub font_family: Option<FontFamily>,
}

impl DraftPatch {
    pub fn groom_name(value: impl Into<String>) -> DraftPatch {
        DraftPatch {
            couple: Some(CouplePatch {
                groom_name: Some(value.into()),
                ..CouplePatch::default()
            }),
            ..DraftPatch::default()
        }
    }

    pub fn bride_name(value: impl Into<String>) -> DraftPatch {
        DraftPatch {
            couple: Some(CouplePatch {
                bride_name: Some(value.into()),
                ..CouplePatch::default()
            }),
            ..DraftPatch::default()
        }
    }

    pub fn wedding_quote(value: impl Into<String>) -> DraftPatch {
        DraftPatch {
            couple: Some(CouplePatch {
                wedding_quote: Some(value.into()),
                ..CouplePatch::default()
            }),
            ..DraftPatch::default()
        }
    }

    pub fn story_title(value: impl Into<String>) -> DraftPatch {
        DraftPatch {
            story: Some(StoryPatch {
                title: Some(value.into()),
                ..StoryPatch::default()
            }),
            ..DraftPatch::default()
        }
    }

    pub fn story_content(value: impl Into<String>) -> DraftPatch {
        DraftPatch {
            story: Some(StoryPatch {
                content: Some(value.into()),
                ..StoryPatch::default()
            }),
            ..DraftPatch::default()
        }
    }

    pub fn color_scheme(value: ColorScheme) -> DraftPatch {
        DraftPatch {
            color_scheme: Some(value),
            ..DraftPatch::default()
        }
    }

    pub fn font_family(value: FontFamily) -> DraftPatch {
        DraftPatch {
            font_family: Some(value),
            ..DraftPatch::default()
        }
    }
}

impl EditableDraft {
    /// Replaces the entire draft with normalized copies of the editable
    /// fields. Idempotent: identical inputs yield an identical draft.
    pub fn seed(record: &WeddingRecord, template: TemplateKey) -> EditableDraft {
        EditableDraft {
            template,
            couple: record.couple.clone(),
            story: record.story.clone(),
            color_scheme: record.color_scheme,
            font_family: record.font_family,
        }
    }

    /// Shallow-merges `patch` into the draft, one level deep for the nested
    /// sections.
    pub fn apply(&mut self, patch: DraftPatch) {
        if let Some(template) = patch.template {
            self.template = template;
        }
        if let Some(couple) = patch.couple {
            if let Some(groom_name) = couple.groom_name {
                self.couple.groom_name = groom_name;
            }
            if let Some(bride_name) = couple.bride_name {
                self.couple.bride_name = bride_name;
            }
            if let Some(wedding_quote) = couple.wedding_quote {
                self.couple.wedding_quote = wedding_quote;
            }
        }
        if let Some(story) = patch.story {
            if let Some(title) = story.title {
                self.story.title = title;
            }
            if let Some(content) = story.content {
                self.story.content = content;
            }
        }
        if let Some(color_scheme) = patch.color_scheme {
            self.color_scheme = color_scheme;
        }
        if let Some(font_family) = patch.font_family {
            self.font_family = font_family;
        }
    }

    /// Produces the record-shaped save payload: the authoritative record
    /// overlaid with the draft's editable sections. Every other field of the
    /// record passes through untouched.
    pub fn build_save_payload(&self, record: &WeddingRecord) -> WeddingRecord {
        let mut payload = record.clone();
        payload.template = self.template.clone();
        payload.couple = self.couple.clone();
        payload.story = self.story.clone();
        payload.color_scheme = self.color_scheme;
        payload.font_family = self.font_family;
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> WeddingRecord {
        WeddingRecord::from_json(
            r#"{
                "template": "model_4",
                "couple": {"groomName": "A", "brideName": "B", "weddingQuote": "Q"},
                "story": {"title": "Us", "content": "How we met."},
                "colorScheme": "garden",
                "userId": "u-42",
                "createdAt": "2025-03-09T10:00:00Z"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn seed_is_idempotent() {
        let record = record();
        let first = EditableDraft::seed(&record, TemplateKey::Model2);
        let second = EditableDraft::seed(&record, TemplateKey::Model2);
        assert_eq!(first, second);
    }

    #[test]
    fn partial_couple_patch_preserves_siblings() {
        let mut draft = EditableDraft::seed(&record(), TemplateKey::Model4);
        draft.apply(DraftPatch::groom_name("X"));
        assert_eq!(draft.couple.groom_name, "X");
        assert_eq!(draft.couple.bride_name, "B");
        assert_eq!(draft.couple.wedding_quote, "Q");
        // the other sections are untouched too
        assert_eq!(draft.story.title, "Us");
        assert_eq!(draft.color_scheme, ColorScheme::Garden);
    }

    #[test]
    fn partial_story_patch_preserves_siblings() {
        let mut draft = EditableDraft::seed(&record(), TemplateKey::Model4);
        draft.apply(DraftPatch::story_content("Updated."));
        assert_eq!(draft.story.title, "Us");
        assert_eq!(draft.story.content, "Updated.");
    }

    #[test]
    fn payload_overlays_draft_and_passes_other_fields_through() {
        let record = record();
        let mut draft = EditableDraft::seed(&record, TemplateKey::Model2);
        draft.apply(DraftPatch::bride_name("Beatrice"));
        draft.apply(DraftPatch::font_family(FontFamily::Lora));

        let payload = draft.build_save_payload(&record);
        assert_eq!(payload.template, TemplateKey::Model2);
        assert_eq!(payload.couple.bride_name, "Beatrice");
        assert_eq!(payload.couple.groom_name, "A");
        assert_eq!(payload.font_family, FontFamily::Lora);

        // identifiers and timestamps survive the overlay verbatim
        let json: serde_json::Value =
            serde_json::from_str(&payload.to_json().unwrap()).unwrap();
        assert_eq!(json["userId"], "u-42");
        assert_eq!(json["createdAt"], "2025-03-09T10:00:00Z");
    }

    #[test]
    fn selection_diverges_until_saved() {
        // Selecting model_2 reshapes the draft only; the authoritative
        // record keeps model_4 until a save payload is persisted.
        let record = record();
        let draft = EditableDraft::seed(&record, TemplateKey::Model2);
        assert_eq!(draft.template, TemplateKey::Model2);
        assert_eq!(record.template, TemplateKey::Model4);
    }

    #[test]
    fn overlapping_saves_last_response_wins() {
        // Two payloads built from successive drafts; whichever is applied
        // last determines the externally observed record.
        let record = record();
        let mut draft = EditableDraft::seed(&record, TemplateKey::Model4);

        draft.apply(DraftPatch::color_scheme(ColorScheme::Romantic));
        let first = draft.build_save_payload(&record);

        draft.apply(DraftPatch::color_scheme(ColorScheme::Midnight));
        let second = draft.build_save_payload(&record);

        // responses arrive out of order: second lands before first
        let mut observed = record.clone();
        assert_eq!(observed.color_scheme, ColorScheme::Garden);
        for response in [second, first] {
            observed = response;
        }
        assert_eq!(observed.color_scheme, ColorScheme::Romantic);
    }

    #[test]
    fn update_then_save_uses_the_merged_draft() {
        let record = record();
        let mut draft = EditableDraft::seed(&record, TemplateKey::Model4);
        draft.apply(DraftPatch::color_scheme(ColorScheme::Romantic));
        let payload = draft.build_save_payload(&record);
        assert_eq!(payload.color_scheme, ColorScheme::Romantic);
    }
}
