//! The authoritative wedding record and its nested sections.
//!
//! Records come from the backend as JSON. Every field the editor reads is
//! normalized at this boundary: absent sections deserialize to their
//! defaults, so consuming code never sees a partially undefined record.
//! Fields the editor does not model (row ids, timestamps, backend-private
//! columns) are preserved verbatim in [`WeddingRecord::extra`] and written
//! back untouched on save.

use serde::{Deserialize, Serialize};

use crate::model::template::TemplateKey;

/// Couple section of the record. All fields default to empty strings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoupleInfo {
    #[serde(default)]
    pub groom_name: String,
    #[serde(default)]
    pub bride_name: String,
    #[serde(default)]
    pub wedding_quote: String,
}

/// "Our story" section. `content` is markdown, rendered by the template
/// pages.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Contact details collected by the partner intake form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default)]
    pub whatsapp_number: String,
}

/// Reference to the reseller that created the record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerRef {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Color palette applied by the template pages. Library default: `classic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    #[default]
    Classic,
    Romantic,
    Garden,
    Midnight,
}

impl ColorScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Classic => "classic",
            ColorScheme::Romantic => "romantic",
            ColorScheme::Garden => "garden",
            ColorScheme::Midnight => "midnight",
        }
    }

    /// `(accent, background, text)` CSS colors for the scheme.
    pub fn palette(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            ColorScheme::Classic => ("#8b7355", "#faf7f2", "#2d2a26"),
            ColorScheme::Romantic => ("#c26b7a", "#fdf4f5", "#3d2b30"),
            ColorScheme::Garden => ("#5d7a5d", "#f4f8f1", "#263026"),
            ColorScheme::Midnight => ("#7d8ec7", "#14172b", "#e8eaf6"),
        }
    }

    pub fn parse(raw: &str) -> Option<ColorScheme> {
        ColorScheme::ALL.into_iter().find(|s| s.as_str() == raw)
    }

    pub const ALL: [ColorScheme; 4] = [
        ColorScheme::Classic,
        ColorScheme::Romantic,
        ColorScheme::Garden,
        ColorScheme::Midnight,
    ];
}

/// Heading typeface used by the template pages. Library default: `playfair`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    #[default]
    Playfair,
    Lora,
    Cormorant,
    Montserrat,
}

impl FontFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontFamily::Playfair => "playfair",
            FontFamily::Lora => "lora",
            FontFamily::Cormorant => "cormorant",
            FontFamily::Montserrat => "montserrat",
        }
    }

    pub fn css_stack(&self) -> &'static str {
        match self {
            FontFamily::Playfair => "'Playfair Display', serif",
            FontFamily::Lora => "'Lora', serif",
            FontFamily::Cormorant => "'Cormorant Garamond', serif",
            FontFamily::Montserrat => "'Montserrat', sans-serif",
        }
    }

    pub fn parse(raw: &str) -> Option<FontFamily> {
        FontFamily::ALL.into_iter().find(|f| f.as_str() == raw)
    }

    pub const ALL: [FontFamily; 4] = [
        FontFamily::Playfair,
        FontFamily::Lora,
        FontFamily::Cormorant,
        FontFamily::Montserrat,
    ];
}

/// The authoritative wedding record, source of truth until overwritten by a
/// successful save.
///
/// `extra` captures every JSON field not modeled here; serializing a record
/// therefore always reproduces the full stored row, with only the modeled
/// sections rewritten.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeddingRecord {
    #[serde(default)]
    pub template: TemplateKey,
    #[serde(default)]
    pub couple: CoupleInfo,
    #[serde(default)]
    pub story: StoryInfo,
    #[serde(default)]
    pub color_scheme: ColorScheme,
    #[serde(default)]
    pub font_family: FontFamily,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner: Option<PartnerRef>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl WeddingRecord {
    /// Parses a stored JSON row into a normalized record. Absent sections
    /// resolve to their defaults; unknown fields land in `extra`.
    pub fn from_json(raw: &str) -> Result<WeddingRecord, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_sections_resolve_to_defaults() {
        let record = WeddingRecord::from_json("{}").unwrap();
        assert_eq!(record.template, TemplateKey::Model4);
        assert_eq!(record.couple, CoupleInfo::default());
        assert_eq!(record.story, StoryInfo::default());
        assert_eq!(record.color_scheme, ColorScheme::Classic);
        assert_eq!(record.font_family, FontFamily::Playfair);
        assert!(record.contact.is_none());
    }

    #[test]
    fn partial_couple_resolves_missing_siblings() {
        let record = WeddingRecord::from_json(r#"{"couple":{"groomName":"Arun"}}"#).unwrap();
        assert_eq!(record.couple.groom_name, "Arun");
        assert_eq!(record.couple.bride_name, "");
        assert_eq!(record.couple.wedding_quote, "");
    }

    #[test]
    fn unmodeled_fields_pass_through_serialization() {
        let raw = r#"{"template":"model_2","userId":"u-17","createdAt":"2025-05-01T00:00:00Z"}"#;
        let record = WeddingRecord::from_json(raw).unwrap();
        assert_eq!(record.extra.get("userId").unwrap(), "u-17");

        let json: serde_json::Value =
            serde_json::from_str(&record.to_json().unwrap()).unwrap();
        assert_eq!(json["userId"], "u-17");
        assert_eq!(json["createdAt"], "2025-05-01T00:00:00Z");
        assert_eq!(json["template"], "model_2");
    }

    #[test]
    fn enum_values_round_trip_their_wire_names() {
        for scheme in ColorScheme::ALL {
            let json = serde_json::to_string(&scheme).unwrap();
            assert_eq!(json, format!("\"{}\"", scheme.as_str()));
        }
        for font in FontFamily::ALL {
            let json = serde_json::to_string(&font).unwrap();
            assert_eq!(json, format!("\"{}\"", font.as_str()));
        }
    }
}
