use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier of one of the fixed page layouts.
///
/// The set of known layouts is closed at build time. Keys read from stored
/// records are never rejected: anything outside the known set is preserved
/// as [`TemplateKey::Unknown`] so that lookup can fail as a value instead of
/// a deserialization error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TemplateKey {
    Model1,
    Model2,
    Model3,
    Model4,
    Unknown(String),
}

impl TemplateKey {
    /// All keys the registry knows about, in display order.
    pub const KNOWN: [TemplateKey; 4] = [
        TemplateKey::Model1,
        TemplateKey::Model2,
        TemplateKey::Model3,
        TemplateKey::Model4,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            TemplateKey::Model1 => "model_1",
            TemplateKey::Model2 => "model_2",
            TemplateKey::Model3 => "model_3",
            TemplateKey::Model4 => "model_4",
            TemplateKey::Unknown(raw) => raw,
        }
    }

    /// Total parse: unknown strings become [`TemplateKey::Unknown`].
    pub fn parse(raw: &str) -> TemplateKey {
        match raw {
            "model_1" => TemplateKey::Model1,
            "model_2" => TemplateKey::Model2,
            "model_3" => TemplateKey::Model3,
            "model_4" => TemplateKey::Model4,
            other => TemplateKey::Unknown(other.to_string()),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, TemplateKey::Unknown(_))
    }
}

impl Default for TemplateKey {
    fn default() -> Self {
        TemplateKey::Model4
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TemplateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TemplateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(TemplateKey::parse(&raw))
    }
}

/// Static metadata for one layout. The async loader that turns a key into a
/// renderable page lives in the frontend registry; this descriptor carries
/// only the data the sidebar cards need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDescriptor {
    pub key: TemplateKey,
    pub label: &'static str,
    pub preview_url: &'static str,
}

pub static TEMPLATES: [TemplateDescriptor; 4] = [
    TemplateDescriptor {
        key: TemplateKey::Model1,
        label: "Template 1",
        preview_url: "/previews/model_1.svg",
    },
    TemplateDescriptor {
        key: TemplateKey::Model2,
        label: "Template 2",
        preview_url: "/previews/model_2.svg",
    },
    TemplateDescriptor {
        key: TemplateKey::Model3,
        label: "Template 3",
        preview_url: "/previews/model_3.svg",
    },
    TemplateDescriptor {
        key: TemplateKey::Model4,
        label: "Template 4",
        preview_url: "/previews/model_4.svg",
    },
];

/// Pure, synchronous lookup over the closed key set. "Not found" is a value.
pub fn lookup(key: &TemplateKey) -> Option<&'static TemplateDescriptor> {
    TEMPLATES.iter().find(|t| &t.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_total_over_known_keys() {
        for key in TemplateKey::KNOWN {
            let descriptor = lookup(&key).expect("known key must have a descriptor");
            assert_eq!(descriptor.key, key);
        }
    }

    #[test]
    fn lookup_returns_none_for_unknown_keys() {
        assert!(lookup(&TemplateKey::parse("model_99")).is_none());
        assert!(lookup(&TemplateKey::Unknown(String::new())).is_none());
    }

    #[test]
    fn parse_round_trips_known_keys() {
        for key in TemplateKey::KNOWN {
            assert_eq!(TemplateKey::parse(key.as_str()), key);
        }
    }

    #[test]
    fn serde_preserves_unknown_keys() {
        let key: TemplateKey = serde_json::from_str("\"model_7\"").unwrap();
        assert_eq!(key, TemplateKey::Unknown("model_7".to_string()));
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"model_7\"");
    }
}
