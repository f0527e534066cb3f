use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use smol_str::{SmolStr, ToSmolStr};
use std::collections::HashMap;
use std::fmt;

/// Key of an entity in the [`EntityMap`].
///
/// The editor's JSON export writes entity keys as numbers inside
/// `entityRanges` and as strings for the `entityMap` object keys, so both
/// forms deserialize to the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntityKey(SmolStr);

impl EntityKey {
    pub fn new(key: impl AsRef<str>) -> Self {
        Self(SmolStr::new(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for EntityKey {
    fn from(key: u64) -> Self {
        Self(key.to_smolstr())
    }
}

impl From<&str> for EntityKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EntityKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyVisitor;

        impl Visitor<'_> for KeyVisitor {
            type Value = EntityKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an entity key as a string or non-negative integer")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(EntityKey::from(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                u64::try_from(v)
                    .map(EntityKey::from)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(EntityKey::new(v))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRange {
    pub offset: usize,
    pub length: usize,
    pub key: EntityKey,
}

impl EntityRange {
    pub fn new(offset: usize, length: usize, key: u64) -> Self {
        Self {
            offset,
            length,
            key: EntityKey::from(key),
        }
    }

    /// Exclusive end offset, or `None` if it does not fit in a `usize`.
    pub fn end(&self) -> Option<usize> {
        self.offset.checked_add(self.length)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineStyleRange {
    pub offset: usize,
    pub length: usize,
    pub style: SmolStr,
}

impl InlineStyleRange {
    pub fn new(offset: usize, length: usize, style: &str) -> Self {
        Self {
            offset,
            length,
            style: SmolStr::new(style),
        }
    }
}

/// One paragraph-like unit of editor content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<SmolStr>,
    #[serde(rename = "type", default)]
    pub block_type: SmolStr,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub depth: u32,
    #[serde(default)]
    pub inline_style_ranges: Vec<InlineStyleRange>,
    #[serde(default)]
    pub entity_ranges: Vec<EntityRange>,
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl Block {
    pub fn new(block_type: &str, text: impl Into<String>) -> Self {
        Self {
            block_type: SmolStr::new(block_type),
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_style(mut self, offset: usize, length: usize, style: &str) -> Self {
        self.inline_style_ranges
            .push(InlineStyleRange::new(offset, length, style));
        self
    }

    pub fn with_entity(mut self, offset: usize, length: usize, key: u64) -> Self {
        self.entity_ranges
            .push(EntityRange::new(offset, length, key));
        self
    }

    /// Length of the block text in characters. All range offsets count characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Link,
    Image,
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "type")]
    pub entity_type: SmolStr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutability: Option<SmolStr>,
    #[serde(default)]
    pub data: EntityData,
}

impl Entity {
    pub fn link(url: &str) -> Self {
        Self {
            entity_type: SmolStr::new_static("LINK"),
            mutability: Some(SmolStr::new_static("MUTABLE")),
            data: EntityData {
                url: Some(url.to_string()),
                ..Default::default()
            },
        }
    }

    pub fn image(src: &str) -> Self {
        Self {
            entity_type: SmolStr::new_static("IMAGE"),
            mutability: Some(SmolStr::new_static("MUTABLE")),
            data: EntityData {
                src: Some(src.to_string()),
                ..Default::default()
            },
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self.entity_type.as_str() {
            "LINK" => EntityKind::Link,
            "IMAGE" => EntityKind::Image,
            _ => EntityKind::Other,
        }
    }
}

pub type EntityMap = HashMap<EntityKey, Entity>;

/// Raw editor content: the block list plus the shared entity table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDraftContent {
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub entity_map: EntityMap,
}

impl RawDraftContent {
    pub fn from_json(json: &str) -> Result<Self, crate::DraftError> {
        Ok(serde_json::from_str(json)?)
    }
}
