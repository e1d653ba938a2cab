//! Raw dataset records as they appear in the JSON files.
//!
//! Every field is optional and deserialized leniently: a field with an
//! unexpected type becomes `None` instead of failing the record, so one
//! malformed entry never aborts a whole dataset.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::locale::Translation;

/// Deserialize a field, turning any type mismatch into `None`.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Deserialize a list field element by element.
///
/// Elements that do not parse are skipped with a warning; a value that is
/// not an array becomes `None`.
pub(crate) fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let serde_json::Value::Array(elements) = serde_json::Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    let parsed = elements
        .into_iter()
        .enumerate()
        .filter_map(|(index, element)| match serde_json::from_value(element) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                log::warn!("Skipping list element {}: {}", index, e);
                None
            }
        })
        .collect();
    Ok(Some(parsed))
}

/// One furniture/clothing/misc record from the item dataset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    #[serde(default, deserialize_with = "lenient")]
    pub source_sheet: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub internal_id: Option<u32>,
    /// Older dumps use `id` instead of `internalId`.
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub unique_entry_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub translations: Option<Translation>,

    #[serde(default, deserialize_with = "lenient")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub storage_image: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub closet_image: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub framed_image: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub inventory_image: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub colors: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub variations: Option<Vec<RawVariation>>,

    #[serde(default, deserialize_with = "lenient")]
    pub version_added: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub source: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub size: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub tag: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub series: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub series_translations: Option<Translation>,
    #[serde(default, deserialize_with = "lenient")]
    pub buy: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub sell: Option<i64>,
}

impl RawItem {
    /// `internalId`, falling back to `id`.
    pub fn record_id(&self) -> Option<u32> {
        self.internal_id.or(self.id)
    }

    /// Image fields in priority order: primary, storage, closet, framed, inventory.
    pub fn image_candidates(&self) -> [Option<&str>; 5] {
        [
            self.image.as_deref(),
            self.storage_image.as_deref(),
            self.closet_image.as_deref(),
            self.framed_image.as_deref(),
            self.inventory_image.as_deref(),
        ]
    }
}

/// A variation sub-record: one (variant, pattern) combination of an item.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVariation {
    #[serde(default, deserialize_with = "lenient")]
    pub variation: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub pattern: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub variant_translations: Option<Translation>,
    #[serde(default, deserialize_with = "lenient")]
    pub pattern_translations: Option<Translation>,

    #[serde(default, deserialize_with = "lenient")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub storage_image: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub closet_image: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub framed_image: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub inventory_image: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub internal_id: Option<u32>,
    /// Older dumps use `id` instead of `internalId`.
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub unique_entry_id: Option<String>,
    /// `None` means "inherit the item's colors"; an empty list is kept as-is.
    #[serde(default, deserialize_with = "lenient")]
    pub colors: Option<Vec<String>>,
}

impl RawVariation {
    /// `internalId`, falling back to `id`.
    pub fn record_id(&self) -> Option<u32> {
        self.internal_id.or(self.id)
    }

    pub fn image_candidates(&self) -> [Option<&str>; 5] {
        [
            self.image.as_deref(),
            self.storage_image.as_deref(),
            self.closet_image.as_deref(),
            self.framed_image.as_deref(),
            self.inventory_image.as_deref(),
        ]
    }
}

/// An insect, fish or sea creature record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCreature {
    #[serde(default, deserialize_with = "lenient")]
    pub source_sheet: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub num: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub internal_id: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub unique_entry_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub translations: Option<Translation>,
    #[serde(default, deserialize_with = "lenient")]
    pub icon_image: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub critterpedia_image: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub furniture_image: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub sell: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub size: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub colors: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub where_how: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub weather: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub version_added: Option<String>,
}

/// A special character (NPC) record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNpc {
    #[serde(default, deserialize_with = "lenient")]
    pub source_sheet: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub npc_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub internal_id: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub unique_entry_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub translations: Option<Translation>,
    #[serde(default, deserialize_with = "lenient")]
    pub icon_image: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub photo_image: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub birthday: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub version_added: Option<String>,
}
