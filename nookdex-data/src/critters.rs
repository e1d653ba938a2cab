//! Creature and NPC datasets.
//!
//! Both are secondary to the item catalog: they are loaded on demand and
//! shown as flat lists.

use nookdex_core::{Category, Color, Item, ItemSize, Version};
use serde::Serialize;

use crate::normalize::{NormalizeOptions, parse_code, parse_colors};
use crate::raw::{RawCreature, RawNpc};
use crate::locale::localized;

/// An insect, fish or sea creature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Creature {
    pub id: u32,
    /// Critterpedia number.
    pub num: u32,
    pub name: String,
    pub raw_name: String,
    /// Source sheet, e.g. "Insects" or "Fish".
    pub kind: String,
    /// Icon, critterpedia and furniture images, in that order, when present.
    pub images: Vec<String>,
    pub sell: Option<u32>,
    pub size: Option<ItemSize>,
    pub colors: Vec<Color>,
    pub where_how: Option<String>,
    pub weather: Option<String>,
    pub version: Option<Version>,
}

impl Creature {
    /// View the creature as a catalog item.
    pub fn to_item(&self) -> Item {
        let mut item = Item::new(self.id, self.name.clone(), Category::Miscellaneous)
            .with_colors(self.colors.iter().copied());
        item.raw_name = self.raw_name.clone();
        item.images = self.images.clone();
        item.version = Some(Version::V100);
        item.size = self.size;
        item.sell = self.sell;
        item
    }
}

/// A special character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Npc {
    pub id: u32,
    pub npc_id: String,
    pub name: String,
    pub raw_name: String,
    pub icon_image: String,
    pub photo_image: String,
    pub gender: Option<String>,
    pub birthday: Option<String>,
    pub version: Option<Version>,
}

pub fn normalize_creatures(raw: &[RawCreature], options: &NormalizeOptions) -> Vec<Creature> {
    let mut creatures: Vec<Creature> = raw
        .iter()
        .map(|record| {
            let raw_name = record.name.clone().unwrap_or_default();
            let images = [
                &record.icon_image,
                &record.critterpedia_image,
                &record.furniture_image,
            ]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .map(|s| options.image_url(s))
            .collect();

            Creature {
                id: record.internal_id.unwrap_or(0),
                num: record.num.unwrap_or(0),
                name: localized(record.translations.as_ref(), options.locale, &raw_name)
                    .to_string(),
                kind: record.source_sheet.clone().unwrap_or_default(),
                images,
                sell: record.sell.and_then(|v| u32::try_from(v).ok()),
                size: parse_code(record.size.as_deref(), "size", &raw_name, ItemSize::from_str_loose),
                colors: parse_colors(record.colors.as_deref().unwrap_or_default(), &raw_name),
                where_how: record.where_how.clone().filter(|s| !s.is_empty()),
                weather: record.weather.clone().filter(|s| !s.is_empty()),
                version: parse_code(
                    record.version_added.as_deref(),
                    "version",
                    &raw_name,
                    Version::from_str_loose,
                ),
                raw_name,
            }
        })
        .collect();
    creatures.sort_by(|a, b| a.kind.cmp(&b.kind).then(a.num.cmp(&b.num)));
    log::info!("Normalized {} creatures", creatures.len());
    creatures
}

pub fn normalize_npcs(raw: &[RawNpc], options: &NormalizeOptions) -> Vec<Npc> {
    let npcs: Vec<Npc> = raw
        .iter()
        .map(|record| {
            let raw_name = record.name.clone().unwrap_or_default();
            Npc {
                id: record.internal_id.unwrap_or(0),
                npc_id: record.npc_id.clone().unwrap_or_default(),
                name: localized(record.translations.as_ref(), options.locale, &raw_name)
                    .to_string(),
                icon_image: options.image_url(record.icon_image.as_deref().unwrap_or("")),
                photo_image: options.image_url(record.photo_image.as_deref().unwrap_or("")),
                gender: record.gender.clone().filter(|s| !s.is_empty()),
                birthday: record.birthday.clone().filter(|s| !s.is_empty()),
                version: parse_code(
                    record.version_added.as_deref(),
                    "version",
                    &raw_name,
                    Version::from_str_loose,
                ),
                raw_name,
            }
        })
        .collect();
    log::info!("Normalized {} NPCs", npcs.len());
    npcs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    fn creature(json: &str) -> RawCreature {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn creature_becomes_misc_item() {
        let raw = vec![creature(
            r#"{"sourceSheet":"Insects","num":1,"name":"common butterfly",
                "internalId":4,"iconImage":"Insect/Icon.png","furnitureImage":"",
                "sell":160,"size":"1x1","colors":["White","Sparkly"],
                "translations":{"cNzh":"白粉蝶"}}"#,
        )];
        let creatures = normalize_creatures(&raw, &NormalizeOptions::raw_paths(Locale::CnZh));
        assert_eq!(creatures.len(), 1);
        let c = &creatures[0];
        assert_eq!(c.name, "白粉蝶");
        assert_eq!(c.raw_name, "common butterfly");
        assert_eq!(c.images, vec!["Insect/Icon.png".to_string()]);
        assert_eq!(c.colors, vec![Color::White]);

        let item = c.to_item();
        assert_eq!(item.id, 4);
        assert_eq!(item.category, Category::Miscellaneous);
        assert_eq!(item.version, Some(Version::V100));
        assert_eq!(item.size, Some(ItemSize::S1x1));
        assert_eq!(item.sell, Some(160));
        assert_eq!(item.fallback_image(), "Insect/Icon.png");
    }

    #[test]
    fn creatures_sort_by_sheet_then_number() {
        let raw = vec![
            creature(r#"{"sourceSheet":"Insects","num":2,"name":"b"}"#),
            creature(r#"{"sourceSheet":"Fish","num":9,"name":"c"}"#),
            creature(r#"{"sourceSheet":"Insects","num":1,"name":"a"}"#),
        ];
        let names: Vec<_> = normalize_creatures(&raw, &NormalizeOptions::default())
            .into_iter()
            .map(|c| c.raw_name)
            .collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn npc_name_is_localized() {
        let raw: Vec<RawNpc> = serde_json::from_str(
            r#"[{"name":"Isabelle","npcId":"sza","internalId":3,"gender":"Female",
                 "iconImage":"https://cdn.example/isabelle.png",
                 "translations":{"cNzh":"西施惠","uSen":"Isabelle"}}]"#,
        )
        .unwrap();
        let npcs = normalize_npcs(&raw, &NormalizeOptions::default());
        assert_eq!(npcs[0].name, "西施惠");
        assert_eq!(npcs[0].icon_image, "https://cdn.example/isabelle.png");
        assert_eq!(npcs[0].photo_image, "");
        assert_eq!(npcs[0].gender.as_deref(), Some("Female"));
        assert_eq!(npcs[0].birthday, None);
    }
}
