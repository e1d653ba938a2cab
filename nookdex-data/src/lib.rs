//! Raw datasets for nookdex: serde records, translation tables, the owned
//! catalog, and normalization into [`nookdex_core::CatalogItem`]s.

pub mod catalog;
pub mod critters;
pub mod error;
pub mod locale;
pub mod names;
pub mod normalize;
pub mod raw;
pub mod source;

pub use catalog::{CatalogEntry, CatalogFile, CatalogId, CatalogImport, OwnedSet};
pub use critters::{Creature, Npc, normalize_creatures, normalize_npcs};
pub use error::SourceError;
pub use locale::{Locale, LocaleParseError, Translation};
pub use names::{NameKind, NameResolver, Translations, UNKNOWN_NAME};
pub use normalize::{NormalizeOptions, normalize_item, normalize_items};
pub use raw::{RawCreature, RawItem, RawNpc, RawVariation};
pub use source::{DataFiles, DataSource, JsonDirSource, read_catalog_file};
