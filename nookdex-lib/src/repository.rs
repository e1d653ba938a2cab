//! The single owner of the loaded catalog.
//!
//! A [`Repository`] loads items once on [`Repository::ensure_loaded`] and
//! keeps them until an explicit [`Repository::reload`] replaces the whole
//! collection. Creatures and NPCs are loaded separately on first use.

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use nookdex_core::CatalogItem;
use nookdex_data::{
    CatalogImport, Creature, DataSource, JsonDirSource, NormalizeOptions, Npc, OwnedSet,
    Translations, normalize_creatures, normalize_items, normalize_npcs,
};
use nookdex_query::{
    FilterCriteria, FilterOptions, SortKey, filter_and_sync_display, filter_items,
    populate_filter_options, sort_items,
};

use crate::error::RepositoryError;
use crate::settings::Settings;

/// Where the item collection stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loaded {
        loaded_at: DateTime<Utc>,
        item_count: usize,
    },
    /// The last load failed. Any previously loaded items are still served.
    Failed { message: String },
}

impl LoadState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}

pub struct Repository<S: DataSource> {
    source: S,
    options: NormalizeOptions,
    state: LoadState,
    items: Vec<CatalogItem>,
    names: Translations,
    by_id: HashMap<u32, usize>,
    by_raw_name: HashMap<String, usize>,
    creatures: Option<Vec<Creature>>,
    npcs: Option<Vec<Npc>>,
}

impl Repository<JsonDirSource> {
    /// A repository over the JSON files named in `settings`.
    ///
    /// Fails if the resolved data directory does not exist.
    pub fn from_settings(
        settings: &Settings,
        data_dir_override: Option<PathBuf>,
    ) -> Result<Self, RepositoryError> {
        let dir = settings.resolve_data_dir(data_dir_override);
        if !dir.is_dir() {
            return Err(RepositoryError::settings(format!(
                "data directory {} does not exist",
                dir.display()
            )));
        }
        log::debug!("Using data directory {}", dir.display());
        let source = JsonDirSource::with_files(dir, settings.data_files());
        Ok(Self::new(source, settings.normalize_options()))
    }
}

impl<S: DataSource> Repository<S> {
    pub fn new(source: S, options: NormalizeOptions) -> Self {
        Self {
            source,
            options,
            state: LoadState::NotLoaded,
            items: Vec::new(),
            names: Translations::default(),
            by_id: HashMap::new(),
            by_raw_name: HashMap::new(),
            creatures: None,
            npcs: None,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.state.is_loaded()
    }

    /// Load items unless they are already loaded.
    pub fn ensure_loaded(&mut self) -> Result<&[CatalogItem], RepositoryError> {
        if !self.state.is_loaded() {
            self.reload()?;
        }
        Ok(&self.items)
    }

    /// Load items from the source and replace the collection.
    ///
    /// On failure the previous collection is kept and the state records the
    /// error. Owned-set and translation failures degrade to empty tables.
    pub fn reload(&mut self) -> Result<&[CatalogItem], RepositoryError> {
        let raw = match self.source.load_items() {
            Ok(raw) => raw,
            Err(e) => {
                log::error!("Failed to load items: {}", e);
                self.state = LoadState::Failed {
                    message: e.to_string(),
                };
                return Err(e.into());
            }
        };

        let owned = self.source.load_owned().unwrap_or_else(|e| {
            log::warn!("Owned catalog unavailable, nothing will show as owned: {}", e);
            OwnedSet::default()
        });
        let names = self.source.load_translations().unwrap_or_else(|e| {
            log::warn!("Translations unavailable, showing raw codes: {}", e);
            Translations::default()
        });

        let items = normalize_items(&raw, &owned, &self.options);
        let mut by_id = HashMap::with_capacity(items.len());
        let mut by_raw_name = HashMap::with_capacity(items.len());
        for (index, entry) in items.iter().enumerate() {
            by_id.entry(entry.id()).or_insert(index);
            if !entry.item.raw_name.is_empty() {
                by_raw_name
                    .entry(entry.item.raw_name.clone())
                    .or_insert(index);
            }
        }

        let item_count = items.len();
        self.items = items;
        self.names = names;
        self.by_id = by_id;
        self.by_raw_name = by_raw_name;
        self.state = LoadState::Loaded {
            loaded_at: Utc::now(),
            item_count,
        };
        log::info!("Loaded {} items", item_count);
        Ok(&self.items)
    }

    /// Drop everything and return to the not-loaded state.
    pub fn reset(&mut self) {
        self.state = LoadState::NotLoaded;
        self.items.clear();
        self.names = Translations::default();
        self.by_id.clear();
        self.by_raw_name.clear();
        self.creatures = None;
        self.npcs = None;
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Mutable access for selection changes. Membership cannot change.
    pub fn items_mut(&mut self) -> &mut [CatalogItem] {
        &mut self.items
    }

    pub fn names(&self) -> &Translations {
        &self.names
    }

    /// First item with this id.
    pub fn get(&self, id: u32) -> Option<&CatalogItem> {
        self.by_id.get(&id).map(|&i| &self.items[i])
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut CatalogItem> {
        let index = *self.by_id.get(&id)?;
        self.items.get_mut(index)
    }

    /// First item whose untranslated name is `name`.
    pub fn find_by_raw_name(&self, name: &str) -> Option<&CatalogItem> {
        self.by_raw_name.get(name).map(|&i| &self.items[i])
    }

    pub fn find_by_raw_name_mut(&mut self, name: &str) -> Option<&mut CatalogItem> {
        let index = *self.by_raw_name.get(name)?;
        self.items.get_mut(index)
    }

    /// Resolve a user-supplied reference: a numeric id, then the untranslated
    /// name, then the display name ignoring case.
    pub fn lookup_mut(&mut self, reference: &str) -> Option<&mut CatalogItem> {
        let reference = reference.trim();
        if let Ok(id) = reference.parse::<u32>() {
            return self.get_mut(id);
        }
        if self.by_raw_name.contains_key(reference) {
            return self.find_by_raw_name_mut(reference);
        }
        let wanted = reference.to_lowercase();
        self.items
            .iter_mut()
            .find(|c| c.name().to_lowercase() == wanted)
    }

    /// Filter then sort. Pure: selection state is not touched.
    pub fn query(&self, criteria: &FilterCriteria, sort: SortKey) -> Vec<&CatalogItem> {
        sort_items(filter_items(&self.items, criteria), sort)
    }

    /// Filter with display sync, then sort the matches.
    ///
    /// Color-matched items switch to their first matching pattern.
    pub fn query_and_sync(&mut self, criteria: &FilterCriteria, sort: SortKey) -> Vec<&CatalogItem> {
        let matched = filter_and_sync_display(&mut self.items, criteria);
        sort_items(matched.into_iter().map(|i| &self.items[i]), sort)
    }

    pub fn filter_options(&self) -> FilterOptions {
        populate_filter_options(&self.items, &self.names)
    }

    /// Recompute `owned` for every item from a freshly imported id set.
    ///
    /// Returns how many items are owned afterwards.
    pub fn apply_catalog_import(&mut self, import: &CatalogImport) -> usize {
        let mut owned = 0;
        for entry in &mut self.items {
            let is_owned = import.contains(entry.id());
            entry.set_owned(is_owned);
            owned += usize::from(is_owned);
        }
        log::info!(
            "Catalog import: {} ids, {} of {} items owned",
            import.len(),
            owned,
            self.items.len()
        );
        owned
    }

    /// Creatures, loaded on first call.
    pub fn creatures(&mut self) -> Result<&[Creature], RepositoryError> {
        if self.creatures.is_none() {
            let raw = self.source.load_creatures().inspect_err(|e| {
                log::warn!("Creatures unavailable: {}", e);
            })?;
            self.creatures = Some(normalize_creatures(&raw, &self.options));
        }
        Ok(self.creatures.as_deref().unwrap_or_default())
    }

    /// NPCs, loaded on first call.
    pub fn npcs(&mut self) -> Result<&[Npc], RepositoryError> {
        if self.npcs.is_none() {
            let raw = self.source.load_npcs().inspect_err(|e| {
                log::warn!("NPCs unavailable: {}", e);
            })?;
            self.npcs = Some(normalize_npcs(&raw, &self.options));
        }
        Ok(self.npcs.as_deref().unwrap_or_default())
    }
}
