use std::cell::{Cell, RefCell};

use nookdex_data::{
    CatalogImport, DataSource, Locale, NameResolver, NormalizeOptions, OwnedSet, RawItem,
    RawNpc, SourceError, Translations,
};
use nookdex_core::{Category, Color};
use nookdex_query::{FilterCriteria, OwnedFilter, SortKey};
use nookdex_lib::{LoadState, Repository, RepositoryError, Settings};

/// In-memory source that counts item loads and can be told to fail.
#[derive(Default)]
struct FakeSource {
    items: RefCell<Vec<RawItem>>,
    owned: Option<OwnedSet>,
    fail_items: Cell<bool>,
    item_loads: Cell<usize>,
}

impl FakeSource {
    fn with_items(json: &str) -> Self {
        Self {
            items: RefCell::new(serde_json::from_str(json).unwrap()),
            ..Self::default()
        }
    }
}

impl DataSource for FakeSource {
    fn load_items(&self) -> Result<Vec<RawItem>, SourceError> {
        self.item_loads.set(self.item_loads.get() + 1);
        if self.fail_items.get() {
            return Err(SourceError::missing("items"));
        }
        Ok(self.items.borrow().clone())
    }

    fn load_owned(&self) -> Result<OwnedSet, SourceError> {
        self.owned
            .clone()
            .ok_or_else(|| SourceError::missing("catalog"))
    }

    fn load_translations(&self) -> Result<Translations, SourceError> {
        Err(SourceError::missing("translations"))
    }

    fn load_npcs(&self) -> Result<Vec<RawNpc>, SourceError> {
        Ok(serde_json::from_str(r#"[{"name":"Tom Nook","internalId":2}]"#).unwrap())
    }
}

fn repo(source: FakeSource) -> Repository<FakeSource> {
    Repository::new(source, NormalizeOptions::raw_paths(Locale::UsEn))
}

fn owned_flags(repo: &Repository<FakeSource>) -> Vec<bool> {
    repo.items().iter().map(|c| c.owned()).collect()
}

#[test]
fn ensure_loaded_loads_once() {
    let mut repo = repo(FakeSource::with_items(r#"[{"id":2,"name":"b"},{"id":1,"name":"a"}]"#));
    assert_eq!(repo.state(), &LoadState::NotLoaded);

    let ids: Vec<u32> = repo.ensure_loaded().unwrap().iter().map(|c| c.id()).collect();
    assert_eq!(ids, [1, 2]);
    repo.ensure_loaded().unwrap();
    repo.ensure_loaded().unwrap();
    assert_eq!(repo.source().item_loads.get(), 1);
    assert!(matches!(repo.state(), LoadState::Loaded { item_count: 2, .. }));

    repo.reload().unwrap();
    assert_eq!(repo.source().item_loads.get(), 2);
}

#[test]
fn failed_first_load_leaves_empty_collection() {
    let source = FakeSource::default();
    source.fail_items.set(true);
    let mut repo = repo(source);

    let err = repo.ensure_loaded().unwrap_err();
    assert!(matches!(err, RepositoryError::DataUnavailable(_)));
    assert!(repo.items().is_empty());
    assert!(repo.state().error().is_some());
}

#[test]
fn failed_reload_keeps_stale_collection() {
    let mut repo = repo(FakeSource::with_items(r#"[{"id":1,"name":"a"}]"#));
    repo.ensure_loaded().unwrap();

    repo.source().fail_items.set(true);
    assert!(repo.reload().is_err());
    assert_eq!(repo.items().len(), 1);
    assert!(!repo.is_loaded());

    // a failed state is retried by ensure_loaded
    repo.source().fail_items.set(false);
    *repo.source().items.borrow_mut() =
        serde_json::from_str(r#"[{"id":1,"name":"a"},{"id":2,"name":"b"}]"#).unwrap();
    assert_eq!(repo.ensure_loaded().unwrap().len(), 2);
}

#[test]
fn missing_owned_and_translations_degrade() {
    let mut repo = repo(FakeSource::with_items(
        r#"[{"id":1,"name":"Tee","sourceSheet":"Tops"}]"#,
    ));
    repo.ensure_loaded().unwrap();
    assert_eq!(owned_flags(&repo), [false]);
    assert_eq!(repo.names().category_name(Category::Tops), "Tops");
}

#[test]
fn catalog_reimport_recomputes_ownership() {
    let mut source = FakeSource::with_items(r#"[{"id":7,"name":"Seven"},{"id":8,"name":"Eight"}]"#);
    source.owned = Some(OwnedSet::from_ids([7]));
    let mut repo = repo(source);
    repo.ensure_loaded().unwrap();
    assert_eq!(owned_flags(&repo), [true, false]);

    let owned = repo.apply_catalog_import(&CatalogImport::from_ids([8]));
    assert_eq!(owned, 1);
    assert_eq!(owned_flags(&repo), [false, true]);
    assert_eq!(repo.get(8).map(|c| c.name()), Some("Eight"));
}

#[test]
fn lookups_by_id_and_raw_name() {
    let mut repo = repo(FakeSource::with_items(
        r#"[{"id":3,"name":"wooden chair","translations":{"uSen":"Wooden Chair"}}]"#,
    ));
    repo.ensure_loaded().unwrap();
    assert_eq!(repo.get(3).map(|c| c.name()), Some("Wooden Chair"));
    assert!(repo.get(4).is_none());
    assert_eq!(repo.find_by_raw_name("wooden chair").map(|c| c.id()), Some(3));
    assert!(repo.find_by_raw_name("Wooden Chair").is_none());

    repo.get_mut(3).unwrap().set_owned(true);
    assert!(repo.get(3).unwrap().owned());
}

#[test]
fn lookup_accepts_id_raw_name_or_display_name() {
    let mut repo = repo(FakeSource::with_items(
        r#"[{"id":3,"name":"wooden chair","translations":{"uSen":"Wooden Chair"}},
            {"id":9,"name":"lamp"}]"#,
    ));
    repo.ensure_loaded().unwrap();
    assert_eq!(repo.lookup_mut("9").map(|c| c.id()), Some(9));
    assert_eq!(repo.lookup_mut("wooden chair").map(|c| c.id()), Some(3));
    assert_eq!(repo.lookup_mut(" WOODEN CHAIR ").map(|c| c.id()), Some(3));
    assert!(repo.lookup_mut("10").is_none());
    assert!(repo.lookup_mut("sofa").is_none());

    repo.find_by_raw_name_mut("lamp").unwrap().set_owned(true);
    assert!(repo.get(9).unwrap().owned());
}

#[test]
fn reset_returns_to_not_loaded() {
    let mut repo = repo(FakeSource::with_items(r#"[{"id":1,"name":"a"}]"#));
    repo.ensure_loaded().unwrap();
    repo.npcs().unwrap();
    repo.reset();
    assert_eq!(repo.state(), &LoadState::NotLoaded);
    assert!(repo.items().is_empty());
    assert!(repo.get(1).is_none());
    repo.ensure_loaded().unwrap();
    assert_eq!(repo.source().item_loads.get(), 2);
}

#[test]
fn optional_datasets_load_lazily_and_fail_alone() {
    let mut repo = repo(FakeSource::with_items(r#"[{"id":1,"name":"a"}]"#));
    assert_eq!(repo.npcs().unwrap()[0].name, "Tom Nook");
    assert!(matches!(
        repo.creatures(),
        Err(RepositoryError::DataUnavailable(SourceError::Missing(_)))
    ));
    repo.ensure_loaded().unwrap();
    assert_eq!(repo.items().len(), 1);
}

#[test]
fn from_settings_reads_json_directory() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(
        tmp.path().join("acnh-items.json"),
        r#"[{"internalId":5,"name":"Lamp","sourceSheet":"Housewares"}]"#,
    )
    .unwrap();

    let mut repo = Repository::from_settings(&Settings::default(), Some(tmp.path().to_path_buf()))
        .unwrap();
    assert_eq!(repo.ensure_loaded().unwrap()[0].id(), 5);

    let missing = Repository::from_settings(
        &Settings::default(),
        Some(tmp.path().join("does-not-exist")),
    );
    assert!(matches!(missing, Err(RepositoryError::Settings(_))));
}

#[test]
fn query_filters_then_sorts() {
    let mut source = FakeSource::with_items(
        r#"[{"id":1,"name":"Tee","sourceSheet":"Tops"},
            {"id":2,"name":"Cap","sourceSheet":"Headwear"},
            {"id":3,"name":"Hoodie","sourceSheet":"Tops"},
            {"id":4,"name":"Dresser","sourceSheet":"Housewares","colors":["Brown"],
             "variations":[{"variation":"Pine","internalId":40,"colors":["Beige"]},
                           {"variation":"Walnut","internalId":41,"colors":["Brown"]}]}]"#,
    );
    source.owned = Some(OwnedSet::from_ids([1, 3]));
    let mut repo = repo(source);
    repo.ensure_loaded().unwrap();

    let criteria = FilterCriteria::new()
        .category(Category::Tops)
        .owned(OwnedFilter::Owned);
    let names: Vec<&str> = repo
        .query(&criteria, SortKey::NameAsc)
        .iter()
        .map(|c| c.name())
        .collect();
    assert_eq!(names, ["Hoodie", "Tee"]);

    let brown = FilterCriteria::new().color(Color::Brown);
    assert_eq!(repo.query(&brown, SortKey::IdAsc)[0].display_id(), 40);
    let synced = repo.query_and_sync(&brown, SortKey::IdAsc);
    assert_eq!(synced[0].display_id(), 41);

    let options = repo.filter_options();
    assert!(options.sources.is_empty());
    assert_eq!(options.colors.len(), 14);
}
