pub(crate) mod config;
pub(crate) mod creatures;
pub(crate) mod import;
pub(crate) mod list;
pub(crate) mod options;
pub(crate) mod show;

use std::path::PathBuf;

use nookdex_core::Color;
use nookdex_data::{JsonDirSource, NameResolver, Translations};
use nookdex_lib::{Repository, Settings};

use crate::CliError;

pub(crate) type Repo = Repository<JsonDirSource>;

/// A repository over the configured data directory, not yet loaded.
pub(crate) fn repository(settings: &Settings, data_dir: Option<PathBuf>) -> Result<Repo, CliError> {
    Ok(Repository::from_settings(settings, data_dir)?)
}

/// A repository with the item collection loaded.
pub(crate) fn loaded_repository(
    settings: &Settings,
    data_dir: Option<PathBuf>,
) -> Result<Repo, CliError> {
    let mut repo = repository(settings, data_dir)?;
    repo.ensure_loaded()?;
    Ok(repo)
}

/// Comma-separated localized color names.
pub(crate) fn color_list(colors: &[Color], names: &Translations) -> String {
    colors
        .iter()
        .map(|&c| names.color_name(c))
        .collect::<Vec<_>>()
        .join(", ")
}
