use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::commands::Repo;

/// Replace ownership with the ids found in a catalog export.
pub(crate) fn run_import(repo: &mut Repo, file: &Path) -> Result<(), CliError> {
    let catalog = nookdex_data::read_catalog_file(file)?;
    let import = catalog.import();
    if import.is_empty() {
        log::warn!(
            "{} has no usable item ids; every item will show as not owned",
            file.display()
        );
    }

    let owned = repo.apply_catalog_import(&import);
    log::info!(
        "{} {} entries, {} ids",
        "Imported".if_supports_color(Stdout, |t| t.bold()),
        catalog.items.len(),
        import.len(),
    );
    log::info!(
        "  Owned: {} of {} items",
        owned.if_supports_color(Stdout, |t| t.green()),
        repo.items().len()
    );
    Ok(())
}
