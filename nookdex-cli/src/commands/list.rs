use nookdex_core::CatalogItem;
use nookdex_data::{NameResolver, Translations};
use nookdex_lib::Settings;
use nookdex_query::SortKey;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::cli_types::FilterArgs;
use crate::commands::{Repo, color_list};

/// List matching items as a table or JSON.
pub(crate) fn run_list(
    repo: &mut Repo,
    settings: &Settings,
    filters: FilterArgs,
    sync_colors: bool,
    sort: Option<SortKey>,
    limit: Option<usize>,
    json: bool,
) -> Result<(), CliError> {
    let sort = sort.unwrap_or_else(|| {
        settings.display.default_sort.parse().unwrap_or_else(|e| {
            log::warn!("{}; sorting by {}", e, SortKey::default());
            SortKey::default()
        })
    });
    let limit = limit.unwrap_or(settings.display.page_size);
    let criteria = filters.into_criteria();
    let total = repo.items().len();
    let names = repo.names().clone();

    let results = if sync_colors {
        repo.query_and_sync(&criteria, sort)
    } else {
        repo.query(&criteria, sort)
    };
    let matched = results.len();
    let shown = if limit == 0 { matched } else { matched.min(limit) };
    let page = &results[..shown];

    if json {
        let rows: Vec<serde_json::Value> = page.iter().map(|c| json_row(c, &names)).collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if page.is_empty() {
        log::info!(
            "{}",
            "No items match the current filters".if_supports_color(Stdout, |t| t.dimmed())
        );
        return Ok(());
    }

    for entry in page {
        print_row(entry, &names);
    }
    crate::log_blank();

    let summary = if shown < matched {
        format!("Showing {} of {} matches ({} items total)", shown, matched, total)
    } else {
        format!("{} matches ({} items total)", matched, total)
    };
    log::info!("{}", summary.if_supports_color(Stdout, |t| t.bold()));
    Ok(())
}

fn print_row(entry: &CatalogItem, names: &Translations) {
    let mark = if entry.owned() { "\u{2713}" } else { " " };
    let category = names.category_name(entry.item.category);
    let colors = color_list(entry.display_colors(), names);
    log::info!(
        "{:>6}  {} {} {} {}",
        entry.display_id(),
        mark.if_supports_color(Stdout, |t| t.green()),
        entry.display_name(),
        format!("[{}]", category).if_supports_color(Stdout, |t| t.cyan()),
        colors.if_supports_color(Stdout, |t| t.dimmed()),
    );
}

fn json_row(entry: &CatalogItem, names: &Translations) -> serde_json::Value {
    serde_json::json!({
        "id": entry.display_id(),
        "itemId": entry.id(),
        "name": entry.display_name(),
        "category": entry.item.category.as_str(),
        "categoryName": names.category_name(entry.item.category),
        "colors": entry.display_colors().iter().map(|c| c.as_str()).collect::<Vec<_>>(),
        "image": entry.display_image(),
        "owned": entry.owned(),
        "variantIndex": entry.variant_index(),
        "patternIndex": entry.pattern_index(),
    })
}
