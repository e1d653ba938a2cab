use nookdex_core::{CatalogItem, Color};
use nookdex_data::{NameResolver, Translations};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::commands::{Repo, color_list};

/// Show one item by id or name, optionally moving its displayed variant/pattern first.
pub(crate) fn run_show(
    repo: &mut Repo,
    reference: &str,
    variant: Option<usize>,
    pattern: Option<usize>,
    color: Option<Color>,
    json: bool,
) -> Result<(), CliError> {
    let names = repo.names().clone();
    let entry = repo
        .lookup_mut(reference)
        .ok_or_else(|| CliError::not_found(format!("no item matching '{}'", reference)))?;

    if let Some(color) = color {
        if !entry.switch_to_color_variant(color) {
            log::warn!("{} has no {} pattern", entry.name(), names.color_name(color));
        }
    }
    if let Some(index) = variant {
        if !entry.set_variant_index(index) {
            log::warn!(
                "Variant {} is out of range ({} has {})",
                index,
                entry.name(),
                entry.variant_groups().len()
            );
        }
    }
    if let Some(index) = pattern {
        if !entry.set_pattern_index(index) {
            log::warn!("Pattern {} is out of range for the displayed variant", index);
        }
    }

    if json {
        let value = serde_json::json!({
            "item": serde_json::to_value(&entry.item)?,
            "owned": entry.owned(),
            "display": {
                "id": entry.display_id(),
                "name": entry.display_name(),
                "image": entry.display_image(),
                "colors": entry.display_colors().iter().map(|c| c.as_str()).collect::<Vec<_>>(),
                "variantIndex": entry.variant_index(),
                "patternIndex": entry.pattern_index(),
            },
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    print_details(entry, &names);
    Ok(())
}

fn field(label: &str, value: impl std::fmt::Display) {
    log::info!("  {:<10} {}", format!("{}:", label), value);
}

fn print_details(entry: &CatalogItem, names: &Translations) {
    let item = &entry.item;
    log::info!(
        "{}",
        entry.display_name().if_supports_color(Stdout, |t| t.bold())
    );
    if entry.display_id() == item.id {
        field("Id", item.id);
    } else {
        field("Id", format!("{} (item {})", entry.display_id(), item.id));
    }
    field("Category", names.category_name(item.category));
    field("Version", names.version_name(item.version));
    field("Size", names.size_name(item.size));
    if let Some(tag) = &item.tag {
        field("Tag", names.tag_name(tag));
    }
    if let Some(series) = &item.series {
        let name = item
            .series_name
            .clone()
            .unwrap_or_else(|| names.series_name(series));
        field("Series", name);
    }
    if !item.source.is_empty() {
        let sources: Vec<String> = item.source.iter().map(|s| names.source_name(s)).collect();
        field("Source", sources.join(", "));
    }
    if let Some(buy) = item.buy {
        field("Buy", buy);
    }
    if let Some(sell) = item.sell {
        field("Sell", sell);
    }
    field("Colors", color_list(entry.display_colors(), names));
    field(
        "Owned",
        if entry.owned() {
            "yes".if_supports_color(Stdout, |t| t.green()).to_string()
        } else {
            "no".if_supports_color(Stdout, |t| t.dimmed()).to_string()
        },
    );
    if !entry.display_image().is_empty() {
        field("Image", entry.display_image().if_supports_color(Stdout, |t| t.cyan()));
    }

    if !entry.has_variations() {
        return;
    }
    crate::log_blank();
    log::info!("{}", "Variants".if_supports_color(Stdout, |t| t.bold()));
    for (vi, group) in entry.variant_groups().iter().enumerate() {
        let selected_group = vi == entry.variant_index();
        let label = if group.name.is_empty() { "(default)" } else { group.name.as_str() };
        log::info!("  {} {:>2} {}", marker(selected_group), vi, label);
        for (pi, pattern) in group.patterns.iter().enumerate() {
            let selected = selected_group && pi == entry.pattern_index();
            let label = if pattern.name.is_empty() { "(default)" } else { pattern.name.as_str() };
            log::info!(
                "      {} {:>2} {} {}",
                marker(selected),
                pi,
                label,
                format!("#{} {}", pattern.id, color_list(&pattern.colors, names))
                    .if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }
}

fn marker(selected: bool) -> String {
    if selected {
        ">".if_supports_color(Stdout, |t| t.green()).to_string()
    } else {
        " ".to_string()
    }
}
