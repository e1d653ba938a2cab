use nookdex_core::Item;
use nookdex_data::Creature;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::commands::Repo;

fn matches_search(creature: &Creature, needle: Option<&str>) -> bool {
    match needle {
        Some(needle) => {
            creature.name.to_lowercase().contains(needle)
                || creature.raw_name.to_lowercase().contains(needle)
        }
        None => true,
    }
}

/// List creatures grouped by kind, optionally filtered by name.
pub(crate) fn run_creatures(
    repo: &mut Repo,
    search: Option<&str>,
    json: bool,
) -> Result<(), CliError> {
    let needle = search.map(str::to_lowercase).filter(|s| !s.is_empty());
    let creatures: Vec<&Creature> = repo
        .creatures()?
        .iter()
        .filter(|c| matches_search(c, needle.as_deref()))
        .collect();

    if json {
        let items: Vec<Item> = creatures.iter().map(|c| c.to_item()).collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if creatures.is_empty() {
        log::info!(
            "{}",
            "No creatures match".if_supports_color(Stdout, |t| t.dimmed())
        );
        return Ok(());
    }

    let mut current_kind: Option<&str> = None;
    for creature in creatures {
        if current_kind != Some(creature.kind.as_str()) {
            if current_kind.is_some() {
                crate::log_blank();
            }
            log::info!("{}", creature.kind.if_supports_color(Stdout, |t| t.bold()));
            current_kind = Some(creature.kind.as_str());
        }
        let sell = creature
            .sell
            .map(|s| format!("{} bells", s))
            .unwrap_or_default();
        log::info!(
            "  {:>3}  {} {}",
            creature.num,
            creature.name,
            sell.if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}

/// List special characters.
pub(crate) fn run_npcs(repo: &mut Repo) -> Result<(), CliError> {
    let npcs = repo.npcs()?;
    for npc in npcs {
        let birthday = npc.birthday.as_deref().unwrap_or("");
        log::info!(
            "  {:<24} {}",
            npc.name,
            birthday.if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();
    log::info!(
        "{}",
        format!("{} characters", npcs.len()).if_supports_color(Stdout, |t| t.bold())
    );
    Ok(())
}
