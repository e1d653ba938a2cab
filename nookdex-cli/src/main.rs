//! nookdex CLI
//!
//! Command-line interface for browsing the island item catalog.

mod cli_types;
mod commands;
mod error;
mod logger;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = nookdex_lib::load_settings();

    match cli.command {
        Commands::List {
            filters,
            sync_colors,
            sort,
            limit,
            json,
        } => {
            let mut repo = commands::loaded_repository(&settings, cli.data_dir)?;
            commands::list::run_list(&mut repo, &settings, filters, sync_colors, sort, limit, json)
        }
        Commands::Show {
            item,
            variant,
            pattern,
            color,
            json,
        } => {
            let mut repo = commands::loaded_repository(&settings, cli.data_dir)?;
            commands::show::run_show(&mut repo, &item, variant, pattern, color, json)
        }
        Commands::Options => {
            let repo = commands::loaded_repository(&settings, cli.data_dir)?;
            commands::options::run_options(&repo);
            Ok(())
        }
        Commands::Import { file } => {
            let mut repo = commands::loaded_repository(&settings, cli.data_dir)?;
            commands::import::run_import(&mut repo, &file)
        }
        Commands::Creatures { search, json } => {
            let mut repo = commands::repository(&settings, cli.data_dir)?;
            commands::creatures::run_creatures(&mut repo, search.as_deref(), json)
        }
        Commands::Npcs => {
            let mut repo = commands::repository(&settings, cli.data_dir)?;
            commands::creatures::run_npcs(&mut repo)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(&settings, cli.data_dir),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::Set { key, value } => {
                commands::config::run_config_set(settings, &key, &value)
            }
        },
    }
}

/// Print an empty line through the logger so `--quiet` suppresses it too.
pub(crate) fn log_blank() {
    log::info!("");
}
