use std::path::PathBuf;

use nookdex_lib::{Settings, save_settings, settings_path, settings_to_string};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

/// Show the settings file location and the effective settings.
pub(crate) fn run_config_show(settings: &Settings, data_dir: Option<PathBuf>) -> Result<(), CliError> {
    let path = settings_path();
    log::info!(
        "{}",
        "nookdex Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let dir = settings.resolve_data_dir(data_dir);
    let status = if dir.is_dir() {
        "(exists)".if_supports_color(Stdout, |t| t.green()).to_string()
    } else {
        "(missing)".if_supports_color(Stdout, |t| t.red()).to_string()
    };
    log::info!(
        "  Data directory: {} {}",
        dir.display().if_supports_color(Stdout, |t| t.cyan()),
        status
    );
    log::info!("  Locale: {}", settings.locale());
    crate::log_blank();

    let text = settings_to_string(settings)
        .ok_or_else(|| CliError::config("settings could not be serialized"))?;
    for line in text.lines() {
        log::info!("  {}", line);
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}

/// Change one setting and write the settings file.
pub(crate) fn run_config_set(mut settings: Settings, key: &str, value: &str) -> Result<(), CliError> {
    settings.set(key, value)?;
    save_settings(&settings).map_err(|e| {
        CliError::config(format!("failed to write {}: {}", settings_path().display(), e))
    })?;
    log::info!(
        "Set {} in {}",
        key.if_supports_color(Stdout, |t| t.bold()),
        settings_path().display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
