use std::fmt::Display;

use nookdex_query::FilterOption;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::commands::Repo;

/// Print the choices available for every filter dimension.
pub(crate) fn run_options(repo: &Repo) {
    let options = repo.filter_options();
    print_dimension("Categories", &options.categories);
    print_dimension("Versions", &options.versions);
    print_dimension("Sizes", &options.sizes);
    print_dimension("Colors", &options.colors);
    print_dimension("Sources", &options.sources);
    print_dimension("Tags", &options.tags);
    print_dimension("Series", &options.series);
}

fn print_dimension<T: Display>(title: &str, options: &[FilterOption<T>]) {
    log::info!(
        "{} {}",
        title.if_supports_color(Stdout, |t| t.bold()),
        format!("({})", options.len()).if_supports_color(Stdout, |t| t.dimmed()),
    );
    if options.is_empty() {
        log::info!("  {}", "none".if_supports_color(Stdout, |t| t.dimmed()));
    }
    for option in options {
        let value = option.value.to_string();
        if value == option.name {
            log::info!("  {}", value);
        } else {
            log::info!(
                "  {:<24} {}",
                value.if_supports_color(Stdout, |t| t.cyan()),
                option.name
            );
        }
    }
    crate::log_blank();
}
