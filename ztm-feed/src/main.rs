use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use ztm_feed::feed::ParsedFeed;

const USAGE: &str = "usage: ztm-feed <feed.TXT> [--json]";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut path = None;
    let mut json = false;
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else if arg == "-h" || arg == "--help" {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        } else if path.is_none() {
            path = Some(arg);
        } else {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    }
    let Some(path) = path else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    let feed = match ParsedFeed::load(&path) {
        Ok(feed) => feed,
        Err(e) => {
            error!(error = %e, "failed to parse feed");
            return ExitCode::FAILURE;
        }
    };

    let summary = feed.summary();
    if json {
        match serde_json::to_string_pretty(&summary) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                error!(error = %e, "failed to serialize summary");
                return ExitCode::FAILURE;
            }
        }
    } else {
        info!(
            groups = summary.groups,
            stops = summary.stops,
            with_coordinates = summary.stops_with_coordinates,
            variants = summary.line_variants,
            sequences = summary.sequences,
            edges = summary.edges,
            "feed summary"
        );
        for (mode, count) in &summary.modes {
            info!(mode = %mode, variants = count, "line variants by mode");
        }
        if summary.warnings > 0 {
            warn!(warnings = summary.warnings, "feed parsed with anomalies");
        }
    }

    ExitCode::SUCCESS
}
