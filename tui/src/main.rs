use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use folio_core::{PortfolioDoc, SectionId};
use folio_tui::{run, App, AppOptions};
use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Terminal portfolio viewer.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Terminal portfolio viewer")]
struct Cli {
    /// Load an alternative portfolio document (TOML) instead of the
    /// built-in one.
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Open on a specific section (about, skills, projects, experience,
    /// contact). Unknown names fall back to the first section.
    #[arg(long, value_name = "NAME")]
    section: Option<String>,

    /// Disable entrance animations.
    #[arg(long)]
    no_animations: bool,

    /// Filter for the file log, e.g. `info` or `folio=debug`.
    #[arg(long, value_name = "FILTER", default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let _log_guard = init_logging(&cli.log_level);

    let doc = match &cli.data {
        Some(path) => PortfolioDoc::load(path)
            .wrap_err_with(|| format!("loading {}", path.display()))?,
        None => PortfolioDoc::builtin().wrap_err("parsing the built-in portfolio document")?,
    };

    let initial_section = cli.section.as_deref().and_then(|name| {
        let parsed = SectionId::from_str(name.trim()).ok();
        if parsed.is_none() {
            warn!(name, "unknown section name, opening the first section");
        }
        parsed
    });

    let width = crossterm::terminal::size().map(|(w, _)| w).unwrap_or(100);
    let app = App::new(
        doc,
        AppOptions {
            initial_section,
            width,
            animations: !cli.no_animations,
        },
    );
    run(app)
}

/// Log to a file under the user's home directory; stderr belongs to the
/// terminal UI. Returns the guard keeping the non-blocking writer alive.
fn init_logging(filter: &str) -> Option<WorkerGuard> {
    let dir = dirs::home_dir()
        .map(|home| home.join(".folio").join("log"))
        .unwrap_or_else(std::env::temp_dir);
    if std::fs::create_dir_all(&dir).is_err() {
        return None;
    }

    let appender = tracing_appender::rolling::daily(dir, "folio.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}
