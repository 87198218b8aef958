use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use lizard_tui::cli::parse_args;
use lizard_tui::config::load_config;
use lizard_tui::tui::{app::App, LizardExplorer};
use lizard_tui::{LizardAnalyzer, Session};

fn main() -> Result<()> {
    let cli = parse_args();

    if let Some(log_file) = &cli.log_file {
        init_logging(log_file)?;
    }

    let config = load_config();
    let settings = cli.resolve(config);
    log::info!(
        "Starting with path {}, analyzer {}, sort {:?}",
        settings.path.display(),
        settings.program,
        settings.sort_key
    );

    let analyzer = LizardAnalyzer::new(settings.program.clone(), settings.extra_args);
    let available = analyzer.is_available();

    let session = Session::with_sort(Arc::new(analyzer), settings.sort_key);
    let mut app = App::new(
        session,
        &settings.path.to_string_lossy(),
        settings.critical_excludes,
    );
    if !available {
        log::warn!("{} not found in PATH", settings.program);
        app.set_status(format!("{} not found in PATH", settings.program));
    }

    let mut explorer = LizardExplorer::new(app)?;
    explorer.run()
}

/// Send log records to `path`. The terminal belongs to the UI, so without a
/// log file nothing is logged.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
