use clap::Parser;
use passfinder::StartMode;
use passfinder::core::catalog::Catalog;
use passfinder::core::config::{self, CliOverrides, ResolvedConfig};
use passfinder::core::replay::run_script;
use passfinder::core::state::App;
use passfinder::core::view::render;
use passfinder::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "passfinder", about = "Find the NYC attraction pass that fits your trip")]
struct Args {
    /// Screen to open on
    #[arg(short, long, value_enum)]
    start: Option<StartMode>,

    /// Run comma-separated actions without a terminal and print the final view as JSON
    #[arg(long, value_name = "ACTIONS")]
    replay: Option<String>,

    /// Config file (defaults to ~/.passfinder/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Attraction and pass catalog in TOML (defaults to the built-in NYC data)
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    // The logger needs the resolved config, so report this once it is up
    let (file_config, config_error) = match file_config {
        Ok(c) => (c, None),
        Err(e) => (Default::default(), Some(e)),
    };

    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            start_mode: args.start,
            catalog: args.catalog.clone(),
        },
    );

    init_logging(&resolved);
    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
    }
    log::info!("Pass finder starting on the {:?} screen", resolved.start_mode);

    let catalog = match &resolved.catalog_path {
        Some(path) => Catalog::load(path).map_err(|e| {
            io::Error::other(format!("failed to load catalog {}: {e}", path.display()))
        })?,
        None => Catalog::nyc(),
    };
    let mut app = App::from_config(Arc::new(catalog), &resolved);

    match args.replay {
        Some(script) => {
            let outcomes = run_script(&mut app, &script)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
            for outcome in &outcomes {
                log::info!("Replay step: {:?}", outcome);
            }
            let json = serde_json::to_string_pretty(&render(&app)).map_err(io::Error::other)?;
            println!("{json}");
            Ok(())
        }
        None => tui::run(app),
    }
}

/// File logger, so log lines never interleave with the terminal UI.
fn init_logging(config: &ResolvedConfig) {
    let level = config
        .log_level
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::Info);
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}
