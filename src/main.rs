//! Demo driver: applies actions given on the command line and prints the
//! resulting dashboard view as JSON.
//!
//! ```text
//! restaurant-dashboard apply:dessert_discount "scenario:Hot Day" toggle
//! ```

use std::error::Error;
use std::process::ExitCode;
use std::sync::Arc;

use restaurant_dashboard::adapters::{InMemoryEventBus, StaticFixtureSource, YamlFixtureSource};
use restaurant_dashboard::application::{DashboardService, GetDashboardQuery};
use restaurant_dashboard::config::AppConfig;
use restaurant_dashboard::domain::dashboard::DashboardAction;
use restaurant_dashboard::domain::foundation::CommandMetadata;
use restaurant_dashboard::ports::FixtureSource;

const USAGE: &str = "\
Usage: restaurant-dashboard [ACTION ...]

Actions:
  load                 replace the state with the baseline
  apply:<id>           apply a recommendation
  toggle               switch before/after mode
  scenario:<label>     rescale KPIs (e.g. \"scenario:Hot Day\")
  reset                restore the baseline";

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Vec<String>) -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    config.logging.init()?;

    let actions = args
        .iter()
        .map(|arg| arg.parse::<DashboardAction>())
        .collect::<Result<Vec<_>, _>>()?;

    let source: Box<dyn FixtureSource> = match &config.dashboard.fixture_path {
        Some(path) => Box::new(YamlFixtureSource::new(path)),
        None => Box::new(StaticFixtureSource::new()),
    };

    let bus = Arc::new(InMemoryEventBus::new());
    let service = DashboardService::from_source(
        source.as_ref(),
        config.dashboard.store_settings()?,
        bus.clone(),
    )
    .await?;

    service
        .dispatch_all(actions, CommandMetadata::new().with_source("cli"))
        .await?;

    let view = service.view(GetDashboardQuery::default()).await;
    println!("{}", serde_json::to_string_pretty(&view)?);

    tracing::info!(
        dashboard_id = %service.id(),
        events = bus.event_count(),
        "Run complete"
    );
    Ok(())
}
