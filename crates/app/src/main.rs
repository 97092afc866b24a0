use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppConfig, AppServices, Clock};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::context::build_app_context;
use ui::{App, UiApp};

/// AP exam practice on the desktop.
#[derive(Parser, Debug)]
#[command(name = "ap-prep", version)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Delay of the placeholder AI tutor in milliseconds [env: AP_PREP_TUTOR_DELAY_MS]
    #[arg(long, global = true)]
    tutor_delay_ms: Option<u64>,

    /// Log filter, e.g. `debug` or `services=trace` (falls back to RUST_LOG, then `info`)
    #[arg(long, env = "AP_PREP_LOG", global = true)]
    log: Option<String>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Launch the desktop app (default)
    Ui,
    /// Print the built-in catalog as a tree and exit
    Catalog,
}

fn init_tracing(filter: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let filter = match filter {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| err as Box<dyn std::error::Error>)
}

fn app_config(args: &Args) -> AppConfig {
    let config = AppConfig::from_env();
    match args.tutor_delay_ms {
        Some(ms) => config.with_tutor_delay(Duration::from_millis(ms)),
        None => config,
    }
}

async fn print_catalog(services: &AppServices) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = services.catalog();
    for subject in catalog.list_subjects().await? {
        println!("{} {} ({})", subject.icon(), subject.title(), subject.id());
        for unit in subject.units() {
            let questions = catalog
                .list_questions(unit.id())
                .await?
                .map_or(0, |questions| questions.len());
            println!("  {:<10} {}  [{questions} questions]", unit.id(), unit.title());
        }
    }
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.log.as_deref())?;

    let config = app_config(&args);
    let services = AppServices::in_memory(Clock::Default, config)?;

    match args.command.unwrap_or(Command::Ui) {
        Command::Catalog => print_catalog(&services).await,
        Command::Ui => {
            info!(tutor_delay_ms = config.tutor_delay.as_millis(), "launching desktop ui");
            let app: Arc<dyn UiApp> = Arc::new(services);
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("AP Prep")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
