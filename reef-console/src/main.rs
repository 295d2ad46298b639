//! Reef Console binary
//!
//! Run: cargo run -p reef-console -- --demo

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use reef_client::{CustomerDirectory, HttpClient};
use reef_console::{App, ConsoleConfig, DemoDirectory, Route, ui};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Default)]
struct CliOptions {
    base_url: Option<String>,
    operator: Option<String>,
    route: Option<String>,
    demo: bool,
}

fn parse_cli_options() -> io::Result<CliOptions> {
    let mut options = CliOptions::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--base-url" => {
                options.base_url = Some(args.next().ok_or_else(|| {
                    io::Error::new(io::ErrorKind::InvalidInput, "--base-url requires a URL")
                })?);
            }
            "--operator" => {
                options.operator = Some(args.next().ok_or_else(|| {
                    io::Error::new(io::ErrorKind::InvalidInput, "--operator requires a name")
                })?);
            }
            "--route" => {
                options.route = Some(args.next().ok_or_else(|| {
                    io::Error::new(io::ErrorKind::InvalidInput, "--route requires a path")
                })?);
            }
            "--demo" => {
                options.demo = true;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("unknown argument: {other}"),
                ));
            }
        }
    }
    Ok(options)
}

fn print_help() {
    println!("reef-console");
    println!();
    println!("Usage:");
    println!("  reef-console [--base-url <url>] [--route <path>] [--operator <name>] [--demo]");
    println!();
    println!("Flags:");
    println!("  --base-url <url>   Customers API base URL");
    println!("  --route <path>     Start screen, e.g. /customers or /customers/new");
    println!("  --operator <name>  Operator shown in the sidebar footer");
    println!("  --demo             Run against a seeded in-memory store");
    println!("  -h, --help         Show this help message");
    println!();
    println!("Environment:");
    println!("  REEF_API_BASE_URL=<url>");
    println!("  REEF_API_TOKEN=<token>");
    println!("  REEF_REQUEST_TIMEOUT_SECS=<seconds>");
    println!("  REEF_OPERATOR=<name>");
    println!("  REEF_DEMO=true|false");
}

fn build_config(options: &CliOptions) -> ConsoleConfig {
    let mut config = ConsoleConfig::from_env();
    if let Some(base_url) = &options.base_url {
        config.client.base_url = base_url.clone();
    }
    if let Some(operator) = &options.operator {
        config.operator = operator.clone();
    }
    if options.demo {
        config.demo = true;
    }
    if let Some(path) = &options.route {
        match Route::parse(path) {
            Ok(route) => config.initial_route = route,
            Err(error) => {
                tracing::warn!(%error, "ignoring start route, falling back to /customers");
            }
        }
    }
    config
}

fn build_directory(config: &ConsoleConfig) -> Arc<dyn CustomerDirectory> {
    if config.demo {
        Arc::new(DemoDirectory::seeded())
    } else {
        Arc::new(HttpClient::new(&config.client))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Route tracing into the in-app log pane
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=warn,reqwest=warn"));

    tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(env_filter)
        .init();

    // Also init log crate adapter just in case dependencies use log crate
    tui_logger::init_logger(log::LevelFilter::Info).ok();
    tui_logger::set_default_level(log::LevelFilter::Info);

    let options = parse_cli_options()?;
    let config = build_config(&options);
    tracing::info!(
        base_url = %config.client.base_url,
        demo = config.demo,
        route = %config.initial_route,
        "starting reef console"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let directory = build_directory(&config);
    let mut app = App::new(&config, directory);

    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        let timeout = Duration::from_millis(100);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    app.handle_key(key);
                }
            }
        }

        app.drain_api_events();
        app.tick();

        if app.should_quit() {
            return Ok(());
        }
    }
}
