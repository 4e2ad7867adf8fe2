mod app;
mod cli;
mod config;
mod data;
mod domain;
mod event;
mod geometry;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    config::init_app_config();

    // Initialize application state
    let mut app = App::new();

    // Headless mode for scripts and non-terminal environments
    if args.headless || !is_terminal() {
        return event::run_headless(&mut app, args.json).await;
    }

    // Load the subject list before entering the alternate screen
    if let Err(e) = app.initialize().await {
        eprintln!("Error loading subject catalog: {e}");
        eprintln!("Will continue with limited functionality");
    }

    // Setup terminal
    let mut terminal = terminal::setup()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app).await;

    // Restore terminal
    terminal::cleanup(true, true);

    // Return the result
    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
