use anyhow::{Context, Result};
use clap::Parser;
use homebase::cli::Cli;
use homebase::tui::Tui;
use homebase::App;
use tracing::info;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(command) = &cli.command {
        return cli.execute(command);
    }

    setup_panic_hook();

    let log_dir = homebase::utils::get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, "homebase.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let config_path = cli.config_path();
    let config = cli.load_config()?;
    let preferences = cli.preferences(&config);
    info!(
        theme = ?preferences.theme,
        locale = %preferences.locale,
        no_color = cli.no_color(),
        "Starting homebase"
    );

    let mut app = App::new(config, config_path, preferences, cli.no_color());
    let mut tui = Tui::new()?;
    let result = app.run(&mut tui);

    // Restore the terminal before the log guard flushes
    drop(tui);
    drop(guard);

    result
}
