use segmented_counter::app::App;
use segmented_counter::config::{AppConfig, ConfigManager};
use segmented_counter::logging::init_logging;
use segmented_counter::terminal::{setup_panic_hook, TerminalManager};
use segmented_counter::ui;

use color_eyre::Result;
use crossterm::event::EventStream;
use futures::StreamExt;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Write the default config so it can be edited.
fn handle_init_config(manager: &ConfigManager) -> Result<()> {
    let path = manager.config_path();
    if path.exists() {
        println!("Config already exists: {}", path.display());
        return Ok(());
    }
    manager.save(&AppConfig::default())?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Draw, then wait for the next terminal event, until the app quits.
async fn run(app: &mut App) -> Result<()> {
    let mut term_manager = TerminalManager::new()?;
    let mut events = EventStream::new();

    while !app.should_quit {
        if app.needs_redraw {
            term_manager.terminal().draw(|frame| ui::render(frame, app))?;
            app.needs_redraw = false;
        }

        match events.next().await {
            Some(Ok(event)) => app.handle_event(event),
            Some(Err(err)) => {
                tracing::error!(error = %err, "terminal event stream failed");
                return Err(err.into());
            }
            None => break,
        }
    }

    term_manager.restore()?;
    Ok(())
}

fn main() -> Result<()> {
    // Handle --version flag before any initialization
    if std::env::args().any(|arg| arg == "--version") {
        println!("segmented-counter {}", VERSION);
        return Ok(());
    }

    color_eyre::install()?;

    let manager = ConfigManager::new()?;
    if std::env::args().any(|arg| arg == "--init-config") {
        return handle_init_config(&manager);
    }

    let (config, source) = manager.load_with_source()?;
    init_logging(&manager.log_path(), &config.log_level)?;
    source.log();

    let mut app = App::new(&config)?;

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(run(&mut app));

    if let Err(ref err) = result {
        tracing::error!(error = %err, "exiting with error");
    }
    tracing::info!("exiting");
    result
}
