use folio::app::{App, SystemOpener};
use folio::cli::{parse_args, run_cli_command, CliCommand, StartOptions};
use folio::config::FolioConfig;
use folio::content::Catalog;
use folio::error::{ErrorContext, FolioError, FolioResult, ResultExt};
use folio::logging;
use folio::terminal::{setup_panic_hook, window_metrics, TerminalManager};
use folio::theme::{FileThemeStore, MemoryThemeStore, SystemPreference, ThemeContext, ThemeStore};
use folio::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind, MouseEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// Animation / effect tick.
const TICK: Duration = Duration::from_millis(16);

/// Rows moved per mouse wheel notch.
const WHEEL_ROWS: i32 = 3;

fn main() -> Result<()> {
    let command = parse_args(std::env::args());
    if let Some(text) = run_cli_command(&command) {
        println!("{}", text);
        return Ok(());
    }
    let CliCommand::Run(options) = command else {
        return Ok(());
    };

    color_eyre::install()?;

    let config = FolioConfig::from_env();
    let mut app = build_app(&config, options).unwrap_or_else(|e| startup_failed(e));

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let mut terminal_manager = TerminalManager::new().unwrap_or_else(|e| startup_failed(e));

    match window_metrics() {
        Ok(metrics) => app.update_viewport(metrics.columns, metrics.rows, metrics.pixel_width),
        Err(e) => {
            warn!("Could not read window size: {}", e);
            let size = terminal_manager.terminal().size()?;
            app.update_viewport(size.width, size.height, 0);
        }
    }

    let result = runtime.block_on(run_app(terminal_manager.terminal(), &mut app));

    terminal_manager.restore()?;
    info!("folio exiting");
    result
}

/// Print the categorized report for a failure before the TUI is up and exit.
fn startup_failed(err: FolioError) -> ! {
    error!("Startup failed [{}]: {}", err.error_code(), err);
    eprintln!("{}", err.report());
    std::process::exit(1);
}

/// Logging, content, theme and consoles, ready to draw.
fn build_app(config: &FolioConfig, options: StartOptions) -> FolioResult<App> {
    let data_dir = config.data_dir()?;
    let log_path = logging::init(&data_dir, &config.log_filter)
        .with_context(|| ErrorContext::new("initialize logging").with_path(&data_dir))?;
    info!(
        "folio {} starting (data dir {}, log {})",
        folio::cli::VERSION,
        data_dir.display(),
        log_path.display()
    );
    if let Some(rejected) = &options.rejected_route {
        warn!("Unrecognized start route '{}', starting at /", rejected);
    }

    let catalog = Catalog::load_embedded()
        .context(ErrorContext::new("load content").with_component("catalog"))?;

    let store: Box<dyn ThemeStore> = if config.persist_theme {
        Box::new(FileThemeStore::new(&data_dir))
    } else {
        Box::new(MemoryThemeStore::new())
    };
    let theme = ThemeContext::hydrate(store, SystemPreference::detect());

    let mut app = App::new(
        catalog,
        theme,
        Box::new(SystemOpener),
        config.effect_delay,
        &data_dir,
    )
    .context(ErrorContext::new("build consoles").with_component("app"))?;
    app.navigate_to(options.route);
    Ok(app)
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    loop {
        // Draw only when something changed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
            app.mark_rendered(Instant::now());
        }

        app.flush_effects(Instant::now());

        if app.should_quit {
            break;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Mouse(mouse))) => match mouse.kind {
                        MouseEventKind::ScrollUp => app.handle_scroll(-WHEEL_ROWS),
                        MouseEventKind::ScrollDown => app.handle_scroll(WHEEL_ROWS),
                        _ => {}
                    },
                    Some(Ok(Event::Resize(columns, rows))) => {
                        let pixel_width = window_metrics().map(|m| m.pixel_width).unwrap_or(0);
                        app.update_viewport(columns, rows, pixel_width);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => warn!("Event stream error: {}", e),
                    None => break,
                }
            }
        }
    }

    Ok(())
}
