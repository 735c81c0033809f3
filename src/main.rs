use feedboard::adapters::PlaceholderImages;
use feedboard::app::App;
use feedboard::cli::{parse_args, run_cli_command, CliCommand};
use feedboard::client::ApiClient;
use feedboard::config::DashboardConfig;
use feedboard::logging::{init_file_logging, init_stderr_logging};
use feedboard::pipeline::Pipeline;
use feedboard::ui;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// UI tick for spinner animation
const TICK_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args());
    match command {
        CliCommand::RunTui => {
            init_file_logging();
        }
        CliCommand::Snapshot(_) => init_stderr_logging(),
        _ => {}
    }

    let config = DashboardConfig::from_env();
    if let Some(result) = run_cli_command(command, &config) {
        return result;
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_tui(config))
}

async fn run_tui(config: DashboardConfig) -> Result<()> {
    info!(
        "Starting feedboard {} against {}",
        feedboard::cli::VERSION,
        config.base_url
    );

    let client = ApiClient::from_config(&config)?;
    let pipeline = Pipeline::new(client, Arc::new(PlaceholderImages::new()), &config);
    let mut app = App::new(pipeline, config);

    setup_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    app.start();
    let result = run_app(&mut terminal, &mut app).await;
    app.quit();

    restore_terminal(&mut terminal)?;
    if let Err(e) = &result {
        error!("Event loop failed: {}", e);
    }
    info!("Exiting");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let Some(mut message_rx) = app.message_rx.take() else {
        return Ok(());
    };

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK_INTERVAL);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                        app.mark_dirty();
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
            }

            Some(message) = message_rx.recv() => {
                app.handle_message(message);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal<B: ratatui::backend::Backend + io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
