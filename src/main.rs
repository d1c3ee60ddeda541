use skeleton::app::{App, AppMessage};
use skeleton::config::ScreenConfig;
use skeleton::logging::{default_log_path, init_logging};
use skeleton::terminal::{setup_panic_hook, TerminalManager};
use skeleton::ui::{self, Density};

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// ~60 frames per second while a shimmer is animating.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

const USAGE: &str = "\
Usage: skeleton [--config <path>]

Shimmer loading placeholders, two ways.

Options:
  --config <path>  JSON file overriding load delays and shimmer timings
  --version        Print version and exit
  --help           Print this help and exit

Keys:
  Tab / Shift+Tab  Move focus between cards
  r / Enter        Refresh the focused card
  1 / 2            Refresh a card directly
  Up / Down        Scroll
  q / Esc          Quit";

/// Value following `flag` on the command line, if present.
fn flag_value(args: &[String], flag: &str) -> Result<Option<PathBuf>> {
    match args.iter().position(|arg| arg == flag) {
        Some(index) => args
            .get(index + 1)
            .map(|value| Some(PathBuf::from(value)))
            .ok_or_else(|| eyre!("{} requires a value", flag)),
        None => Ok(None),
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--version") {
        println!("skeleton {}", VERSION);
        return Ok(());
    }
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", USAGE);
        return Ok(());
    }

    color_eyre::install()?;

    let config = match flag_value(&args, "--config")? {
        Some(path) => ScreenConfig::load(&path)
            .wrap_err_with(|| format!("could not load config from {}", path.display()))?,
        None => ScreenConfig::default(),
    };

    let log_path = default_log_path();
    if let Err(err) = init_logging(&log_path) {
        eprintln!("Warning: logging disabled: {:#}", err);
    }
    tracing::info!(version = VERSION, "starting");

    setup_panic_hook();

    // All state lives on one thread; the simulated loads interleave on it.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run(config))
}

async fn run(config: ScreenConfig) -> Result<()> {
    let mut term_manager = TerminalManager::new()?;

    let mut app = App::new(&config);
    let size = term_manager.size()?;
    app.update_terminal_dimensions(size.width, size.height);
    app.set_density(Density::detect());
    app.mount();

    let result = run_app(term_manager.terminal(), &mut app).await;

    app.unmount();
    term_manager.restore()?;
    tracing::info!("exiting");
    result
}

async fn recv_message(rx: &mut Option<mpsc::UnboundedReceiver<AppMessage>>) -> Option<AppMessage> {
    match rx {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}

async fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx = app.message_rx.take();

    loop {
        // Redraw on state changes, and every frame while a shimmer is showing
        if app.needs_redraw || app.is_animating() {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(FRAME_INTERVAL);

        tokio::select! {
            // Frame boundary: loop around and redraw if animating
            _ = timeout => {}

            event = event_stream.next() => {
                match event {
                    Some(Ok(event)) => {
                        if let Event::Resize(_, _) = event {
                            app.set_density(Density::detect());
                        }
                        app.handle_event(event);
                    }
                    Some(Err(err)) => return Err(err).wrap_err("failed to read terminal event"),
                    None => return Ok(()),
                }
            }

            Some(msg) = recv_message(&mut message_rx) => {
                app.handle_message(msg);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
