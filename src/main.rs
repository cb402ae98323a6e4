use campus_portal::adapters::{ReqwestHttpClient, SheetDataSource};
use campus_portal::app::{App, AppMessage};
use campus_portal::cli::{cli_output, parse_args};
use campus_portal::logging::init_logging;
use campus_portal::startup::{run_initial_load, PortalConfig};
use campus_portal::terminal::{setup_panic_hook, TerminalManager};
use campus_portal::traits::{DataSource, HttpClient};
use campus_portal::ui;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Main loop tick; drives the splash spinner
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    // Version and help are answered before any initialization
    if let Some(text) = cli_output(&parse_args(std::env::args())) {
        println!("{}", text);
        return Ok(());
    }

    color_eyre::install()?;

    // A missing or bad sheet URL is reported on the plain terminal
    let config = PortalConfig::from_env().wrap_err("invalid portal configuration")?;

    let log_path = init_logging(&config).wrap_err("could not open the log file")?;
    info!(
        version = campus_portal::cli::VERSION,
        log = %log_path.display(),
        sheet_url = %config.sheet_url,
        "starting campus-portal"
    );

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config))
}

async fn run(config: PortalConfig) -> Result<()> {
    let http: Arc<dyn HttpClient> = Arc::new(
        ReqwestHttpClient::with_timeout(config.request_timeout)
            .wrap_err("could not build the HTTP client")?,
    );
    let source: Arc<dyn DataSource> = Arc::new(SheetDataSource::new(
        http,
        config.sheet_url.clone(),
        config.sheets.clone(),
    ));

    let mut term_manager = TerminalManager::new()?;
    let mut app = App::new(config.contact_url.clone());
    let size = term_manager.size()?;
    app.update_terminal_dimensions(size.width, size.height);

    tokio::spawn(run_initial_load(
        source,
        config.splash_delay,
        app.message_tx.clone(),
    ));

    let result = run_app(term_manager.terminal(), &mut app).await;

    term_manager.restore()?;
    info!("campus-portal exited");
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
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => warn!(error = %err, "terminal event error"),
                    // Input closed; nothing more can happen
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                match msg {
                    Some(msg) => app.handle_message(msg),
                    None => message_rx = None,
                }
            }
        }

        for url in app.take_link_requests() {
            open_link(&url);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Open a link in the system browser; failures are logged only.
fn open_link(url: &str) {
    debug!(url, "opening link");
    if let Err(err) = webbrowser::open(url) {
        warn!(url, error = %err, "could not open link");
    }
}
