use quickchat::adapters::{InMemorySession, ReqwestHttpClient};
use quickchat::api::MessageApi;
use quickchat::app::{App, AppMessage};
use quickchat::auth::{TokenStore, ENV_TOKEN};
use quickchat::cli::{parse_args, run_cli_command};
use quickchat::config::ClientConfig;
use quickchat::logging::init_logging;
use quickchat::terminal::{setup_panic_hook, TerminalManager};
use quickchat::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Loop tick; drives the loader animation and toast expiry.
const TICK: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    color_eyre::install()?;

    let store = TokenStore::new();
    if let Some(result) = run_cli_command(parse_args(std::env::args()), store.as_ref()) {
        return result;
    }

    let config = ClientConfig::load()?;
    let log_path = init_logging(&config);
    tracing::debug!(?log_path, api = %config.api_base_url, "Configuration loaded");

    let env_token = std::env::var(ENV_TOKEN).ok();
    let token = match store.as_ref() {
        Some(store) => store.resolve(env_token),
        None => env_token.filter(|t| !t.trim().is_empty()),
    };
    let session = Arc::new(match token {
        Some(token) => InMemorySession::with_token(token),
        None => InMemorySession::new(),
    });

    let http = ReqwestHttpClient::with_timeout(Duration::from_secs(config.request_timeout_secs))?;
    let api = Arc::new(MessageApi::new(config.api_base_url.clone(), Arc::new(http)));

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut app = App::new(&config, api, session);
        app.load_session();

        let mut manager = TerminalManager::new()?;
        let result = run_app(manager.terminal(), &mut app).await;
        manager.restore()?;
        result
    })
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();
    let mut ticker = tokio::time::interval(TICK);

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }

            event = event_stream.next() => {
                match event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!("Terminal event error: {}", e);
                    }
                    None => app.should_quit = true,
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            tracing::info!("Exiting");
            return Ok(());
        }
    }
}
