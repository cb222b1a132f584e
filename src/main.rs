mod app;
mod config;
mod game;
mod logging;
mod ui;

use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::*;
use crate::game::word_list::FileWordSource;
use crate::game::Game;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event as CEvent, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;
    let log_path = logging::init(&cfg.logging)?;

    let seed = cfg.game.seed.unwrap_or_else(|| rand::rng().random());
    tracing::info!(
        seed,
        word_file = %cfg.game.word_file.display(),
        log = ?log_path,
        "Starting hangman"
    );

    let game = Game::new(
        Box::new(FileWordSource::new(&cfg.game.word_file)),
        StdRng::seed_from_u64(seed),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if cfg.ui.mouse {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app, or show why it cannot start
    let result = match game {
        Ok(game) => run_app(&mut terminal, cfg, game).await,
        Err(e) => {
            tracing::error!(error = %e, "Could not load the first word");
            show_fatal(&mut terminal, &Notice::from_error(&e))
                .await
                .and(Err(e.into()))
        }
    };

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    game: Game,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let tick_rate = std::time::Duration::from_millis(cfg.ui.tick_rate_ms.max(1));
    let mut state = AppState::new(cfg, game);
    let size = terminal.size()?;
    state.viewport = Rect::new(0, 0, size.width, size.height);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);
        for action in actions {
            handler::apply_action(&mut state, action);
        }

        if state.should_quit {
            tracing::info!("Quit");
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}

/// Show a fatal dialog on an empty screen and wait for the player to dismiss it.
async fn show_fatal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    notice: &Notice,
) -> Result<()> {
    let mut reader = EventStream::new();
    terminal.draw(|f| ui::notice::render(f, notice))?;
    while let Some(event) = reader.next().await {
        match event? {
            CEvent::Key(key) if key.kind == KeyEventKind::Press => break,
            CEvent::Resize(_, _) => {
                terminal.draw(|f| ui::notice::render(f, notice))?;
            }
            _ => {}
        }
    }
    Ok(())
}
