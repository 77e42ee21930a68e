//! riff-tui - terminal news reader for the heavy metal underground
//!
//! A home feed, category browser, simulated search and article detail
//! view over a static catalog, driven by a single reducer-owned state.

use anyhow::Context;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::TextArea;

use libriffwire::assets::AssetLoader;
use libriffwire::share::{share_article, FileShareSurface};
use libriffwire::{Catalog, Config, SearchService};

use riff_tui::app::event::{EventHandler, TuiEvent};
use riff_tui::app::{reduce, Action, AppState, Screen, SearchPhase};
use riff_tui::services::ServiceHandle;
use riff_tui::terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui};
use riff_tui::ui;

const SEARCH_PLACEHOLDER: &str = "Search metal news...";

fn main() -> anyhow::Result<()> {
    libriffwire::logging::init_default();

    let config = Config::load().context("failed to load configuration")?;
    let theme = config.theme().context("invalid theme overrides")?;
    let catalog = Catalog::builtin().context("invalid built-in catalog")?;

    let search = SearchService::new(catalog.search_matches().to_vec(), config.settle_delay());
    let assets = AssetLoader::new(config.banner_path());
    let (services, service_rx) =
        ServiceHandle::new(search, assets).context("failed to start service layer")?;

    install_panic_hook();
    let mut terminal = setup_terminal().context("failed to set up terminal")?;

    let result = run_app(&mut terminal, &config, theme, catalog, services, service_rx);

    restore_terminal(terminal).context("failed to restore terminal")?;
    result
}

fn run_app(
    terminal: &mut Tui,
    config: &Config,
    theme: libriffwire::Theme,
    catalog: Catalog,
    services: ServiceHandle,
    service_rx: crossbeam_channel::Receiver<riff_tui::services::ServiceEvent>,
) -> anyhow::Result<()> {
    let mut state = AppState::new(catalog);
    state.theme = theme;
    // File config supplies the tick rate unless the env var already did
    if std::env::var("RIFFWIRE_TICK_MS").is_err() {
        state.config.tick_rate_ms = config.ui.tick_rate_ms;
    }

    // The boot gate opens when this completes, success or failure
    services.load_assets();

    let share_surface = FileShareSurface::default_dir().map(FileShareSurface::new);

    let mut search_input = new_search_input("");

    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    loop {
        terminal.draw(|frame| ui::render(frame, &state, &search_input))?;

        let tui_event = event_handler.next()?;

        let token_before = state.search.latest_token;

        // Printable input on the search screen goes to the input widget;
        // a text change becomes a query-change action. The share key is
        // translated here so the hand-off below can see the intent.
        let action = match tui_event {
            TuiEvent::Key(key) if routes_to_search_input(&state, key) => {
                let before = search_input.lines().join("\n");
                search_input.input(key);
                let after = search_input.lines().join("\n");
                if after != before {
                    Action::SearchInput(after)
                } else {
                    Action::Tick
                }
            }
            TuiEvent::Key(key) if is_share_key(&state, key) => Action::ShareRequested,
            other => other.into(),
        };

        state = reduce(state, action.clone());

        // Side effects the reducer deliberately does not perform
        if let Action::ShareRequested = action {
            if let Some(article) = &state.selected_article {
                match &share_surface {
                    Some(surface) => {
                        share_article(surface, article);
                    }
                    None => tracing::warn!("no data directory available, share skipped"),
                }
            }
        }

        // A freshly issued token means a new search is in flight
        if state.search.latest_token != token_before
            && state.search.phase == SearchPhase::Searching
        {
            services.search(state.search.latest_token, state.search.query.clone());
        }

        // Drain async completions into the reducer
        while let Ok(event) = service_rx.try_recv() {
            state = reduce(state, event.into());
        }

        // Keep the input widget in lockstep with reducer-side query
        // changes (clear, popular-search selection, screen re-entry)
        if state.search.query != search_input.lines().join("\n") {
            search_input = new_search_input(&state.search.query);
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

fn new_search_input(query: &str) -> TextArea<'static> {
    let mut input = if query.is_empty() {
        TextArea::default()
    } else {
        TextArea::from(vec![query.to_string()])
    };
    input.set_placeholder_text(SEARCH_PLACEHOLDER);
    input.move_cursor(tui_textarea::CursorMove::End);
    input
}

/// Is this the share keypress on the detail screen?
fn is_share_key(state: &AppState, key: KeyEvent) -> bool {
    state.booted
        && state.current_screen == Screen::Detail
        && !state.help_visible
        && key.code == KeyCode::Char('s')
        && key.modifiers == KeyModifiers::NONE
}

/// Should this key feed the search input instead of the reducer?
fn routes_to_search_input(state: &AppState, key: KeyEvent) -> bool {
    if !state.booted || state.current_screen != Screen::Search || state.help_visible {
        return false;
    }

    // Non-text keys the reducer owns on the search screen
    !matches!(
        (key.code, key.modifiers),
        (KeyCode::Esc, _)
            | (KeyCode::Enter, _)
            | (KeyCode::Up, _)
            | (KeyCode::Down, _)
            | (KeyCode::F(_), _)
            | (KeyCode::Char('l'), KeyModifiers::CONTROL)
            | (KeyCode::Char('c'), KeyModifiers::CONTROL)
    )
}
