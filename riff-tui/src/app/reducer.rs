//! Pure reducer function for state transitions
//!
//! `(State, Action) -> State`, no side effects. The settle timer, asset
//! load and share hand-off all happen outside; their outcomes come back
//! in as actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libriffwire::search::SearchSettled;

use super::actions::{Action, Screen};
use super::state::{AppState, DetailState, SearchPhase, SearchState};

/// Pure reducer function
///
/// Deterministic: same state and action always produce the same result.
/// The navigator pair (`current_screen`, `selected_article`) is only ever
/// written here.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),
        Action::Tick => state,
        Action::Resize(_, _) => state,

        // === Boot ===
        // Failure and success are deliberately identical apart from the
        // banner: both leave the boot gate.
        Action::AssetsLoaded { banner } => AppState {
            booted: true,
            banner,
            ..state
        },

        // === Navigation ===
        Action::OpenDetail(article) => AppState {
            current_screen: Screen::Detail,
            selected_article: Some(article),
            detail: DetailState::default(),
            ..state
        },

        // Single-level back: no stack, so back from anywhere lands on
        // Home and drops the selection.
        Action::GoBack => AppState {
            current_screen: Screen::Home,
            selected_article: None,
            ..state
        },

        Action::OpenCategories => AppState {
            current_screen: Screen::Categories,
            ..state
        },

        // Entering search always starts a fresh query. The generation
        // token is preserved so stale settles from an earlier visit
        // cannot collide with new ones.
        Action::OpenSearch => AppState {
            current_screen: Screen::Search,
            search: SearchState {
                latest_token: state.search.latest_token,
                ..SearchState::default()
            },
            ..state
        },

        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        // === Search ===
        Action::SearchInput(query) => apply_query(state, query),
        Action::PopularSearch(term) => apply_query(state, term),
        Action::SearchClear => apply_query(state, String::new()),

        Action::SearchSettled(settled) => commit_settled(state, settled),

        // === Share ===
        // The hand-off happens outside the reducer; nothing changes here.
        Action::ShareRequested => state,

        // === Help overlay ===
        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },
    }
}

/// Apply a query-text change
///
/// A blank query drops to Idle and clears results synchronously, with no
/// settle delay. A non-blank query issues a fresh generation token and
/// enters Searching, superseding whatever was in flight.
fn apply_query(state: AppState, query: String) -> AppState {
    let search = if query.is_empty() {
        SearchState {
            query,
            phase: SearchPhase::Idle,
            results: Vec::new(),
            latest_token: state.search.latest_token,
            cursor: 0,
        }
    } else {
        SearchState {
            query,
            phase: SearchPhase::Searching,
            results: Vec::new(),
            latest_token: state.search.latest_token + 1,
            cursor: 0,
        }
    };

    AppState { search, ..state }
}

/// Commit or discard a settled search
///
/// Latest-write-wins: only the settle carrying the latest issued token,
/// arriving while that token's search is still in flight, may write
/// results. Anything else is a stale completion and is dropped.
fn commit_settled(state: AppState, settled: SearchSettled) -> AppState {
    let current = &state.search;
    if current.phase != SearchPhase::Searching || settled.token != current.latest_token {
        return state;
    }

    AppState {
        search: SearchState {
            query: current.query.clone(),
            phase: SearchPhase::Settled,
            results: settled.results,
            latest_token: current.latest_token,
            cursor: 0,
        },
        ..state
    }
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. Printable input on the search screen
/// never reaches this function; the event loop routes it into the input
/// widget and emits `SearchInput` instead.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    // Before boot only quitting is possible
    if !state.booted {
        return match (key.code, key.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE)
            | (KeyCode::Char('c'), KeyModifiers::CONTROL) => reduce(state, Action::Quit),
            _ => state,
        };
    }

    // Global keybindings
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            return reduce(state, Action::Quit);
        }

        (KeyCode::F(1), _) => {
            let action = if state.help_visible {
                Action::HideHelp
            } else {
                Action::ShowHelp
            };
            return reduce(state, action);
        }

        (KeyCode::Esc, _) if state.help_visible => {
            return reduce(state, Action::HideHelp);
        }

        (KeyCode::Esc, _) => {
            return reduce(state, Action::GoBack);
        }

        (KeyCode::Char('q'), KeyModifiers::NONE) if state.current_screen != Screen::Search => {
            return reduce(state, Action::Quit);
        }

        _ => {}
    }

    // The overlay swallows everything else
    if state.help_visible {
        return state;
    }

    match state.current_screen {
        Screen::Home => handle_home_key(state, key),
        Screen::Categories => handle_categories_key(state, key),
        Screen::Search => handle_search_key(state, key),
        Screen::Detail => handle_detail_key(state, key),
    }
}

fn handle_home_key(state: AppState, key: KeyEvent) -> AppState {
    let count = state.catalog.home_articles().len();
    match (key.code, key.modifiers) {
        (KeyCode::Up | KeyCode::Char('k'), _) => {
            let cursor = state.home.cursor.saturating_sub(1);
            AppState {
                home: super::state::HomeState { cursor },
                ..state
            }
        }
        (KeyCode::Down | KeyCode::Char('j'), _) => {
            let cursor = (state.home.cursor + 1).min(count.saturating_sub(1));
            AppState {
                home: super::state::HomeState { cursor },
                ..state
            }
        }
        (KeyCode::Enter, _) => match state.home_selection().cloned() {
            Some(article) => reduce(state, Action::OpenDetail(article)),
            None => state,
        },
        (KeyCode::Char('c'), KeyModifiers::NONE) => reduce(state, Action::OpenCategories),
        (KeyCode::Char('s') | KeyCode::Char('/'), KeyModifiers::NONE) => {
            reduce(state, Action::OpenSearch)
        }
        _ => state,
    }
}

fn handle_categories_key(state: AppState, key: KeyEvent) -> AppState {
    let count = state.catalog.category_featured().len();
    match (key.code, key.modifiers) {
        (KeyCode::Up | KeyCode::Char('k'), _) => {
            let cursor = state.categories.cursor.saturating_sub(1);
            AppState {
                categories: super::state::CategoriesState { cursor },
                ..state
            }
        }
        (KeyCode::Down | KeyCode::Char('j'), _) => {
            let cursor = (state.categories.cursor + 1).min(count.saturating_sub(1));
            AppState {
                categories: super::state::CategoriesState { cursor },
                ..state
            }
        }
        (KeyCode::Enter, _) => match state.categories_selection().cloned() {
            Some(article) => reduce(state, Action::OpenDetail(article)),
            None => state,
        },
        (KeyCode::Backspace, _) => reduce(state, Action::GoBack),
        _ => state,
    }
}

/// Only the non-text special keys reach the reducer on the search screen
fn handle_search_key(state: AppState, key: KeyEvent) -> AppState {
    match (key.code, key.modifiers) {
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => reduce(state, Action::SearchClear),

        (KeyCode::Up, _) => {
            let cursor = state.search.cursor.saturating_sub(1);
            AppState {
                search: SearchState {
                    cursor,
                    ..state.search.clone()
                },
                ..state
            }
        }

        (KeyCode::Down, _) => {
            let count = match state.search.phase {
                SearchPhase::Idle => state.catalog.popular_searches().len(),
                SearchPhase::Settled => state.search.results.len(),
                SearchPhase::Searching => 0,
            };
            let cursor = (state.search.cursor + 1).min(count.saturating_sub(1));
            AppState {
                search: SearchState {
                    cursor,
                    ..state.search.clone()
                },
                ..state
            }
        }

        (KeyCode::Enter, _) => match state.search.phase {
            SearchPhase::Idle => match state.popular_selection() {
                Some(term) => {
                    let term = term.to_string();
                    reduce(state, Action::PopularSearch(term))
                }
                None => state,
            },
            SearchPhase::Settled => match state.search_selection().cloned() {
                Some(article) => reduce(state, Action::OpenDetail(article)),
                None => state,
            },
            SearchPhase::Searching => state,
        },

        _ => state,
    }
}

fn handle_detail_key(state: AppState, key: KeyEvent) -> AppState {
    match (key.code, key.modifiers) {
        (KeyCode::Up | KeyCode::Char('k'), _) => AppState {
            detail: DetailState {
                scroll: state.detail.scroll.saturating_sub(1),
            },
            ..state
        },
        (KeyCode::Down | KeyCode::Char('j'), _) => AppState {
            detail: DetailState {
                scroll: state.detail.scroll.saturating_add(1),
            },
            ..state
        },
        (KeyCode::PageUp, _) => AppState {
            detail: DetailState {
                scroll: state.detail.scroll.saturating_sub(10),
            },
            ..state
        },
        (KeyCode::PageDown, _) => AppState {
            detail: DetailState {
                scroll: state.detail.scroll.saturating_add(10),
            },
            ..state
        },
        (KeyCode::Backspace, _) => reduce(state, Action::GoBack),
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libriffwire::Catalog;

    fn fresh_state() -> AppState {
        let mut state = AppState::new(Catalog::builtin().unwrap());
        state.booted = true;
        state
    }

    #[test]
    fn test_reducer_is_pure() {
        let state = fresh_state();
        let before = state.clone();

        let next = reduce(state.clone(), Action::OpenCategories);

        assert_eq!(before.current_screen, Screen::Home);
        assert_eq!(next.current_screen, Screen::Categories);
    }

    #[test]
    fn test_quit_action() {
        let state = fresh_state();
        assert!(!state.should_quit);

        let state = reduce(state, Action::Quit);
        assert!(state.should_quit);
    }

    #[test]
    fn test_open_detail_sets_selection() {
        let state = fresh_state();
        let article = state.catalog.featured().clone();

        let state = reduce(state, Action::OpenDetail(article.clone()));

        assert_eq!(state.current_screen, Screen::Detail);
        assert_eq!(state.selected_article, Some(article));
    }

    #[test]
    fn test_go_back_always_lands_on_home() {
        for opener in [Action::OpenCategories, Action::OpenSearch] {
            let state = reduce(fresh_state(), opener);
            let state = reduce(state, Action::GoBack);

            assert_eq!(state.current_screen, Screen::Home);
            assert_eq!(state.selected_article, None);
        }
    }

    #[test]
    fn test_open_search_resets_query_but_keeps_token() {
        let state = reduce(fresh_state(), Action::OpenSearch);
        let state = reduce(state, Action::SearchInput("doom".to_string()));
        let token = state.search.latest_token;
        assert!(token > 0);

        let state = reduce(state, Action::GoBack);
        let state = reduce(state, Action::OpenSearch);

        assert_eq!(state.search.query, "");
        assert_eq!(state.search.phase, SearchPhase::Idle);
        assert_eq!(state.search.latest_token, token);
    }

    #[test]
    fn test_stale_settle_is_discarded() {
        let state = reduce(fresh_state(), Action::OpenSearch);
        let state = reduce(state, Action::SearchInput("iron".to_string()));
        let stale_token = state.search.latest_token;
        let state = reduce(state, Action::SearchInput("tool".to_string()));

        let decoy = state.catalog.featured().clone();
        let state = reduce(
            state,
            Action::SearchSettled(SearchSettled {
                token: stale_token,
                query: "iron".to_string(),
                results: vec![decoy],
            }),
        );

        // Still waiting on "tool"; the stale "iron" settle changed nothing
        assert_eq!(state.search.phase, SearchPhase::Searching);
        assert!(state.search.results.is_empty());
    }

    #[test]
    fn test_help_overlay_swallows_screen_keys() {
        let state = reduce(fresh_state(), Action::ShowHelp);
        let state = handle_key(
            state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE),
        );

        // 'c' would normally open categories
        assert_eq!(state.current_screen, Screen::Home);
        assert!(state.help_visible);
    }

    #[test]
    fn test_keys_before_boot_are_ignored() {
        let mut state = AppState::new(Catalog::builtin().unwrap());
        state.booted = false;

        let state = handle_key(state, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(state.current_screen, Screen::Home);
        assert_eq!(state.selected_article, None);

        let state = handle_key(
            state,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
        );
        assert!(state.should_quit);
    }
}
