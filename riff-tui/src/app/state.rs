//! Application state
//!
//! A single state structure owns everything the UI renders from,
//! including which screen is active and which article is selected. State
//! transitions happen only through the reducer (see `reducer.rs`); the
//! rest of the app can request changes but never performs them.

use libriffwire::search::SearchToken;
use libriffwire::{Article, Catalog, Theme};

use super::actions::Screen;

/// Root application state
///
/// The single source of truth. The navigator pair
/// (`current_screen`, `selected_article`) has exactly one writer: the
/// reducer. Screens are render-only views of this structure.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Has the startup asset load completed? No screen renders before
    /// this is true; a neutral placeholder is shown instead.
    pub booted: bool,

    /// Optional ASCII-art banner for the home header
    pub banner: Option<String>,

    /// Current active screen
    pub current_screen: Screen,

    /// The article the detail screen shows; a read-only copy of a
    /// catalog record
    pub selected_article: Option<Article>,

    /// The static data source
    pub catalog: Catalog,

    /// Resolved color theme
    pub theme: Theme,

    /// Home screen state
    pub home: HomeState,

    /// Categories screen state
    pub categories: CategoriesState,

    /// Detail screen state
    pub detail: DetailState,

    /// Search screen state
    pub search: SearchState,

    /// Help overlay visible?
    pub help_visible: bool,

    /// UI configuration
    pub config: UiConfig,
}

/// Home screen state: a cursor over the pressable article cards
/// (featured first, then the latest list)
#[derive(Debug, Clone, Default)]
pub struct HomeState {
    pub cursor: usize,
}

/// Categories screen state: a cursor over the featured article list
#[derive(Debug, Clone, Default)]
pub struct CategoriesState {
    pub cursor: usize,
}

/// Detail screen state
#[derive(Debug, Clone, Default)]
pub struct DetailState {
    /// Vertical scroll offset into the article body
    pub scroll: u16,
}

/// Search screen state machine
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Current query text
    pub query: String,

    /// Where the machine is: idle, waiting on a settle, or settled
    pub phase: SearchPhase,

    /// Committed results (only ever from the latest issued token)
    pub results: Vec<Article>,

    /// The latest issued generation token. Monotonic for the process
    /// lifetime, surviving screen resets, so a settle from a previous
    /// visit can never collide with a fresh token.
    pub latest_token: SearchToken,

    /// Cursor over popular terms (idle) or results (settled)
    pub cursor: usize,
}

/// Phases of the simulated search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchPhase {
    /// Query is empty; popular and recent searches are shown
    #[default]
    Idle,

    /// A query is in flight, waiting out the settle delay
    Searching,

    /// Results for the latest query are committed
    Settled,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Use unicode glyphs (false = ASCII fallback)
    pub unicode_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        let colors_enabled =
            std::env::var("NO_COLOR").is_err() && std::env::var("RIFFWIRE_NO_COLOR").is_err();

        let unicode_enabled = std::env::var("RIFFWIRE_ASCII").is_err();

        let tick_rate_ms = std::env::var("RIFFWIRE_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);

        Self {
            colors_enabled,
            unicode_enabled,
            tick_rate_ms,
        }
    }
}

impl AppState {
    /// Create the initial state over a catalog
    ///
    /// Starts on Home with nothing selected, gated behind the asset load.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            should_quit: false,
            booted: false,
            banner: None,
            current_screen: Screen::Home,
            selected_article: None,
            catalog,
            theme: Theme::default(),
            home: HomeState::default(),
            categories: CategoriesState::default(),
            detail: DetailState::default(),
            search: SearchState::default(),
            help_visible: false,
            config: UiConfig::default(),
        }
    }

    /// The article under the home cursor
    pub fn home_selection(&self) -> Option<&Article> {
        self.catalog.home_articles().get(self.home.cursor)
    }

    /// The article under the categories cursor
    pub fn categories_selection(&self) -> Option<&Article> {
        self.catalog.category_featured().get(self.categories.cursor)
    }

    /// The result under the search cursor, when settled
    pub fn search_selection(&self) -> Option<&Article> {
        if self.search.phase == SearchPhase::Settled {
            self.search.results.get(self.search.cursor)
        } else {
            None
        }
    }

    /// The popular term under the search cursor, when idle
    pub fn popular_selection(&self) -> Option<&'static str> {
        if self.search.phase == SearchPhase::Idle {
            self.catalog
                .popular_searches()
                .get(self.search.cursor)
                .copied()
        } else {
            None
        }
    }
}
