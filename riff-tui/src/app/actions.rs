//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. Navigation is expressed
//! as named intents; screens never write navigation state directly.

use crossterm::event::KeyEvent;
use libriffwire::search::SearchSettled;
use libriffwire::Article;

/// Actions that trigger state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Boot ===
    /// The startup asset load completed; `banner` is `None` on failure.
    /// Both outcomes leave the boot gate.
    AssetsLoaded { banner: Option<String> },

    // === Navigation intents ===
    /// Open the detail screen for an article; always carries the article,
    /// so a detail screen without a selection is unreachable this way
    OpenDetail(Article),

    /// Single-level back: always lands on Home and clears the selection
    GoBack,

    /// Open the category browser
    OpenCategories,

    /// Open the search screen with a fresh query
    OpenSearch,

    /// Quit the application
    Quit,

    // === Search ===
    /// Query text changed in the search input
    SearchInput(String),

    /// Explicit clear of the query
    SearchClear,

    /// A settle timer fired; committed only when its token is still the
    /// latest one issued
    SearchSettled(SearchSettled),

    /// A popular-search term was selected; equivalent to typing it
    PopularSearch(String),

    // === Share ===
    /// User requested to share the selected article; the hand-off itself
    /// happens outside the reducer
    ShareRequested,

    // === Help overlay ===
    ShowHelp,
    HideHelp,
}

/// Screen identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Home feed
    Home,

    /// Article detail view
    Detail,

    /// Category browser
    Categories,

    /// Search screen
    Search,
}
