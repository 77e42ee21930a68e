//! Navigation invariants
//!
//! Exactly one active screen at a time, matching the last navigation
//! intent; back is single-level and always lands on Home with the
//! selection cleared.

use riff_tui::app::{reduce, Action, AppState, Screen};

use libriffwire::Catalog;

fn booted_state() -> AppState {
    let state = AppState::new(Catalog::builtin().unwrap());
    reduce(state, Action::AssetsLoaded { banner: None })
}

#[test]
fn test_active_screen_matches_last_navigation() {
    let state = booted_state();

    let state = reduce(state, Action::OpenCategories);
    assert_eq!(state.current_screen, Screen::Categories);

    let state = reduce(state, Action::OpenSearch);
    assert_eq!(state.current_screen, Screen::Search);

    let article = state.catalog.featured().clone();
    let state = reduce(state, Action::OpenDetail(article));
    assert_eq!(state.current_screen, Screen::Detail);

    let state = reduce(state, Action::GoBack);
    assert_eq!(state.current_screen, Screen::Home);
}

#[test]
fn test_back_from_detail_lands_on_home() {
    let state = booted_state();
    let article = state.catalog.featured().clone();

    let state = reduce(state, Action::OpenDetail(article));
    let state = reduce(state, Action::GoBack);

    assert_eq!(state.current_screen, Screen::Home);
    assert!(state.selected_article.is_none());
}

#[test]
fn test_back_from_categories_lands_on_home() {
    let state = booted_state();

    let state = reduce(state, Action::OpenCategories);
    let state = reduce(state, Action::GoBack);

    assert_eq!(state.current_screen, Screen::Home);
    assert!(state.selected_article.is_none());
}

#[test]
fn test_back_from_search_lands_on_home() {
    let state = booted_state();

    let state = reduce(state, Action::OpenSearch);
    let state = reduce(state, Action::GoBack);

    assert_eq!(state.current_screen, Screen::Home);
    assert!(state.selected_article.is_none());
}

#[test]
fn test_no_stack_memory_through_intermediate_screens() {
    // categories -> detail -> back must land on home, not categories
    let state = booted_state();

    let state = reduce(state, Action::OpenCategories);
    let article = state.catalog.category_featured()[0].clone();
    let state = reduce(state, Action::OpenDetail(article));
    let state = reduce(state, Action::GoBack);

    assert_eq!(state.current_screen, Screen::Home);
}

#[test]
fn test_selection_is_last_write_wins() {
    let state = booted_state();
    let a = state.catalog.home_articles()[0].clone();
    let b = state.catalog.home_articles()[1].clone();

    let state = reduce(state, Action::OpenDetail(a));
    let state = reduce(state, Action::GoBack);
    let state = reduce(state, Action::OpenDetail(b.clone()));

    // No leakage of the first selection
    assert_eq!(state.selected_article, Some(b));
}

#[test]
fn test_open_categories_and_search_leave_selection_alone() {
    // The selection belongs to the navigator; only open-detail and back
    // touch it.
    let state = booted_state();
    let article = state.catalog.featured().clone();
    let state = reduce(state, Action::OpenDetail(article.clone()));

    let state = reduce(state, Action::OpenCategories);
    assert_eq!(state.selected_article, Some(article.clone()));

    let state = reduce(state, Action::OpenSearch);
    assert_eq!(state.selected_article, Some(article));
}

#[test]
fn test_open_detail_resets_scroll() {
    let mut state = booted_state();
    state.detail.scroll = 40;

    let article = state.catalog.featured().clone();
    let state = reduce(state, Action::OpenDetail(article));

    assert_eq!(state.detail.scroll, 0);
}
