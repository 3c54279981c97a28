//! Movie Manager State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! created and owned by the movie manager; children only see read-only
//! slices of it plus callbacks.
//!
//! Every mutation goes through a pure helper that returns a new collection,
//! and the store field is replaced with the result.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Movie;

/// Movie manager state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ShelfState {
    /// Movies returned by the last fetch
    pub movies: Vec<Movie>,
    /// Text currently in the search field
    pub query: String,
    /// A fetch is in flight
    pub loading: bool,
}

/// Type alias for the store
pub type ShelfStore = Store<ShelfState>;

// ========================
// Pure Collection Updates
// ========================

/// New collection with the favorite flag of `id` inverted
pub fn toggle_favorite(movies: &[Movie], id: u32) -> Vec<Movie> {
    movies
        .iter()
        .map(|m| if m.id == id { m.with_favorite(!m.is_favorite) } else { m.clone() })
        .collect()
}

/// New collection with the favorite flag of `id` set to `is_favorite`
pub fn set_favorite(movies: &[Movie], id: u32, is_favorite: bool) -> Vec<Movie> {
    if movies.iter().any(|m| m.id == id && m.is_favorite != is_favorite) {
        toggle_favorite(movies, id)
    } else {
        movies.to_vec()
    }
}

/// New collection without `id`
pub fn remove_movie(movies: &[Movie], id: u32) -> Vec<Movie> {
    movies.iter().filter(|m| m.id != id).cloned().collect()
}

/// Fetched movies with the favorite flags already set in `previous`
pub fn carry_favorites(previous: &[Movie], fetched: Vec<Movie>) -> Vec<Movie> {
    fetched
        .into_iter()
        .map(|m| {
            let is_favorite = previous.iter().any(|p| p.id == m.id && p.is_favorite);
            Movie { is_favorite, ..m }
        })
        .collect()
}

/// Add `label` when absent, remove it when present. Order of the remaining
/// labels is preserved.
pub fn toggle_selection(selected: &[String], label: &str) -> Vec<String> {
    if selected.iter().any(|s| s == label) {
        selected.iter().filter(|s| *s != label).cloned().collect()
    } else {
        let mut next = selected.to_vec();
        next.push(label.to_string());
        next
    }
}

// ========================
// Store Helper Functions
// ========================

/// Mark a movie as favorite in the store
pub fn store_add_favorite(store: &ShelfStore, id: u32) {
    let next = set_favorite(&store.movies().read_untracked(), id, true);
    store.movies().set(next);
}

/// Clear the favorite flag of a movie in the store
pub fn store_remove_favorite(store: &ShelfStore, id: u32) {
    let next = set_favorite(&store.movies().read_untracked(), id, false);
    store.movies().set(next);
}

/// Remove a movie from the store by ID
pub fn store_remove_movie(store: &ShelfStore, id: u32) {
    let next = remove_movie(&store.movies().read_untracked(), id);
    store.movies().set(next);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_movie(id: u32, is_favorite: bool) -> Movie {
        Movie {
            id,
            title: format!("Movie {}", id),
            year: 2000,
            poster: None,
            rating: 7.0,
            genres: vec![],
            is_favorite,
        }
    }

    fn flags(movies: &[Movie]) -> Vec<(u32, bool)> {
        movies.iter().map(|m| (m.id, m.is_favorite)).collect()
    }

    #[test]
    fn test_toggle_favorite() {
        let movies = vec![make_movie(1, false), make_movie(2, true)];

        assert_eq!(flags(&toggle_favorite(&movies, 1)), vec![(1, true), (2, true)]);
        assert_eq!(flags(&toggle_favorite(&movies, 2)), vec![(1, false), (2, false)]);
        // Source collection untouched
        assert_eq!(flags(&movies), vec![(1, false), (2, true)]);
    }

    #[test]
    fn test_toggle_unknown_id_is_identity() {
        let movies = vec![make_movie(1, false)];
        assert_eq!(toggle_favorite(&movies, 99), movies);
    }

    #[test]
    fn test_set_favorite_is_idempotent() {
        let movies = vec![make_movie(1, true)];
        assert_eq!(flags(&set_favorite(&movies, 1, true)), vec![(1, true)]);
        assert_eq!(flags(&set_favorite(&movies, 1, false)), vec![(1, false)]);
    }

    #[test]
    fn test_remove_movie() {
        let movies = vec![make_movie(1, false), make_movie(2, true), make_movie(3, false)];
        let next = remove_movie(&movies, 2);
        assert_eq!(flags(&next), vec![(1, false), (3, false)]);
        assert_eq!(movies.len(), 3);
    }

    #[test]
    fn test_carry_favorites() {
        let previous = vec![make_movie(1, true), make_movie(2, false)];
        let fetched = vec![make_movie(2, false), make_movie(1, false), make_movie(3, false)];
        let next = carry_favorites(&previous, fetched);
        assert_eq!(flags(&next), vec![(2, false), (1, true), (3, false)]);
    }

    #[test]
    fn test_toggle_selection() {
        let selected = vec!["A".to_string(), "B".to_string()];
        assert_eq!(toggle_selection(&selected, "C"), vec!["A", "B", "C"]);
        assert_eq!(toggle_selection(&selected, "A"), vec!["B"]);
        assert!(toggle_selection(&["A".to_string()], "A").is_empty());
    }
}
