//! Movie List Component
//!
//! Renders movies and a favorite toggle per row. The list keeps no state;
//! the toggle asks the owner to add or remove through one of two callbacks.

use leptos::prelude::*;

use crate::components::ConfirmButton;
use crate::models::Movie;

/// What clicking a movie's favorite toggle requests from the owner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteAction {
    Add(u32),
    Remove(u32),
}

impl FavoriteAction {
    pub fn for_movie(movie: &Movie) -> Self {
        if movie.is_favorite {
            Self::Remove(movie.id)
        } else {
            Self::Add(movie.id)
        }
    }

    /// Call exactly one of the two handlers
    pub fn dispatch(self, on_add: impl FnOnce(u32), on_remove: impl FnOnce(u32)) {
        match self {
            Self::Add(id) => on_add(id),
            Self::Remove(id) => on_remove(id),
        }
    }
}

/// A single movie row
#[component]
fn MovieRow(
    movie: Movie,
    on_add_favorite: Callback<u32>,
    on_remove_favorite: Callback<u32>,
    on_remove: Option<Callback<u32>>,
) -> impl IntoView {
    let id = movie.id;
    let action = FavoriteAction::for_movie(&movie);
    let genres = movie.genres.join(", ");

    view! {
        <li class=if movie.is_favorite { "movie-row favorite" } else { "movie-row" }>
            {movie.poster.clone().map(|src| view! {
                <img class="movie-poster" src=src alt=movie.title.clone() />
            })}
            <div class="movie-info">
                <span class="movie-title">{movie.title.clone()}</span>
                <span class="movie-year">{format!("({})", movie.year)}</span>
                <span class="movie-rating">{format!("{:.1}/10", movie.rating)}</span>
                <span class="movie-genres">{genres}</span>
            </div>
            <button
                class="favorite-btn"
                title=if movie.is_favorite { "Remove from favorites" } else { "Add to favorites" }
                on:click=move |_| {
                    action.dispatch(|id| on_add_favorite.run(id), |id| on_remove_favorite.run(id))
                }
            >
                {if movie.is_favorite { "★" } else { "☆" }}
            </button>
            {on_remove.map(|on_remove| view! {
                <ConfirmButton
                    label="Remove"
                    prompt="Remove from list?"
                    on_confirm=move |_| on_remove.run(id)
                />
            })}
        </li>
    }
}

/// Movie list with favorite toggles
#[component]
pub fn MovieList(
    #[prop(into)] movies: Signal<Vec<Movie>>,
    #[prop(into)] on_add_favorite: Callback<u32>,
    #[prop(into)] on_remove_favorite: Callback<u32>,
    /// Shows a delete button per row when set
    #[prop(optional, into)] on_remove: Option<Callback<u32>>,
) -> impl IntoView {
    view! {
        <ul class="movie-list">
            <For
                each=move || movies.get()
                // Include the flag so a toggled movie re-renders
                key=|movie| (movie.id, movie.is_favorite)
                children=move |movie| view! {
                    <MovieRow
                        movie=movie
                        on_add_favorite=on_add_favorite
                        on_remove_favorite=on_remove_favorite
                        on_remove=on_remove
                    />
                }
            />
        </ul>
        <Show when=move || movies.with(|m| m.is_empty())>
            <p class="empty-hint">"No movies found."</p>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn make_movie(id: u32, is_favorite: bool) -> Movie {
        Movie {
            id,
            title: format!("Movie {}", id),
            year: 2000,
            poster: None,
            rating: 5.0,
            genres: vec![],
            is_favorite,
        }
    }

    /// Record (add calls, remove calls) for one toggle click
    fn click(movie: &Movie) -> (Vec<u32>, Vec<u32>) {
        let added = RefCell::new(Vec::new());
        let removed = RefCell::new(Vec::new());
        FavoriteAction::for_movie(movie).dispatch(
            |id| added.borrow_mut().push(id),
            |id| removed.borrow_mut().push(id),
        );
        (added.into_inner(), removed.into_inner())
    }

    #[test]
    fn test_toggle_non_favorite_calls_add_once() {
        let (added, removed) = click(&make_movie(1, false));
        assert_eq!(added, vec![1]);
        assert!(removed.is_empty());
    }

    #[test]
    fn test_toggle_favorite_calls_remove_once() {
        let (added, removed) = click(&make_movie(2, true));
        assert!(added.is_empty());
        assert_eq!(removed, vec![2]);
    }

    #[test]
    fn test_action_for_movie() {
        assert_eq!(FavoriteAction::for_movie(&make_movie(7, false)), FavoriteAction::Add(7));
        assert_eq!(FavoriteAction::for_movie(&make_movie(7, true)), FavoriteAction::Remove(7));
    }
}
