//! Movie Manager Page
//!
//! Owns the movie collection. The search form and the list only report
//! intent; this page turns it into new collections.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{MovieList, SearchForm, TutorialNote};
use crate::context::use_app_context;
use crate::models::Movie;
use crate::store::{
    carry_favorites, store_add_favorite, store_remove_favorite, store_remove_movie, ShelfState,
    ShelfStateStoreFields, ShelfStore,
};

/// Store the results of search `request`. The page may have been disposed
/// while the fetch was in flight; then nothing is written. Returns whether
/// the results were applied.
fn finish_search(
    store: ShelfStore,
    latest_request: StoredValue<u32>,
    request: u32,
    fetched: Vec<Movie>,
) -> bool {
    let Some(latest) = latest_request.try_get_value() else {
        log::debug!("[MOVIES] Page gone, dropping results of request {}", request);
        return false;
    };
    if latest != request {
        log::debug!("[MOVIES] Dropping stale results of request {}", request);
        return false;
    }
    let count = fetched.len();
    let applied = store
        .movies()
        .try_update(|movies| *movies = carry_favorites(movies, fetched))
        .is_some();
    if applied {
        store.loading().try_update(|loading| *loading = false);
        log::info!("[MOVIES] Loaded {} movies", count);
    }
    applied
}

#[component]
pub fn MovieManager() -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(ShelfState::default());
    let (favorites_only, set_favorites_only) = signal(false);
    // Only the newest search may write its results
    let latest_request = StoredValue::new(0u32);

    let run_search = move || {
        let query = store.query().get_untracked();
        let delay_ms = ctx.fetch_delay_ms();
        latest_request.update_value(|n| *n += 1);
        let request = latest_request.get_value();
        store.loading().set(true);
        log::info!("[MOVIES] Searching '{}' (request {})", query, request);

        spawn_local(async move {
            let fetched = api::search_movies(&query, delay_ms).await;
            finish_search(store, latest_request, request, fetched);
        });
    };

    // Initial load
    run_search();

    let visible = Memo::new(move |_| {
        let movies = store.movies().get();
        if favorites_only.get() {
            movies.into_iter().filter(|m| m.is_favorite).collect()
        } else {
            movies
        }
    });

    let favorite_count = move || store.movies().with(|movies| movies.iter().filter(|m| m.is_favorite).count());

    view! {
        <section class="demo-page movie-manager">
            <div class="demo">
                <SearchForm
                    query=Signal::derive(move || store.query().get())
                    on_change=move |text: String| store.query().set(text)
                    on_submit=move |_| run_search()
                />

                <div class="list-toolbar">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || favorites_only.get()
                            on:change=move |ev| set_favorites_only.set(event_target_checked(&ev))
                        />
                        "Favorites only"
                    </label>
                    <span class="favorite-count">{move || format!("★ {}", favorite_count())}</span>
                </div>

                <Show
                    when=move || !store.loading().get()
                    fallback=|| view! { <p class="loading">"Loading…"</p> }
                >
                    <MovieList
                        movies=visible
                        on_add_favorite=move |id: u32| {
                            log::info!("[MOVIES] Favorite +{}", id);
                            store_add_favorite(&store, id);
                        }
                        on_remove_favorite=move |id: u32| {
                            log::info!("[MOVIES] Favorite -{}", id);
                            store_remove_favorite(&store, id);
                        }
                        on_remove=move |id: u32| {
                            log::info!("[MOVIES] Removed {}", id);
                            store_remove_movie(&store, id);
                        }
                    />
                </Show>
            </div>

            <TutorialNote slug="search-and-list" />
        </section>
    }
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

    fn page_state(owner: &Owner, request: u32) -> (ShelfStore, StoredValue<u32>) {
        owner.with(|| {
            let store = Store::new(ShelfState {
                movies: vec![make_movie(1, true)],
                query: String::new(),
                loading: true,
            });
            (store, StoredValue::new(request))
        })
    }

    #[test]
    fn test_finish_search_applies_latest_results() {
        let page = Owner::new();
        let (store, latest_request) = page_state(&page, 3);

        assert!(finish_search(store, latest_request, 3, vec![make_movie(1, false), make_movie(2, false)]));
        let flags: Vec<(u32, bool)> = store.movies().get_untracked().iter().map(|m| (m.id, m.is_favorite)).collect();
        assert_eq!(flags, vec![(1, true), (2, false)]);
        assert!(!store.loading().get_untracked());
    }

    #[test]
    fn test_finish_search_drops_stale_results() {
        let page = Owner::new();
        let (store, latest_request) = page_state(&page, 4);

        assert!(!finish_search(store, latest_request, 3, vec![]));
        assert_eq!(store.movies().get_untracked().len(), 1);
        assert!(store.loading().get_untracked());
    }

    #[test]
    fn test_finish_search_after_page_disposed() {
        let page = Owner::new();
        let (store, latest_request) = page_state(&page, 1);
        // Switching tabs disposes the page while the fetch is pending
        drop(page);

        assert!(!finish_search(store, latest_request, 1, vec![make_movie(2, false)]));
    }
}
