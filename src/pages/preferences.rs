//! Preferences Page
//!
//! Owner of a single-select genre and a multi-select category list.

use leptos::prelude::*;

use crate::components::{CheckboxGroup, RadioGroup, TutorialNote};
use crate::store::toggle_selection;

const GENRES: &[&str] = &["Drama", "Comedy", "Sci-Fi", "Animation", "Thriller"];
const CATEGORIES: &[&str] = &["New releases", "Classics", "Award winners", "Family friendly"];

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[component]
pub fn PreferencesManager() -> impl IntoView {
    let (genre, set_genre) = signal(GENRES[0].to_string());
    let (categories, set_categories) = signal(Vec::<String>::new());

    let summary = move || {
        let categories = categories.get();
        let categories = if categories.is_empty() {
            "none".to_string()
        } else {
            categories.join(", ")
        };
        format!("Genre: {} / Categories: {}", genre.get(), categories)
    };

    view! {
        <section class="demo-page preferences">
            <div class="demo">
                <RadioGroup
                    name="genre"
                    options=Signal::stored(labels(GENRES))
                    selected=genre
                    on_change=move |label: String| {
                        log::debug!("[PREFS] Genre -> {}", label);
                        set_genre.set(label);
                    }
                />
                <CheckboxGroup
                    name="categories"
                    options=Signal::stored(labels(CATEGORIES))
                    selected=categories
                    on_change=move |label: String| {
                        log::debug!("[PREFS] Category toggled: {}", label);
                        set_categories.update(|c| *c = toggle_selection(c, &label));
                    }
                />
                <p class="summary">{summary}</p>
            </div>

            <TutorialNote slug="selector-groups" />
        </section>
    }
}
