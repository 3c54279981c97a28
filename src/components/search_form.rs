//! Search Form Component
//!
//! Text field plus submit button. Holds no state of its own: every edit is
//! reported through `on_change`, submission through `on_submit`.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Search input reporting edits and submissions to its owner
#[component]
pub fn SearchForm(
    /// Current text, owned by the parent
    #[prop(into)] query: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "Search movies...".to_string());

    let submit = move |ev: web_sys::SubmitEvent| {
        // Keep the page from navigating
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form class="search-form" on:submit=submit>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || query.get()
                on:input=move |ev| {
                    let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                        return;
                    };
                    on_change.run(input.value());
                }
            />
            <button type="submit">"Search"</button>
        </form>
    }
}
