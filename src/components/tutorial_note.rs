//! Tutorial Note Component
//!
//! Renders one tutorial section next to its demo.

use leptos::prelude::*;

use crate::content;
use crate::markdown::parse_markdown_inline;

#[component]
pub fn TutorialNote(slug: &'static str) -> impl IntoView {
    let Some(section) = content::find_section(slug) else {
        log::warn!("[TUTORIAL] Unknown section '{}'", slug);
        return view! { <aside class="tutorial-note missing"></aside> }.into_any();
    };

    // Highlighting runs once per mount
    let body = match crate::api::render_section(slug) {
        Ok(html) => html,
        Err(e) => e.to_string(),
    };

    view! {
        <aside class="tutorial-note">
            <h2 inner_html=parse_markdown_inline(section.title)></h2>
            <div class="tutorial-body" inner_html=body></div>
        </aside>
    }
    .into_any()
}
