//! Movie Shelf App
//!
//! Root component: tab bar plus the active demo page.

use leptos::prelude::*;

use crate::components::{DemoTab, DemoTabBar};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{MovieManager, PerformanceLab, PreferencesManager, ProductShowcase};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let (current_tab, set_current_tab) = signal(DemoTab::default());

    // Provide context to all children
    provide_context(AppContext::new(config));

    view! {
        <div class="app-layout">
            <header>
                <h1>"Movie Shelf"</h1>
                <DemoTabBar current_tab=current_tab set_current_tab=set_current_tab />
            </header>

            <main class="main-content">
                {move || match current_tab.get() {
                    DemoTab::Movies => view! { <MovieManager /> }.into_any(),
                    DemoTab::Preferences => view! { <PreferencesManager /> }.into_any(),
                    DemoTab::ProductCard => view! { <ProductShowcase /> }.into_any(),
                    DemoTab::Performance => view! { <PerformanceLab /> }.into_any(),
                }}
            </main>
        </div>
    }
}
