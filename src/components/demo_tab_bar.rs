//! Demo Tab Bar Component
//!
//! Tab bar for switching between demo pages.

use leptos::prelude::*;

/// Demo pages, in tab order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DemoTab {
    #[default]
    Movies,
    Preferences,
    ProductCard,
    Performance,
}

impl DemoTab {
    pub const ALL: [DemoTab; 4] = [Self::Movies, Self::Preferences, Self::ProductCard, Self::Performance];

    pub fn label(self) -> &'static str {
        match self {
            Self::Movies => "Movies",
            Self::Preferences => "Preferences",
            Self::ProductCard => "Product card",
            Self::Performance => "Performance",
        }
    }
}

/// Demo Tab Bar component
#[component]
pub fn DemoTabBar(
    current_tab: ReadSignal<DemoTab>,
    set_current_tab: WriteSignal<DemoTab>,
) -> impl IntoView {
    view! {
        <nav class="demo-tab-bar">
            {DemoTab::ALL.into_iter().map(|tab| {
                let is_active = move || current_tab.get() == tab;
                let tab_class = move || {
                    if is_active() { "demo-tab active" } else { "demo-tab" }
                };

                view! {
                    <button
                        class=tab_class
                        on:click=move |_| set_current_tab.set(tab)
                    >
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
