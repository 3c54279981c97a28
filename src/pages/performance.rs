//! Performance Lab Page

use leptos::prelude::*;

use crate::components::{
    DeferredSection, LowUrgencyFilter, MemoizedTotal, StableCallbackList, TutorialNote,
};
use crate::content::DEFERRED_SECTION;

#[component]
pub fn PerformanceLab() -> impl IntoView {
    view! {
        <section class="demo-page performance-lab">
            <div class="demo">
                <DeferredSection slug=DEFERRED_SECTION />
                <MemoizedTotal />
                <StableCallbackList />
                <LowUrgencyFilter />
            </div>

            <TutorialNote slug="performance" />
        </section>
    }
}
