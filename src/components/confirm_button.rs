//! Confirm Button Component
//!
//! Two-step button for destructive actions: the first click asks, the
//! second one runs `on_confirm`.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Step {
    #[default]
    Idle,
    Asking,
}

/// Inline confirm button
///
/// # Arguments
/// * `label` - text of the initial button
/// * `prompt` - question shown while asking
/// * `on_confirm` - runs when the user confirms
#[component]
pub fn ConfirmButton(
    #[prop(into)] label: String,
    #[prop(into, default = "Sure?".to_string())] prompt: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let step = RwSignal::new(Step::Idle);

    view! {
        <span class="confirm-button">
            {move || match step.get() {
                Step::Idle => view! {
                    <button
                        class="confirm-trigger"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            step.set(Step::Asking);
                        }
                    >
                        {label.clone()}
                    </button>
                }.into_any(),
                Step::Asking => view! {
                    <span class="confirm-prompt">{prompt.clone()}</span>
                    <button
                        class="confirm-yes"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            step.set(Step::Idle);
                            on_confirm.run(());
                        }
                    >
                        "Yes"
                    </button>
                    <button
                        class="confirm-no"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            step.set(Step::Idle);
                        }
                    >
                        "No"
                    </button>
                }.into_any(),
            }}
        </span>
    }
}
