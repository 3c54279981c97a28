//! Checkbox Group Component
//!
//! Multi-select group. Reports the clicked label only; the owner decides
//! whether that adds or removes it (see `store::toggle_selection`).

use leptos::prelude::*;

use super::selector_options::{option_input_id, option_states};

#[component]
pub fn CheckboxGroup(
    #[prop(into)] name: String,
    #[prop(into)] options: Signal<Vec<String>>,
    #[prop(into)] selected: Signal<Vec<String>>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    let group = name.clone();

    view! {
        <fieldset class="checkbox-group">
            <legend>{name}</legend>
            {move || {
                let selected = selected.get();
                option_states(&options.get(), |label| selected.iter().any(|s| s == label))
                    .into_iter()
                    .map(|option| {
                        let input_id = option_input_id(&group, &option.label);
                        let label = option.label.clone();
                        let checked = option.checked;
                        view! {
                            <label class="checkbox-option" for=input_id.clone()>
                                <input
                                    type="checkbox"
                                    id=input_id.clone()
                                    value=label.clone()
                                    prop:checked=checked
                                    on:change=move |_| option.emit(|l| on_change.run(l))
                                />
                                {label}
                            </label>
                        }
                    })
                    .collect_view()
            }}
        </fieldset>
    }
}
