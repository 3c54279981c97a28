//! Radio Group Component
//!
//! Single-select group. All inputs share one `name`, so the browser allows
//! only one checked option.

use leptos::prelude::*;

use super::selector_options::{option_input_id, option_states};

#[component]
pub fn RadioGroup(
    /// Group name, also used as the `<fieldset>` legend
    #[prop(into)] name: String,
    #[prop(into)] options: Signal<Vec<String>>,
    #[prop(into)] selected: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    let group = name.clone();

    view! {
        <fieldset class="radio-group">
            <legend>{name}</legend>
            {move || {
                let selected = selected.get();
                option_states(&options.get(), |label| label == selected)
                    .into_iter()
                    .map(|option| {
                        let input_id = option_input_id(&group, &option.label);
                        let label = option.label.clone();
                        let checked = option.checked;
                        view! {
                            <label class="radio-option" for=input_id.clone()>
                                <input
                                    type="radio"
                                    id=input_id.clone()
                                    name=group.clone()
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
