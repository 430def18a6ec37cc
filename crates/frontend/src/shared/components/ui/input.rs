use leptos::prelude::*;

/// Input component with label, helper text and invalid state
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Helper text rendered under the field
    #[prop(optional, into)]
    help: MaybeProp<String>,
    /// Marks the field invalid for assistive tech and styling (reactive)
    #[prop(optional, into)]
    invalid: MaybeProp<bool>,
    /// inputmode attribute, e.g. "numeric"
    #[prop(optional, into)]
    input_mode: MaybeProp<String>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_inputmode = move || input_mode.get().unwrap_or_else(|| "text".to_string());
    let is_invalid = move || invalid.get().unwrap_or(false);

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class=move || {
                    if is_invalid() {
                        "form__input form__input--invalid".to_string()
                    } else {
                        "form__input".to_string()
                    }
                }
                type="text"
                inputmode=input_inputmode
                value=move || value.get()
                prop:value=move || value.get()
                placeholder=input_placeholder
                aria-invalid=move || is_invalid().to_string()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || help.get().map(|h| view! {
                <p class="form__help">{h}</p>
            })}
        </div>
    }
}
