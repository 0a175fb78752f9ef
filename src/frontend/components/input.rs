use leptos::prelude::*;

/// Placeholder-labelled input with its validation message underneath.
#[component]
pub fn TextInput(
    #[prop(into)] name: String,
    #[prop(into)] input_type: String,
    placeholder: Signal<&'static str>,
    value: Signal<String>,
    on_input: Callback<String>,
    error: Signal<Option<&'static str>>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <input
                type=input_type
                id=name.clone()
                name=name
                placeholder=move || placeholder.get()
                class=move || if error.get().is_some() { "form-control is-invalid" } else { "form-control" }
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || error.get().map(|msg| view! { <p class="field-error">{msg}</p> })}
        </div>
    }
}

#[component]
pub fn PasswordInput(
    placeholder: Signal<&'static str>,
    value: Signal<String>,
    on_input: Callback<String>,
    error: Signal<Option<&'static str>>,
) -> impl IntoView {
    view! {
        <TextInput
            name="password"
            input_type="password"
            placeholder=placeholder
            value=value
            on_input=on_input
            error=error
        />
    }
}
