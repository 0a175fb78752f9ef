use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] button_type: String,
) -> impl IntoView {
    let classes = match variant {
        ButtonVariant::Primary => "btn btn-primary btn-full",
        ButtonVariant::Secondary => "btn btn-secondary",
    };

    let button_type = if button_type.is_empty() {
        "submit".to_string()
    } else {
        button_type
    };

    view! {
        <button type=button_type class=classes>
            {children()}
        </button>
    }
}
