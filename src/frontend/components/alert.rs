use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
enum AlertVariant {
    #[default]
    Success,
    Error,
}

#[component]
fn Alert(
    message: Signal<&'static str>,
    #[prop(optional)] variant: AlertVariant,
) -> impl IntoView {
    let classes = match variant {
        AlertVariant::Success => "alert alert-success",
        AlertVariant::Error => "alert alert-danger",
    };

    view! {
        <div class=classes role="alert">
            {move || message.get()}
        </div>
    }
}

#[component]
pub fn SuccessAlert(message: Signal<&'static str>) -> impl IntoView {
    view! { <Alert message=message variant=AlertVariant::Success /> }
}

#[component]
pub fn ErrorAlert(message: Signal<&'static str>) -> impl IntoView {
    view! { <Alert message=message variant=AlertVariant::Error /> }
}
