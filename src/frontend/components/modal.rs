use leptos::prelude::*;

use crate::frontend::components::{Button, ButtonVariant, ErrorAlert, SuccessAlert};
use crate::frontend::context::LocaleContext;
use crate::i18n::MessageKey;
use crate::models::RecoveryForm;

#[component]
pub fn RecoveryModal(form: RwSignal<RecoveryForm>) -> impl IntoView {
    let locale = expect_context::<LocaleContext>();
    let t = move || locale.messages();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.update(|f| {
            f.submit();
        });
    };

    let error = move || form.with(|f| f.error);

    view! {
        <Show when=move || form.with(|f| f.open)>
            <div class="modal-backdrop">
                <div class="modal-dialog" role="dialog" aria-modal="true">
                    <div class="modal-header">
                        <h2 class="modal-title">{move || t().recovery_title}</h2>
                        <button
                            type="button"
                            class="btn-close"
                            title=move || t().recovery_close
                            on:click=move |_| form.update(|f| f.close())
                        ></button>
                    </div>
                    <form class="modal-body" on:submit=on_submit>
                        <input
                            type="email"
                            name="email"
                            class="form-control"
                            placeholder=move || t().recovery_placeholder
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                        />
                        {move || error().map(|key| {
                            view! { <ErrorAlert message=Signal::derive(move || t().get(key)) /> }
                        })}
                        <Show when=move || form.with(|f| f.success)>
                            <SuccessAlert message=Signal::derive(move || t().get(MessageKey::RecoverySuccess)) />
                        </Show>
                        <Button variant=ButtonVariant::Secondary>
                            {move || t().recovery_submit}
                        </Button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
