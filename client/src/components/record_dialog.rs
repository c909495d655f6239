//! Modal frame for the create/edit dialogs.

use leptos::prelude::*;

/// Backdrop, title, body fields, and Cancel/Save actions.
///
/// Clicking the backdrop cancels; clicks inside the dialog do not bubble.
#[component]
pub fn RecordDialog(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] busy: Signal<bool>,
    on_cancel: Callback<()>,
    on_submit: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || title.get()}</h2>
                {children()}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=move |_| on_submit.run(())
                    >
                        {move || if busy.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
