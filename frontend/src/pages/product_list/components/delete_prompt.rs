use crate::{
    api::Product,
    pages::product_list::controller::Confirmation,
    state::products::ListState,
};
use leptos::ev::KeyboardEvent;
use leptos::*;

/// Names the product awaiting deletion, falling back to its id when the row
/// is no longer in the list.
pub fn prompt_subject(product_id: &str, items: &[Product]) -> String {
    items
        .iter()
        .find(|product| product.id == product_id)
        .map(|product| format!("{} ({})", product.name, product.id))
        .unwrap_or_else(|| product_id.to_string())
}

/// Yes/no prompt shown while a delete is pending. Every way out of the
/// dialog other than "Yes" answers [`Confirmation::Declined`].
#[component]
pub fn DeletePrompt(
    #[prop(into)] pending: Signal<Option<String>>,
    #[prop(into)] list: Signal<ListState>,
    on_answer: Callback<Confirmation>,
) -> impl IntoView {
    let subject = Signal::derive(move || {
        pending.get().map(|product_id| list.with(|state| prompt_subject(&product_id, &state.items)))
    });
    let decline = move || on_answer.call(Confirmation::Declined);

    view! {
        <Show when=move || subject.with(Option::is_some)>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-black/40"
                    on:click=move |_| decline()
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-white shadow-xl border border-gray-200 p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            decline();
                        }
                    }
                >
                    <h2 class="text-lg font-semibold text-gray-900">{"Delete product"}</h2>
                    <p class="text-sm text-gray-600">{"Are you sure?"}</p>
                    <p class="text-sm font-medium text-gray-900">
                        {move || subject.get().unwrap_or_default()}
                    </p>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-gray-100 text-gray-900 hover:bg-gray-200"
                            on:click=move |_| decline()
                        >
                            {"No"}
                        </button>
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-red-600 text-white hover:bg-red-700"
                            on:click=move |_| on_answer.call(Confirmation::Confirmed)
                        >
                            {"Yes"}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
