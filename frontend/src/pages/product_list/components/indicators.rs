use crate::{
    components::layout::{ErrorMessage, LoadingSpinner},
    state::products::{CreateState, DeleteState},
};
use leptos::*;

/// Progress and failure of the delete and create requests.
///
/// Shown above the table whatever state the list is in.
#[component]
pub fn SliceIndicators(
    #[prop(into)] delete: Signal<DeleteState>,
    #[prop(into)] create: Signal<CreateState>,
) -> impl IntoView {
    let delete_error = Signal::derive(move || delete.with(|state| state.error.clone()));
    let create_error = Signal::derive(move || create.with(|state| state.error.clone()));
    view! {
        <Show when=move || delete.with(|state| state.loading)>
            <LoadingSpinner />
        </Show>
        {move || delete_error.get().map(|message| view! { <ErrorMessage message=message /> })}
        <Show when=move || create.with(|state| state.loading)>
            <LoadingSpinner />
        </Show>
        {move || create_error.get().map(|message| view! { <ErrorMessage message=message /> })}
    }
}
