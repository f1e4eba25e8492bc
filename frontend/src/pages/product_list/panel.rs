use crate::components::{guard::RequireAdmin, layout::Layout};
use leptos::*;
use leptos_meta::Title;
use leptos_router::{use_navigate, NavigateOptions};

use super::{
    components::{delete_prompt::DeletePrompt, indicators::SliceIndicators, table::ProductListView},
    controller::Confirmation,
    layout::ProductListFrame,
    view_model::use_product_list_view_model,
};

#[component]
pub fn ProductListPage() -> impl IntoView {
    let navigate = use_navigate();
    let navigator = Callback::new(move |path: String| navigate(&path, NavigateOptions::default()));
    let vm = use_product_list_view_model(navigator);

    let creating = Signal::derive(move || vm.store.create.with(|state| state.loading));
    let on_create = Callback::new(move |_: ()| vm.create_product());
    let on_answer = Callback::new(move |answer: Confirmation| vm.answer_delete_prompt(answer));

    view! {
        <Title text="Products | Storefront Admin"/>
        <Layout>
            <RequireAdmin>
                <ProductListFrame on_create=on_create creating=creating>
                    <SliceIndicators delete=vm.store.delete create=vm.store.create />
                    <ProductListView
                        list=vm.store.list
                        on_delete=Callback::new(move |id: String| vm.request_delete(id))
                    />
                </ProductListFrame>
                <DeletePrompt
                    pending=vm.pending_delete
                    list=vm.store.list
                    on_answer=on_answer
                />
            </RequireAdmin>
        </Layout>
    }
}
