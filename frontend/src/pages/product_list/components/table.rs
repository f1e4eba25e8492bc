use crate::{
    api::Product,
    components::{
        common::{Button, ButtonVariant},
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner},
    },
    pages::product_list::utils::{format_price, product_edit_path},
    state::products::ListState,
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListView<'a> {
    Loading,
    Failed(&'a str),
    Empty,
    Table(&'a [Product]),
}

/// Loading wins over an error, and an error hides the (stale) table.
pub fn list_view(state: &ListState) -> ListView<'_> {
    if state.loading {
        ListView::Loading
    } else if let Some(message) = state.error.as_deref() {
        ListView::Failed(message)
    } else if state.items.is_empty() {
        ListView::Empty
    } else {
        ListView::Table(&state.items)
    }
}

#[component]
pub fn ProductListView(
    #[prop(into)] list: Signal<ListState>,
    on_delete: Callback<String>,
) -> impl IntoView {
    move || {
        list.with(|state| match list_view(state) {
            ListView::Loading => view! { <LoadingSpinner /> }.into_view(),
            ListView::Failed(message) => {
                view! { <ErrorMessage message=message.to_string() /> }.into_view()
            }
            ListView::Empty => view! {
                <EmptyState
                    title="No products yet"
                    description="Use \"Create Product\" to add a draft product."
                />
            }
            .into_view(),
            ListView::Table(products) => {
                let rows = products
                    .iter()
                    .cloned()
                    .map(|product| view! { <ProductRow product=product on_delete=on_delete /> })
                    .collect_view();
                view! { <ProductTable rows=rows /> }.into_view()
            }
        })
    }
}

#[component]
fn ProductTable(rows: View) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow-lg px-5 py-5 overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200 text-sm">
                <thead>
                    <tr>
                        <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"ID"}</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"NAME"}</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"PRICE"}</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"CATEGORY"}</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"BRAND"}</th>
                        <th class="px-4 py-2"></th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-200 [&>tr:nth-child(odd)]:bg-gray-50">
                    {rows}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn ProductRow(product: Product, on_delete: Callback<String>) -> impl IntoView {
    let edit_href = product_edit_path(&product.id);
    let product_id = product.id.clone();
    let delete_clicked = Callback::new(move |_: ()| on_delete.call(product_id.clone()));
    view! {
        <tr>
            <td class="px-4 py-2 whitespace-nowrap text-gray-900">{product.id}</td>
            <td class="px-4 py-2 whitespace-nowrap text-gray-900">{product.name}</td>
            <td class="px-4 py-2 whitespace-nowrap text-gray-900">{format_price(product.price)}</td>
            <td class="px-4 py-2 whitespace-nowrap text-gray-900">{product.category}</td>
            <td class="px-4 py-2 whitespace-nowrap text-gray-900">{product.brand}</td>
            <td class="px-4 py-2">
                <div class="flex justify-end items-center gap-4">
                    <a
                        href=edit_href
                        aria-label="Edit product"
                        class="inline-flex items-center rounded-md px-3 py-2 text-sm font-semibold bg-teal-600 text-white hover:bg-teal-700"
                    >
                        {"Edit"}
                    </a>
                    <Button variant=ButtonVariant::Danger on_click=delete_clicked>
                        {"Delete"}
                    </Button>
                </div>
            </td>
        </tr>
    }
}
