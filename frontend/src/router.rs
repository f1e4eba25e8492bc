use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    pages::product_list::ProductListPage,
    state::{products::ProductStoreProvider, session::SessionProvider},
};

pub const LOGIN_PATH: &str = "/login";
pub const PRODUCT_LIST_PATH: &str = "/admin/productlist";

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    provide_meta_context();
    view! {
        <SessionProvider>
            <ProductStoreProvider>
                <Router>
                    <Routes>
                        <Route path="/" view=RootRedirect/>
                        <Route path=PRODUCT_LIST_PATH view=ProductListPage/>
                    </Routes>
                </Router>
            </ProductStoreProvider>
        </SessionProvider>
    }
}

#[component]
fn RootRedirect() -> impl IntoView {
    view! { <Redirect path=PRODUCT_LIST_PATH/> }
}
