use crate::{
    router::{LOGIN_PATH, PRODUCT_LIST_PATH},
    state::session::{sign_out, use_session},
};
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let (session, set_session) = use_session();
    let user_name = create_memo(move |_| {
        session.with(|state| state.user_info.as_ref().map(|info| info.name.clone()))
    });
    let on_sign_out = move |_| {
        sign_out(set_session);
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href(LOGIN_PATH);
        }
    };
    view! {
        <header class="bg-white shadow-sm border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href=PRODUCT_LIST_PATH class="text-xl font-semibold text-gray-900">
                        "Storefront Admin"
                    </a>
                    <Show when=move || user_name.get().is_some() fallback=|| ()>
                        <div class="flex items-center gap-3 text-sm text-gray-600">
                            <span>{move || user_name.get().unwrap_or_default()}</span>
                            <button
                                type="button"
                                class="px-3 py-1 rounded-md border border-gray-300 hover:bg-gray-100"
                                on:click=on_sign_out
                            >
                                "Sign out"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100">
            <Header />
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8" role="status">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-teal-600"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded mb-4" role="alert">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}
