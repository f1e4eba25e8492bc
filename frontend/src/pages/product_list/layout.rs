use crate::components::common::Button;
use leptos::*;

#[component]
pub fn ProductListFrame(
    on_create: Callback<()>,
    #[prop(into)] creating: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="space-y-5">
            <div class="flex items-center justify-between mb-5">
                <h1 class="text-3xl font-bold text-gray-900">{"Products"}</h1>
                <Button on_click=on_create loading=creating>
                    <span class="mr-2 text-xl font-bold" aria-hidden="true">{"+"}</span>
                    {"Create Product"}
                </Button>
            </div>
            {children()}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn frame_renders_heading_and_create_button() {
        let html = render_to_string(move || {
            view! {
                <ProductListFrame on_create=Callback::new(|_| {}) creating=Signal::derive(|| false)>
                    <div>{"child"}</div>
                </ProductListFrame>
            }
        });
        assert!(html.contains("Products"));
        assert!(html.contains("Create Product"));
        assert!(html.contains("child"));
    }
}
