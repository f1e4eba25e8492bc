use crate::{api::UserInfo, state::session::use_session};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
}

/// Admin-only gate for the screens under `/admin`.
pub fn session_guard(user_info: Option<&UserInfo>) -> GuardDecision {
    if is_admin_user(user_info) {
        GuardDecision::Allow
    } else {
        GuardDecision::RedirectToLogin
    }
}

fn is_admin_user(user_info: Option<&UserInfo>) -> bool {
    user_info.map(|info| info.is_admin).unwrap_or(false)
}

/// Renders `children` for admins only.
///
/// The redirect itself is issued by the screen controller; this only keeps
/// admin markup out of the page while it happens.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();
    let allowed = create_memo(move |_| {
        session.with(|state| session_guard(state.user_info.as_ref()) == GuardDecision::Allow)
    });
    view! {
        <Show when=move || allowed.get() fallback=|| ()>
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::{is_admin_user, session_guard, GuardDecision};
    use crate::test_support::helpers::{admin_user_info, customer_user_info};

    #[test]
    fn guard_allows_only_admins() {
        let admin = admin_user_info();
        let customer = customer_user_info();
        assert_eq!(session_guard(None), GuardDecision::RedirectToLogin);
        assert_eq!(session_guard(Some(&customer)), GuardDecision::RedirectToLogin);
        assert_eq!(session_guard(Some(&admin)), GuardDecision::Allow);
        assert!(!is_admin_user(None));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::RequireAdmin;
    use crate::test_support::helpers::{admin_user_info, customer_user_info, provide_session};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn require_admin_renders_children_for_admin() {
        let html = render_to_string(move || {
            provide_session(Some(admin_user_info()));
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-protected"</div> }}
                </RequireAdmin>
            }
        });
        assert!(html.contains("admin-protected"));
    }

    #[test]
    fn require_admin_hides_children_for_customer_and_guest() {
        for user in [Some(customer_user_info()), None] {
            let html = render_to_string(move || {
                provide_session(user);
                view! {
                    <RequireAdmin>
                        {|| view! { <div>"admin-protected"</div> }}
                    </RequireAdmin>
                }
            });
            assert!(!html.contains("admin-protected"));
        }
    }
}
