#[cfg(not(target_arch = "wasm32"))]
pub mod ssr;

pub mod helpers {
    use crate::api::{Product, UserInfo};
    use crate::state::session::{SessionContext, SessionState};
    use leptos::*;

    pub fn admin_user_info() -> UserInfo {
        UserInfo {
            id: "u-admin".into(),
            name: "Admin User".into(),
            email: "admin@example.com".into(),
            is_admin: true,
            token: Some("admin-token".into()),
        }
    }

    pub fn customer_user_info() -> UserInfo {
        UserInfo {
            id: "u-customer".into(),
            name: "Jane Customer".into(),
            email: "jane@example.com".into(),
            is_admin: false,
            token: Some("customer-token".into()),
        }
    }

    pub fn product(id: &str, name: &str, price: f64) -> Product {
        Product {
            id: id.into(),
            name: name.into(),
            price,
            category: "Office".into(),
            brand: "Acme".into(),
        }
    }

    pub fn provide_session(user_info: Option<UserInfo>) -> SessionContext {
        let ctx = create_signal(SessionState { user_info });
        provide_context::<SessionContext>(ctx);
        ctx
    }
}
