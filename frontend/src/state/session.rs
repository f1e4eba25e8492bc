use crate::{api::UserInfo, utils::storage};
use leptos::*;

pub const USER_INFO_KEY: &str = "userInfo";

pub type SessionContext = (ReadSignal<SessionState>, WriteSignal<SessionState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user_info: Option<UserInfo>,
}

impl SessionState {
    pub fn signed_in(user_info: UserInfo) -> Self {
        Self {
            user_info: Some(user_info),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user_info
            .as_ref()
            .map(|info| info.is_admin)
            .unwrap_or(false)
    }
}

/// Reads the user info the login view persisted, if any.
pub fn load_stored_user_info() -> Option<UserInfo> {
    let raw = storage::get_item(USER_INFO_KEY).ok().flatten()?;
    parse_user_info(&raw)
}

fn parse_user_info(raw: &str) -> Option<UserInfo> {
    match serde_json::from_str(raw) {
        Ok(info) => Some(info),
        Err(err) => {
            log::warn!("ignoring malformed stored user info: {}", err);
            None
        }
    }
}

pub fn clear_stored_user_info() {
    if let Err(err) = storage::remove_item(USER_INFO_KEY) {
        log::debug!("could not clear stored user info: {}", err);
    }
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let ctx = create_signal(SessionState {
        user_info: load_stored_user_info(),
    });
    provide_context::<SessionContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| create_signal(SessionState::default()))
}

/// Drops the session both in memory and in storage.
pub fn sign_out(set_session: WriteSignal<SessionState>) {
    clear_stored_user_info();
    set_session.set(SessionState::default());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::admin_user_info;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn stored_admin_flag_alone_is_an_admin_session() {
        let info = parse_user_info(r#"{"isAdmin": true}"#).expect("minimal user info");
        assert!(SessionState::signed_in(info).is_admin());
        assert!(parse_user_info("not json").is_none());
    }

    #[test]
    fn use_session_returns_signed_out_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_session();
            let snapshot = state.get();
            assert!(snapshot.user_info.is_none());
            assert!(!snapshot.is_admin());
        });
    }

    #[test]
    fn sign_out_clears_user_info() {
        with_runtime(|| {
            let (state, set_state) = create_signal(SessionState::signed_in(admin_user_info()));
            provide_context((state, set_state));
            assert!(use_session().0.get().is_admin());

            sign_out(set_state);
            assert_eq!(state.get(), SessionState::default());
        });
    }

    #[test]
    fn stored_user_info_is_absent_on_host() {
        assert!(load_stored_user_info().is_none());
    }
}
