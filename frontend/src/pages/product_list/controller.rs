//! Screen controller for the product list.
//!
//! The screen reacts to a closed set of [`ScreenEvent`]s. Each event runs one
//! cycle through [`transition`], which returns the commands the view model
//! executes. Nothing in here touches signals or the network.

use super::utils::product_edit_path;
use crate::{
    api::UserInfo,
    components::guard::{session_guard, GuardDecision},
    router::LOGIN_PATH,
    state::products::{CreateState, DeleteState, ListState},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    Activated,
    SessionChanged,
    DeleteSucceeded,
    CreateSucceeded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenCommand {
    ResetCreate,
    RedirectToLogin,
    NavigateToEdit(String),
    FetchList,
}

impl ScreenCommand {
    pub fn navigation_target(&self) -> Option<String> {
        match self {
            Self::RedirectToLogin => Some(LOGIN_PATH.to_string()),
            Self::NavigateToEdit(product_id) => Some(product_edit_path(product_id)),
            Self::ResetCreate | Self::FetchList => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScreenPhase {
    #[default]
    Init,
    Loading,
    Ready,
    Error,
    Navigating(String),
    Redirected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenCycle {
    pub phase: ScreenPhase,
    pub commands: Vec<ScreenCommand>,
}

/// The values whose changes re-enter the controller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenTriggers {
    pub session: Option<UserInfo>,
    pub delete_succeeded: bool,
    pub create_succeeded: bool,
    pub created_id: Option<String>,
}

impl ScreenTriggers {
    pub fn capture(session: Option<&UserInfo>, delete: &DeleteState, create: &CreateState) -> Self {
        Self {
            session: session.cloned(),
            delete_succeeded: delete.success,
            create_succeeded: create.success,
            created_id: create.created.as_ref().map(|product| product.id.clone()),
        }
    }
}

/// Maps a trigger change onto the event it stands for.
///
/// Only rising edges count: a success flag going back to `false` (a reset or
/// a new request starting) is not an event.
pub fn next_event(previous: Option<&ScreenTriggers>, current: &ScreenTriggers) -> Option<ScreenEvent> {
    let Some(previous) = previous else {
        return Some(ScreenEvent::Activated);
    };
    let created_changed = previous.created_id != current.created_id;
    if current.create_succeeded
        && current.created_id.is_some()
        && (!previous.create_succeeded || created_changed)
    {
        return Some(ScreenEvent::CreateSucceeded);
    }
    if current.delete_succeeded && !previous.delete_succeeded {
        return Some(ScreenEvent::DeleteSucceeded);
    }
    if previous.session != current.session {
        return Some(ScreenEvent::SessionChanged);
    }
    None
}

pub fn transition(event: ScreenEvent, session: Option<&UserInfo>, create: &CreateState) -> ScreenCycle {
    let mut commands = Vec::new();
    if matches!(event, ScreenEvent::Activated | ScreenEvent::CreateSucceeded) {
        commands.push(ScreenCommand::ResetCreate);
    }

    if session_guard(session) == GuardDecision::RedirectToLogin {
        commands.push(ScreenCommand::RedirectToLogin);
        return ScreenCycle {
            phase: ScreenPhase::Redirected,
            commands,
        };
    }

    // A create result left over from an earlier visit must not redirect again.
    let created = match event {
        ScreenEvent::CreateSucceeded => create.created_product(),
        _ => None,
    };
    if let Some(product) = created {
        commands.push(ScreenCommand::NavigateToEdit(product.id.clone()));
        return ScreenCycle {
            phase: ScreenPhase::Navigating(product.id.clone()),
            commands,
        };
    }

    commands.push(ScreenCommand::FetchList);
    ScreenCycle {
        phase: ScreenPhase::Loading,
        commands,
    }
}

/// Folds the list slice into the phase of the last cycle.
pub fn screen_phase(cycle_phase: &ScreenPhase, list: &ListState) -> ScreenPhase {
    match cycle_phase {
        ScreenPhase::Loading | ScreenPhase::Ready | ScreenPhase::Error => {
            if list.loading {
                ScreenPhase::Loading
            } else if list.error.is_some() {
                ScreenPhase::Error
            } else {
                ScreenPhase::Ready
            }
        }
        other => other.clone(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

/// Returns the id to delete, which only happens on an explicit confirmation.
pub fn resolve_delete(pending: Option<String>, confirmation: Confirmation) -> Option<String> {
    match confirmation {
        Confirmation::Confirmed => pending,
        Confirmation::Declined => None,
    }
}
