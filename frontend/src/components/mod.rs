pub mod common;
pub mod empty_state;
pub mod guard;
pub mod layout;
