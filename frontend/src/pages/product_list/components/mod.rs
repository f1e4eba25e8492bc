pub mod delete_prompt;
pub mod indicators;
pub mod table;
