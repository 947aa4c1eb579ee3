pub mod actions;
pub mod addin;
pub mod api;
pub mod config;
pub mod inference;
pub mod prompts;
