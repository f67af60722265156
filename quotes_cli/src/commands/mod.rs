//! CLI subcommand implementations.

pub mod about;
pub mod admin;
pub mod browse;
pub mod category;
pub mod history;
pub mod home;
pub mod search;
pub mod theme;
