pub mod common;
pub mod completions;
pub mod config;
pub mod feed;
pub mod record;
pub mod reset;
pub mod show;
pub mod visit;
pub mod visited;
