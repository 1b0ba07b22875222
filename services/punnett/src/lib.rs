pub mod api;
pub mod config;
pub mod genetics;
pub mod schema;
