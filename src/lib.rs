pub mod api;
pub mod api_docs;
pub mod bot;
pub mod domain;
pub mod infrastructure;
pub mod models;
pub mod modules;

pub use infrastructure::config;
pub use infrastructure::db;
pub use infrastructure::server;
pub use modules::integrations::{gemini, tmdb};
