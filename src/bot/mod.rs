//! Menu-driven conversation flow.

pub mod catalog;
pub mod conversation;
pub mod intent;
pub mod messages;
pub mod models;
pub mod normalizer;
pub mod service;

pub use models::{EnrichedTitle, IncomingMessage, MenuOption, Reply};
pub use service::BotService;
