use serde::{Deserialize, Serialize};

/// Top-level menu choice, resolved once per request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuOption {
    NewCustomer,
    Payment,
    Support,
    Catalog,
    None,
}

impl MenuOption {
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(MenuOption::NewCustomer),
            2 => Some(MenuOption::Payment),
            3 => Some(MenuOption::Support),
            4 => Some(MenuOption::Catalog),
            _ => None,
        }
    }
}

/// Inbound text plus the option the caller remembered from a previous turn
#[derive(Debug, Clone, Default)]
pub struct IncomingMessage {
    pub text: String,
    pub context_option: Option<i64>,
}

/// Catalog title enriched with metadata
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedTitle {
    pub title: String,
    pub synopsis: String,
    pub poster_url: Option<String>,
    pub release_date: String,
    pub season_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub text: String,
}
