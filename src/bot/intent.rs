//! Menu option resolution.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::models::MenuOption;

// Patterns run against folded (lowercase, accent-free) text
static GREETING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:oi+e?|ola|opa|bom\s+dia|boa\s+tarde|boa\s+noite|menu|voltar|inicio)\b")
        .unwrap()
});
static OPTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?:(?:opcao|opc)\.?\s*)?([1-4])\b").unwrap());
static LONE_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\d\s*$").unwrap());

// Runs against the original text so the remainder keeps its accents
static OPTION_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:(?:op[cç][aã]o|opc)\.?\s*)?[1-4]\b[\s.):\-]*").unwrap()
});

/// Lowercase and drop combining marks: "Opção" -> "opcao".
pub fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Greeting or "back to menu" phrase. Overrides any active option.
pub fn is_menu_request(text: &str) -> bool {
    GREETING.is_match(&fold(text))
}

/// Context option first, then a leading `1`-`4` (optionally after "opção").
pub fn extract_option(raw_text: &str, context_option: Option<i64>) -> MenuOption {
    if let Some(option) = context_option.and_then(MenuOption::from_number) {
        return option;
    }

    OPTION
        .captures(&fold(raw_text))
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .and_then(MenuOption::from_number)
        .unwrap_or(MenuOption::None)
}

/// The catalog query with a leading option selector removed
/// ("4 Matrix" -> "Matrix", "opção 4" -> "").
pub fn strip_option_prefix(raw_text: &str) -> String {
    OPTION_PREFIX.replace(raw_text, "").trim().to_string()
}

/// Empty, a greeting, or a single digit: not worth a catalog search.
pub fn is_trivial_query(query: &str) -> bool {
    query.trim().is_empty() || is_menu_request(query) || LONE_DIGIT.is_match(query)
}
