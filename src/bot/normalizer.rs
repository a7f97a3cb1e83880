//! Title clean-up before catalog and metadata searches.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::MediaKind;

static SEASON_EPISODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bS\d{1,2}\s*E\d{1,3}\b").unwrap());
static SEASON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:S\d{1,2}|(?:temporada|season)\s*\d{1,2})\b").unwrap()
});
static YEAR_PARENS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(\d{4}\)").unwrap());
static YEAR_BRACKETS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\d{4}\]").unwrap());
static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

// Any season marker, with or without an episode suffix
static SEASON_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:S\d{1,2}(?:\s*E\d{1,3})?|(?:temporada|season)\s*\d{1,2})\b").unwrap()
});

/// Strip season/episode markers and bracketed years, collapse whitespace.
///
/// Season+episode markers go first so `S1E2` is never split into a bare
/// `S1` match and a stray `E2`.
pub fn normalize_title(raw: &str) -> String {
    let text = SEASON_EPISODE.replace_all(raw, " ");
    let text = SEASON.replace_all(&text, " ");
    let text = YEAR_PARENS.replace_all(&text, " ");
    let text = YEAR_BRACKETS.replace_all(&text, " ");
    let text = MULTI_SPACE.replace_all(&text, " ");
    text.trim().to_string()
}

/// True when the title carries a season marker such as `S1`, `S02E03` or
/// `Temporada 2`.
pub fn has_season_marker(raw: &str) -> bool {
    SEASON_MARKER.is_match(raw)
}

/// Classify an unnormalized title. Must see the raw text: normalization
/// removes the marker this looks for.
pub fn infer_kind(raw: &str) -> MediaKind {
    if has_season_marker(raw) {
        MediaKind::Series
    } else {
        MediaKind::Movie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_season_episode_and_year() {
        assert_eq!(normalize_title("Show S2E5 (2021)"), normalize_title("Show"));
        assert_eq!(normalize_title("Show S2E5 (2021)"), "Show");
    }

    #[test]
    fn test_strips_markers_in_any_case() {
        assert_eq!(normalize_title("the office s03e12"), "the office");
        assert_eq!(normalize_title("Dark S1"), "Dark");
        assert_eq!(normalize_title("La Casa de Papel Temporada 3"), "La Casa de Papel");
        assert_eq!(normalize_title("Duna [2021]"), "Duna");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize_title("  O   Poderoso   Chefão  "), "O Poderoso Chefão");
    }

    #[test]
    fn test_keeps_numbers_that_are_not_markers() {
        assert_eq!(normalize_title("1917"), "1917");
        assert_eq!(normalize_title("Blade Runner 2049"), "Blade Runner 2049");
        assert_eq!(normalize_title("Se7en"), "Se7en");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_title(""), "");
    }

    #[test]
    fn test_infer_kind_reads_raw_title() {
        assert_eq!(infer_kind("Dark S1"), MediaKind::Series);
        assert_eq!(infer_kind("Breaking Bad S05E14"), MediaKind::Series);
        assert_eq!(infer_kind("Matrix (1999)"), MediaKind::Movie);
        assert_eq!(infer_kind(&normalize_title("Dark S1")), MediaKind::Movie);
    }
}
