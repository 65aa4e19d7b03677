//! Country name normalization and `<main>` extraction.

use regex::Regex;
use std::sync::LazyLock;

/// First `<main ...>...</main>` pair, any case, shortest body, across lines.
static MAIN_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<main[^>]*>([\s\S]*?)</main>").expect("main element pattern is valid")
});

/// Maps a country name to the metadata site's path segment:
/// lowercase, spaces replaced by `_`.
pub fn normalize_country_name(country: &str) -> String {
    country.to_lowercase().replace(' ', "_")
}

/// Returns the inner HTML of the first `<main>` element, or the whole
/// document when there is none.
pub fn extract_main_content(html: &str) -> &str {
    MAIN_ELEMENT
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map_or(html, |m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_country_name() {
        assert_eq!(normalize_country_name("France"), "france");
        assert_eq!(normalize_country_name("United States"), "united_states");
        assert_eq!(
            normalize_country_name("Bosnia and Herzegovina"),
            "bosnia_and_herzegovina"
        );
        assert_eq!(normalize_country_name("Côte d'Ivoire"), "côte_d'ivoire");
    }

    #[test]
    fn test_normalize_replaces_every_space() {
        assert_eq!(normalize_country_name("  a  b "), "__a__b_");
    }

    #[test]
    fn test_extract_main_with_attributes() {
        let html = r#"<html><body><nav>x</nav><main id="x">BODY</main><footer/></body></html>"#;
        assert_eq!(extract_main_content(html), "BODY");
    }

    #[test]
    fn test_extract_main_case_insensitive() {
        let html = "<HTML><MAIN class=\"c\">Inner <b>bold</b></Main></HTML>";
        assert_eq!(extract_main_content(html), "Inner <b>bold</b>");
    }

    #[test]
    fn test_extract_main_non_greedy_takes_first_pair() {
        let html = "<main>first</main><main>second</main>";
        assert_eq!(extract_main_content(html), "first");
    }

    #[test]
    fn test_extract_main_spans_lines() {
        let html = "<main>\n  <h1>France</h1>\n  <p>Bollards</p>\n</main>";
        assert_eq!(
            extract_main_content(html),
            "\n  <h1>France</h1>\n  <p>Bollards</p>\n"
        );
    }

    #[test]
    fn test_extract_without_main_returns_full_body() {
        let html = "<div>no main here</div>";
        assert_eq!(extract_main_content(html), html);
    }

    #[test]
    fn test_extract_unclosed_main_returns_full_body() {
        let html = "<main>never closed";
        assert_eq!(extract_main_content(html), html);
    }

    #[test]
    fn test_extract_empty_main() {
        assert_eq!(extract_main_content("<main></main>"), "");
    }
}
