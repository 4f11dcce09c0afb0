//! Abbreviation expansion for queries.
//!
//! Off by default: the standard reply path matches on the raw normalized
//! query. Enable it through `assistant.expand_abbreviations`.

use std::sync::LazyLock;

use regex::Regex;

/// Abbreviations and their expansions, applied in this order.
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    ("mcp", "model context protocol"),
    ("api", "application programming interface"),
    ("sdk", "software development kit"),
    ("cli", "command line interface"),
    ("json", "javascript object notation"),
    ("http", "hypertext transfer protocol"),
    ("ws", "websocket"),
    ("stdio", "standard input output"),
];

static PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    ABBREVIATIONS
        .iter()
        .map(|&(abbr, expansion)| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(abbr));
            let regex = Regex::new(&pattern).expect("abbreviation pattern is valid");
            (regex, expansion)
        })
        .collect()
});

/// Lowercase `query` and expand every whole-word abbreviation.
pub fn expand_abbreviations(query: &str) -> String {
    let mut processed = query.to_lowercase();
    for (regex, expansion) in PATTERNS.iter() {
        if regex.is_match(&processed) {
            processed = regex.replace_all(&processed, *expansion).into_owned();
        }
    }
    processed
}
