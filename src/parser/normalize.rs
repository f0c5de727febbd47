use regex::Regex;
use std::sync::LazyLock;

static HORIZONTAL_WS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("valid whitespace pattern"));

static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[—\-_=]{3,}$").expect("valid separator pattern"));

/// Replace non-breaking spaces, collapse runs of spaces and tabs, then trim.
pub fn clean_line(line: &str) -> String {
    let line = line.replace('\u{00A0}', " ");
    HORIZONTAL_WS.replace_all(&line, " ").trim().to_string()
}

/// Decorative rules such as `-----` or `———`.
pub fn is_separator_line(line: &str) -> bool {
    SEPARATOR.is_match(line)
}

/// Split raw text into cleaned, non-empty, non-separator lines.
pub fn normalize_lines(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(clean_line)
        .filter(|line| !line.is_empty() && !is_separator_line(line))
        .collect()
}

/// Length as the editor measures it, in UTF-16 code units.
pub(crate) fn display_len(line: &str) -> usize {
    line.encode_utf16().count()
}
