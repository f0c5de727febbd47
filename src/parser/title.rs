use regex::Regex;
use std::sync::LazyLock;

use super::headers::is_header_line;
use super::normalize::display_len;
use super::steps::parse_step_start;

const MAX_TITLE_LEN: usize = 30;

static TITLE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^a-zA-Z0-9\x{4e00}-\x{9fa5}]+").expect("valid title prefix pattern")
});

/// Title, subtitle and the lines left for routing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleBlock<'a> {
    pub title: String,
    pub subtitle: String,
    pub rest: &'a [String],
}

fn has_colon(line: &str) -> bool {
    line.contains([':', '：'])
}

fn has_bar(line: &str) -> bool {
    line.contains(['|', '｜'])
}

fn looks_like_title(line: &str) -> bool {
    display_len(line) <= MAX_TITLE_LEN && !has_colon(line) && !is_header_line(line)
}

/// Pull the title and subtitle off the front of the normalized lines.
///
/// The subtitle stops before a header, a step start, or a line with a colon
/// or bar; that line is left in `rest`.
pub fn extract_title(lines: &[String]) -> TitleBlock<'_> {
    let Some(first) = lines.first().filter(|l| looks_like_title(l)) else {
        return TitleBlock {
            rest: lines,
            ..Default::default()
        };
    };

    let title = TITLE_PREFIX.replace(first, "").trim().to_string();

    let subtitle_len = lines[1..]
        .iter()
        .take_while(|line| {
            !is_header_line(line)
                && parse_step_start(line).is_none()
                && !has_colon(line)
                && !has_bar(line)
        })
        .count();

    let subtitle = lines[1..1 + subtitle_len].join("\n").trim().to_string();

    TitleBlock {
        title,
        subtitle,
        rest: &lines[1 + subtitle_len..],
    }
}
