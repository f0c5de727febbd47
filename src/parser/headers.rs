/// Parsing mode selected by the most recent header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// No header seen yet; content is treated as steps
    #[default]
    Unknown,
    Meta,
    Ingredients,
    Steps,
    Tips,
}

struct HeaderRule {
    mode: Mode,
    keywords: &'static [&'static str],
    markers: &'static [&'static str],
}

const COOK: &str = "\u{1F468}\u{200D}\u{1F373}";
pub(crate) const WARNING: &str = "\u{26A0}\u{FE0F}";
pub(crate) const EXCLAMATION: &str = "\u{2757}\u{FE0F}";

// Checked top to bottom; the first rule that matches picks the mode.
const HEADER_RULES: [HeaderRule; 4] = [
    HeaderRule {
        mode: Mode::Meta,
        keywords: &["核心标签"],
        markers: &[],
    },
    HeaderRule {
        mode: Mode::Ingredients,
        keywords: &["食材准备", "食材", "主料", "配料", "调料"],
        markers: &["🛒", "🧂"],
    },
    HeaderRule {
        mode: Mode::Steps,
        keywords: &["详细做法", "做法概览", "做法", "步骤"],
        markers: &[COOK, "🍳", "🔥"],
    },
    HeaderRule {
        mode: Mode::Tips,
        keywords: &["关键小贴士", "小贴士", "提示", "注意", "锦囊"],
        markers: &["💡", WARNING, EXCLAMATION],
    },
];

/// Markers that make a line a header for title and subtitle detection.
const TITLE_STOP_MARKERS: [&str; 6] = ["🛒", "🧂", COOK, "💡", WARNING, EXCLAMATION];

/// Ingredient headers that also name the category of the lines below them.
const CATEGORY_HEADERS: [&str; 3] = ["主料", "配料", "调料"];

/// A line recognised as a section header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMatch {
    pub mode: Mode,
    /// The whole-line keyword, when matched by keyword
    pub keyword: Option<&'static str>,
    /// Text after the emoji marker, when matched by marker
    pub remainder: Option<String>,
}

impl HeaderMatch {
    /// Ingredient category named by the header itself, such as `主料`.
    pub fn category(&self) -> Option<&'static str> {
        match (self.mode, self.keyword) {
            (Mode::Ingredients, Some(k)) if CATEGORY_HEADERS.contains(&k) => Some(k),
            _ => None,
        }
    }

    /// A tip marker such as `💡` followed by text, inside tips mode, is a tip
    /// bullet rather than a header. Markers of every other mode are headers.
    pub fn is_bullet_in(&self, current: Mode) -> bool {
        match &self.remainder {
            Some(rest) => {
                self.mode == Mode::Tips
                    && current == Mode::Tips
                    && !rest.is_empty()
                    && !is_keyword(rest)
            }
            None => false,
        }
    }
}

fn is_keyword(text: &str) -> bool {
    HEADER_RULES.iter().any(|rule| rule.keywords.contains(&text))
}

/// Whether `line` is a header keyword or starts with a header marker.
///
/// Used to bound title and subtitle extraction. Routing uses [`match_header`].
pub fn is_header_line(line: &str) -> bool {
    is_keyword(line.trim_end()) || TITLE_STOP_MARKERS.iter().any(|m| line.starts_with(m))
}

/// Match a line against the header routing table.
pub fn match_header(line: &str) -> Option<HeaderMatch> {
    let line = line.trim_end();

    HEADER_RULES.iter().find_map(|rule| {
        if let Some(keyword) = rule.keywords.iter().find(|k| **k == line) {
            return Some(HeaderMatch {
                mode: rule.mode,
                keyword: Some(*keyword),
                remainder: None,
            });
        }

        rule.markers.iter().find_map(|marker| {
            line.strip_prefix(marker).map(|rest| HeaderMatch {
                mode: rule.mode,
                keyword: None,
                remainder: Some(rest.trim_start_matches([':', '：', ' ']).to_string()),
            })
        })
    })
}
