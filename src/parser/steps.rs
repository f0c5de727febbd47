use regex::Regex;
use std::sync::LazyLock;

use super::normalize::clean_line;

/// What a step-start line opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// A top-level phase such as `一、腌制`
    Section,
    /// A single instruction such as `1. 切块` or `① 切块`
    Step,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepStart {
    pub kind: StepKind,
    pub title: String,
}

// Order matters: the first pattern that matches decides the kind.
static STEP_PATTERNS: LazyLock<Vec<(StepKind, Regex)>> = LazyLock::new(|| {
    [
        (StepKind::Section, r"^[一二三四五六七八九十]+[、.]\s*(.+)$"),
        (StepKind::Step, r"^[0-9]{1,2}\s*[.、)]\s*(.+)$"),
        (StepKind::Step, r"^[①②③④⑤⑥⑦⑧⑨⑩]\s*(.+)$"),
    ]
    .into_iter()
    .map(|(kind, pattern)| (kind, Regex::new(pattern).expect("valid step pattern")))
    .collect()
});

static LEGACY_STEP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^第?\s*([0-9]{1,2})\s*步[:：]?\s*(.*)$").expect("valid legacy step pattern")
});

/// Recognise a line that opens a new section or step.
pub fn parse_step_start(line: &str) -> Option<StepStart> {
    STEP_PATTERNS.iter().find_map(|(kind, re)| {
        re.captures(line).map(|caps| StepStart {
            kind: *kind,
            title: clean_line(&caps[1]),
        })
    })
}

/// `第3步：翻炒` style numbering. Only consulted in step mode, after [`parse_step_start`].
pub fn parse_legacy_step(line: &str) -> Option<StepStart> {
    let caps = LEGACY_STEP.captures(line)?;
    let title = clean_line(&caps[2]);
    let title = if title.is_empty() {
        format!("步骤 {}", &caps[1])
    } else {
        title
    };

    Some(StepStart {
        kind: StepKind::Step,
        title,
    })
}
