use regex::Regex;
use std::sync::LazyLock;

static HEAT_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"大火|中火|小火|微火|猛火|文火|转.*?火|油温.*?成热|[0-9]+\s*(?:分钟|min|m|秒|s)|约\s*[0-9]+\s*(?:分钟|秒)",
    )
    .expect("valid heat/time pattern")
});

/// Collect every heat level or duration mentioned in `line`, space-joined.
///
/// Returns `None` when nothing matches.
pub fn extract_heat_time(line: &str) -> Option<String> {
    let hits: Vec<&str> = HEAT_TIME.find_iter(line).map(|m| m.as_str()).collect();

    if hits.is_empty() {
        None
    } else {
        Some(hits.join(" "))
    }
}
