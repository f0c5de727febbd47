use regex::Regex;
use std::sync::LazyLock;

use super::normalize::{clean_line, display_len};

/// Category used until the text names one.
pub const DEFAULT_CATEGORY: &str = "清单";

/// Names that switch the category when used as `<name>：<items>`.
const CANONICAL_CATEGORIES: [&str; 5] = ["主料", "配料", "调料", "必选", "可选"];

const MAX_CATEGORY_LEN: usize = 12;

const MAX_NAME_LEN: usize = 20;

static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-•·]\s*").expect("valid bullet pattern"));

static NAME_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^:：]+)[:：]\s*(.+)$").expect("valid name/value pattern"));

/// How a line read in ingredient mode is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngredientLine {
    /// A bare category name such as `腌料`; the following items belong to it
    Category(String),
    /// Items to file under `category`, or under the current category when `None`
    Items {
        category: Option<String>,
        items: Vec<String>,
    },
}

fn has_colon(line: &str) -> bool {
    line.contains([':', '：'])
}

pub fn classify_ingredient_line(line: &str) -> IngredientLine {
    if !has_colon(line) && display_len(line) <= MAX_CATEGORY_LEN && !line.starts_with('-') {
        return IngredientLine::Category(line.trim().to_string());
    }

    let bullet = BULLET.replace(line, "");

    let caps = NAME_VALUE
        .captures(&bullet)
        .filter(|caps| display_len(&caps[1]) <= MAX_NAME_LEN);

    let Some(caps) = caps else {
        return IngredientLine::Items {
            category: None,
            items: vec![bullet.into_owned()],
        };
    };

    let name = clean_line(&caps[1]);
    let value = clean_line(&caps[2]);

    if CANONICAL_CATEGORIES.contains(&name.as_str()) {
        let items = value
            .split([',', '，'])
            .map(clean_line)
            .filter(|item| !item.is_empty())
            .collect();

        IngredientLine::Items {
            category: Some(name),
            items,
        }
    } else {
        IngredientLine::Items {
            category: None,
            items: vec![format!("{}：{}", name, value)],
        }
    }
}
