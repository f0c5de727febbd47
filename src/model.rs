use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static TIMER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s*(分钟|min|m|秒|s)").expect("valid timer pattern"));

/// A structured menu produced from freeform recipe text.
/// All fields can be empty if the text carried no such data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedMenu {
    /// Recipe title (empty string if no title line was found)
    pub title: String,
    /// Short description, newline-joined when it spans several lines
    pub subtitle: String,
    /// Tags such as cuisine or difficulty
    pub meta: Vec<String>,
    pub ingredient_groups: Vec<IngredientGroup>,
    /// Top-level phases of the recipe, none of them empty
    pub sections: Vec<Section>,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub items: Vec<StepItem>,
}

/// One instruction within a section.
///
/// `price` holds the heat/time badge shown next to the step. It keeps the
/// field name of the menu document the editor stores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepItem {
    pub id: String,
    pub name: String,
    pub price: String,
    pub desc: String,
}

/// Stove heat, coarsened to the three levels a flame indicator can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeatLevel {
    Low,
    Medium,
    High,
}

impl HeatLevel {
    /// Classify a heat/time badge. Strong heat wins over medium, medium over low.
    pub fn classify(badge: &str) -> Option<HeatLevel> {
        fn mentions(badge: &str, words: &[&str]) -> bool {
            words.iter().any(|w| badge.contains(w))
        }

        if mentions(badge, &["大火", "猛火", "High"]) {
            Some(HeatLevel::High)
        } else if mentions(badge, &["中火", "Medium"]) {
            Some(HeatLevel::Medium)
        } else if mentions(badge, &["小火", "文火", "微火", "Low"]) {
            Some(HeatLevel::Low)
        } else {
            None
        }
    }
}

impl ParsedMenu {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.subtitle.is_empty()
            && self.meta.is_empty()
            && self.ingredient_groups.is_empty()
            && self.sections.is_empty()
            && self.tips.is_empty()
    }

    /// Total number of steps across all sections
    pub fn step_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// Blank out section and step ids so that output is reproducible
    pub fn without_ids(mut self) -> Self {
        for section in &mut self.sections {
            section.id.clear();
            for item in &mut section.items {
                item.id.clear();
            }
        }
        self
    }
}

impl StepItem {
    /// Countdown length suggested by the step, from the badge first and then the description.
    pub fn timer_seconds(&self) -> Option<u32> {
        let text = format!("{}{}", self.price, self.desc);
        let caps = TIMER_RE.captures(&text)?;
        let value: u32 = caps[1].parse().ok()?;

        match &caps[2] {
            "分钟" | "min" | "m" => value.checked_mul(60),
            _ => Some(value),
        }
    }

    pub fn heat_level(&self) -> Option<HeatLevel> {
        HeatLevel::classify(&self.price)
    }
}
