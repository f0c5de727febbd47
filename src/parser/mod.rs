//! Line-oriented parser turning freeform recipe text into a [`ParsedMenu`].
//!
//! Raw text is normalized into lines, the title and subtitle are pulled off
//! the front, and every remaining line is routed by the mode chosen by the
//! most recent header.

pub mod headers;
pub mod heat;
pub mod ingredients;
pub mod normalize;
pub mod steps;
pub mod title;

use log::{debug, trace};

use crate::model::{IngredientGroup, ParsedMenu, Section, StepItem};

pub use self::headers::{is_header_line, match_header, HeaderMatch, Mode};
pub use self::heat::extract_heat_time;
pub use self::ingredients::{classify_ingredient_line, IngredientLine, DEFAULT_CATEGORY};
pub use self::normalize::{clean_line, normalize_lines};
pub use self::steps::{parse_legacy_step, parse_step_start, StepKind, StepStart};
pub use self::title::{extract_title, TitleBlock};

use self::headers::{EXCLAMATION, WARNING};

const DEFAULT_SECTION_TITLE: &str = "步骤";

/// Parse freeform recipe text. Never fails; unrecognised text degrades to
/// plain step descriptions.
pub fn parse_recipe_text(raw: &str) -> ParsedMenu {
    let lines = normalize_lines(raw);
    let block = extract_title(&lines);

    debug!(
        "Parsing recipe text: {} lines, title {:?}",
        lines.len(),
        block.title
    );

    let builder = MenuBuilder::new(block.title, block.subtitle);
    block
        .rest
        .iter()
        .fold(builder, |builder, line| builder.feed(line))
        .finish()
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Accumulator threaded through the line scan.
///
/// `section` and `step` are the open cursors: the step, when present, is
/// always the last item of the open section.
#[derive(Debug)]
pub struct MenuBuilder {
    menu: ParsedMenu,
    mode: Mode,
    category: String,
    section: Option<Section>,
    step: Option<StepItem>,
}

impl MenuBuilder {
    pub fn new(title: String, subtitle: String) -> Self {
        MenuBuilder {
            menu: ParsedMenu {
                title,
                subtitle,
                ..Default::default()
            },
            mode: Mode::Unknown,
            category: DEFAULT_CATEGORY.to_string(),
            section: None,
            step: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Route one normalized line.
    pub fn feed(mut self, line: &str) -> Self {
        let line = clean_line(line);
        if line.is_empty() {
            return self;
        }

        if let Some(header) = match_header(&line) {
            if !header.is_bullet_in(self.mode) {
                self.switch_mode(header);
                return self;
            }
        }

        trace!("{:?}: {}", self.mode, line);

        match self.mode {
            Mode::Meta => self.push_meta(&line),
            Mode::Ingredients => self.push_ingredient(&line),
            Mode::Tips => self.push_tip(&line),
            Mode::Steps | Mode::Unknown => self.push_step_line(&line),
        }
        self
    }

    /// Close the open section and return the menu.
    pub fn finish(mut self) -> ParsedMenu {
        self.close_section();
        self.menu
    }

    fn switch_mode(&mut self, header: HeaderMatch) {
        debug!("Switching to {:?} mode", header.mode);
        self.mode = header.mode;
        if let Some(category) = header.category() {
            self.category = category.to_string();
        }
    }

    fn push_meta(&mut self, line: &str) {
        if line.contains(['|', '｜']) {
            self.menu.meta.extend(
                line.split(['|', '｜'])
                    .map(clean_line)
                    .filter(|part| !part.is_empty()),
            );
        } else {
            self.menu.meta.push(line.to_string());
        }
    }

    fn push_ingredient(&mut self, line: &str) {
        match classify_ingredient_line(line) {
            IngredientLine::Category(name) => {
                if !name.is_empty() {
                    self.category = name;
                }
            }
            IngredientLine::Items { category, items } => {
                if let Some(category) = category {
                    self.category = category;
                }
                let category = self.category.clone();
                self.ingredient_group(&category).items.extend(items);
            }
        }
    }

    fn ingredient_group(&mut self, category: &str) -> &mut IngredientGroup {
        let groups = &mut self.menu.ingredient_groups;
        let index = match groups.iter().position(|g| g.category == category) {
            Some(index) => index,
            None => {
                groups.push(IngredientGroup {
                    category: category.to_string(),
                    items: Vec::new(),
                });
                groups.len() - 1
            }
        };
        &mut groups[index]
    }

    fn push_tip(&mut self, line: &str) {
        let tip = strip_tip_marker(line);
        if !tip.is_empty() {
            self.menu.tips.push(tip.to_string());
        }
    }

    fn push_step_line(&mut self, line: &str) {
        if let Some(start) = parse_step_start(line) {
            match start.kind {
                StepKind::Section => self.open_section(start.title),
                StepKind::Step => self.open_step(start.title),
            }
            return;
        }

        if let Some(start) = parse_legacy_step(line) {
            self.open_step(start.title);
            return;
        }

        if self.step.is_none() {
            self.open_step(String::new());
        }
        self.apply_badge(line);
        if let Some(step) = self.step.as_mut() {
            if step.desc.is_empty() {
                step.desc = line.to_string();
            } else {
                step.desc.push('\n');
                step.desc.push_str(line);
            }
        }
    }

    fn open_section(&mut self, title: String) {
        self.close_section();
        let title = if title.is_empty() {
            DEFAULT_SECTION_TITLE.to_string()
        } else {
            title
        };
        debug!("Opening section {:?}", title);
        self.section = Some(Section {
            id: new_id(),
            title,
            items: Vec::new(),
        });
    }

    fn open_step(&mut self, name: String) {
        self.close_step();
        if self.section.is_none() {
            self.open_section(DEFAULT_SECTION_TITLE.to_string());
        }
        self.step = Some(StepItem {
            id: new_id(),
            price: extract_heat_time(&name).unwrap_or_default(),
            desc: String::new(),
            name,
        });
    }

    /// Only the first line with a heat/time hit sets the badge.
    fn apply_badge(&mut self, text: &str) {
        let Some(step) = self.step.as_mut() else {
            return;
        };
        if !step.price.is_empty() {
            return;
        }
        if let Some(badge) = extract_heat_time(text) {
            step.price = badge;
        }
    }

    fn close_step(&mut self) {
        if let Some(step) = self.step.take() {
            if let Some(section) = self.section.as_mut() {
                section.items.push(step);
            }
        }
    }

    fn close_section(&mut self) {
        self.close_step();
        if let Some(section) = self.section.take() {
            if section.items.is_empty() {
                debug!("Dropping empty section {:?}", section.title);
            } else {
                self.menu.sections.push(section);
            }
        }
    }
}

/// Strip a leading tip marker such as `💡` or `注意：`.
fn strip_tip_marker(line: &str) -> &str {
    const MARKERS: [&str; 7] = ["💡", WARNING, EXCLAMATION, "小贴士", "关键小贴士", "注意", "提示"];

    let stripped = MARKERS
        .iter()
        .find_map(|marker| line.strip_prefix(marker))
        .map(|rest| rest.strip_prefix([':', '：']).unwrap_or(rest).trim_start());

    stripped.unwrap_or(line).trim()
}
