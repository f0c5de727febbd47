//! Turn freeform recipe text into a structured cooking menu.
//!
//! ```
//! let menu = recipe_menu::parse_recipe_text("番茄炒蛋\n做法\n1. 打蛋\n2. 中火炒3分钟");
//!
//! assert_eq!(menu.title, "番茄炒蛋");
//! assert_eq!(menu.sections[0].items[1].price, "中火 3分钟");
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod uniffi_bindings;

use std::path::Path;

pub use builder::{ImportResult, InputSource, MenuImporter, MenuImporterBuilder, OutputMode};
pub use config::{MenuConfig, OutputConfig};
pub use error::MenuError;
pub use model::{HeatLevel, IngredientGroup, ParsedMenu, Section, StepItem};
pub use parser::parse_recipe_text;

/// Parse recipe text and render the menu as pretty JSON.
pub fn text_to_json(text: &str) -> Result<String, MenuError> {
    let menu = parse_recipe_text(text);
    Ok(serde_json::to_string_pretty(&menu)?)
}

/// Read a text file and parse it into a menu.
pub fn file_to_menu(path: impl AsRef<Path>) -> Result<ParsedMenu, MenuError> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_recipe_text(&text))
}
