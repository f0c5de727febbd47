//! UniFFI bindings for recipe-menu
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! Parsing is synchronous, so the exported functions call straight into the parser.

use std::fmt;

use crate::{IngredientGroup, MenuError, ParsedMenu, Section, StepItem};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible menu structure
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiParsedMenu {
    pub title: String,
    pub subtitle: String,
    pub meta: Vec<String>,
    pub ingredient_groups: Vec<FfiIngredientGroup>,
    pub sections: Vec<FfiSection>,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiIngredientGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiSection {
    pub id: String,
    pub title: String,
    pub items: Vec<FfiStepItem>,
}

/// FFI-compatible step, with the badge-derived timer precomputed
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiStepItem {
    pub id: String,
    pub name: String,
    /// Heat/time badge (empty string if none)
    pub price: String,
    pub desc: String,
    /// Suggested countdown in seconds (0 if the step names no duration)
    pub timer_seconds: u32,
}

impl From<IngredientGroup> for FfiIngredientGroup {
    fn from(group: IngredientGroup) -> Self {
        FfiIngredientGroup {
            category: group.category,
            items: group.items,
        }
    }
}

impl From<FfiIngredientGroup> for IngredientGroup {
    fn from(ffi: FfiIngredientGroup) -> Self {
        IngredientGroup {
            category: ffi.category,
            items: ffi.items,
        }
    }
}

impl From<StepItem> for FfiStepItem {
    fn from(step: StepItem) -> Self {
        FfiStepItem {
            timer_seconds: step.timer_seconds().unwrap_or(0),
            id: step.id,
            name: step.name,
            price: step.price,
            desc: step.desc,
        }
    }
}

impl From<FfiStepItem> for StepItem {
    fn from(ffi: FfiStepItem) -> Self {
        StepItem {
            id: ffi.id,
            name: ffi.name,
            price: ffi.price,
            desc: ffi.desc,
        }
    }
}

impl From<Section> for FfiSection {
    fn from(section: Section) -> Self {
        FfiSection {
            id: section.id,
            title: section.title,
            items: section.items.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<FfiSection> for Section {
    fn from(ffi: FfiSection) -> Self {
        Section {
            id: ffi.id,
            title: ffi.title,
            items: ffi.items.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<ParsedMenu> for FfiParsedMenu {
    fn from(menu: ParsedMenu) -> Self {
        FfiParsedMenu {
            title: menu.title,
            subtitle: menu.subtitle,
            meta: menu.meta,
            ingredient_groups: menu.ingredient_groups.into_iter().map(Into::into).collect(),
            sections: menu.sections.into_iter().map(Into::into).collect(),
            tips: menu.tips,
        }
    }
}

impl From<FfiParsedMenu> for ParsedMenu {
    fn from(ffi: FfiParsedMenu) -> Self {
        ParsedMenu {
            title: ffi.title,
            subtitle: ffi.subtitle,
            meta: ffi.meta,
            ingredient_groups: ffi.ingredient_groups.into_iter().map(Into::into).collect(),
            sections: ffi.sections.into_iter().map(Into::into).collect(),
            tips: ffi.tips,
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiMenuError {
    /// Failed to read input
    IoError { message: String },
    /// Failed to serialize or deserialize a menu
    JsonError { message: String },
    /// Builder configuration error
    BuilderError { message: String },
    /// Configuration error
    ConfigError { message: String },
}

impl fmt::Display for FfiMenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiMenuError::IoError { message } => write!(f, "IO error: {}", message),
            FfiMenuError::JsonError { message } => write!(f, "JSON error: {}", message),
            FfiMenuError::BuilderError { message } => write!(f, "Builder error: {}", message),
            FfiMenuError::ConfigError { message } => write!(f, "Config error: {}", message),
        }
    }
}

impl std::error::Error for FfiMenuError {}

impl From<MenuError> for FfiMenuError {
    fn from(err: MenuError) -> Self {
        match err {
            MenuError::Io(e) => FfiMenuError::IoError {
                message: e.to_string(),
            },
            MenuError::Json(e) => FfiMenuError::JsonError {
                message: e.to_string(),
            },
            MenuError::BuilderError(msg) => FfiMenuError::BuilderError { message: msg },
            MenuError::ConfigError(e) => FfiMenuError::ConfigError {
                message: e.to_string(),
            },
        }
    }
}

/// Parse recipe text into a menu
///
/// # Arguments
/// * `text` - The freeform recipe text
///
/// # Returns
/// An `FfiParsedMenu`; parsing never fails
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn parse_menu_text(text: String) -> FfiParsedMenu {
    crate::parse_recipe_text(&text).into()
}

/// Serialize a menu to JSON for storage
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn menu_to_json(menu: FfiParsedMenu) -> Result<String, FfiMenuError> {
    let menu: ParsedMenu = menu.into();
    serde_json::to_string(&menu).map_err(|e| MenuError::from(e).into())
}

/// Load a menu previously stored with [`menu_to_json`]
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn menu_from_json(json: String) -> Result<FfiParsedMenu, FfiMenuError> {
    let menu: ParsedMenu = serde_json::from_str(&json).map_err(MenuError::from)?;
    Ok(menu.into())
}
