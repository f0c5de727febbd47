use std::io::Read;
use std::path::PathBuf;

use log::debug;

use crate::{config::OutputConfig, parse_recipe_text, MenuError, ParsedMenu};

/// Represents the input source for recipe text
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Use text already in memory
    Text(String),
    /// Read text from a file
    File(PathBuf),
    /// Read text from standard input
    Stdin,
}

/// Represents the desired output format
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputMode {
    /// Return the ParsedMenu struct (default)
    #[default]
    Menu,
    /// Render the menu as JSON
    Json,
}

/// Result of a menu import operation
#[derive(Debug, Clone)]
pub enum ImportResult {
    /// Structured menu
    Menu(ParsedMenu),
    /// JSON-rendered menu
    Json(String),
}

/// Builder for configuring and executing menu imports
#[derive(Debug, Default)]
pub struct MenuImporterBuilder {
    source: Option<InputSource>,
    mode: OutputMode,
    pretty: bool,
    strip_ids: bool,
}

impl MenuImporterBuilder {
    /// Set the input source to recipe text
    ///
    /// # Example
    /// ```
    /// use recipe_menu::MenuImporter;
    ///
    /// let builder = MenuImporter::builder()
    ///     .text("番茄炒蛋\n1. 打蛋\n2. 中火炒熟");
    /// ```
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.source = Some(InputSource::Text(text.into()));
        self
    }

    /// Set the input source to a text file
    ///
    /// # Example
    /// ```
    /// use recipe_menu::MenuImporter;
    ///
    /// let builder = MenuImporter::builder()
    ///     .file("/path/to/recipe.txt");
    /// ```
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(InputSource::File(path.into()));
        self
    }

    /// Set the input source to standard input
    pub fn stdin(mut self) -> Self {
        self.source = Some(InputSource::Stdin);
        self
    }

    /// Render the result as JSON instead of returning the struct
    pub fn json(mut self) -> Self {
        self.mode = OutputMode::Json;
        self
    }

    /// Pretty-print JSON output
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Blank section and step ids in the result
    pub fn without_ids(mut self) -> Self {
        self.strip_ids = true;
        self
    }

    /// Apply output settings loaded from configuration
    pub fn output_config(mut self, output: &OutputConfig) -> Self {
        self.pretty = output.pretty;
        self.strip_ids = !output.include_ids;
        self
    }

    /// Build and execute the import operation
    ///
    /// # Errors
    /// Returns `MenuError` if:
    /// - No input source was specified
    /// - The input cannot be read
    /// - JSON rendering fails
    ///
    /// # Example
    /// ```
    /// use recipe_menu::{ImportResult, MenuImporter};
    ///
    /// let result = MenuImporter::builder()
    ///     .text("红烧肉\n1. 切块焯水")
    ///     .build()
    ///     .unwrap();
    ///
    /// match result {
    ///     ImportResult::Menu(menu) => assert_eq!(menu.title, "红烧肉"),
    ///     ImportResult::Json(_) => unreachable!(),
    /// }
    /// ```
    pub fn build(self) -> Result<ImportResult, MenuError> {
        let source = self.source.ok_or_else(|| {
            MenuError::BuilderError(
                "No input source specified. Use .text(), .file() or .stdin()".to_string(),
            )
        })?;

        let text = match source {
            InputSource::Text(text) => text,
            InputSource::File(path) => {
                debug!("Reading recipe text from {}", path.display());
                std::fs::read_to_string(&path)?
            }
            InputSource::Stdin => {
                debug!("Reading recipe text from stdin");
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                text
            }
        };

        let mut menu = parse_recipe_text(&text);
        if self.strip_ids {
            menu = menu.without_ids();
        }
        debug!(
            "Parsed menu {:?}: {} sections, {} steps",
            menu.title,
            menu.sections.len(),
            menu.step_count()
        );

        match self.mode {
            OutputMode::Menu => Ok(ImportResult::Menu(menu)),
            OutputMode::Json => {
                let json = if self.pretty {
                    serde_json::to_string_pretty(&menu)?
                } else {
                    serde_json::to_string(&menu)?
                };
                Ok(ImportResult::Json(json))
            }
        }
    }
}

/// Main entry point for the builder API
pub struct MenuImporter;

impl MenuImporter {
    /// Create a new builder for importing menus
    pub fn builder() -> MenuImporterBuilder {
        MenuImporterBuilder::default()
    }
}
