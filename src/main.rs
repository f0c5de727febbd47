use log::{debug, error};
use std::env;
use std::process::ExitCode;

use recipe_menu::{ImportResult, MenuConfig, MenuError, MenuImporter};

fn run() -> Result<String, MenuError> {
    let config = MenuConfig::load()?;
    debug!("{:?}", config);

    // Read from the given path, or stdin when absent or "-"
    let builder = match env::args().nth(1) {
        Some(path) if path != "-" => MenuImporter::builder().file(path),
        _ => MenuImporter::builder().stdin(),
    };

    match builder.json().output_config(&config.output).build()? {
        ImportResult::Json(json) => Ok(json),
        ImportResult::Menu(_) => Err(MenuError::BuilderError(
            "Expected JSON output".to_string(),
        )),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
