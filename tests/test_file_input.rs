use std::io::Write;

use recipe_menu::{file_to_menu, text_to_json, ImportResult, MenuError, MenuImporter};
use tempfile::NamedTempFile;

const RECIPE: &str = "葱油拌面
食材
主料：细面200g
配料：小葱，生抽，老抽
做法
1. 小火熬葱油15分钟
2. 面煮好拌匀
";

fn recipe_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(RECIPE.as_bytes()).unwrap();
    file
}

#[test]
fn test_file_to_menu() {
    let file = recipe_file();
    let menu = file_to_menu(file.path()).unwrap();

    assert_eq!(menu.title, "葱油拌面");
    assert_eq!(menu.ingredient_groups.len(), 2);
    assert_eq!(menu.ingredient_groups[1].items, vec!["小葱", "生抽", "老抽"]);
    assert_eq!(menu.step_count(), 2);
    assert_eq!(menu.sections[0].items[0].timer_seconds(), Some(900));
}

#[test]
fn test_builder_reads_file() {
    let file = recipe_file();
    let result = MenuImporter::builder().file(file.path()).build().unwrap();

    match result {
        ImportResult::Menu(menu) => assert_eq!(menu.sections[0].items[0].price, "小火 15分钟"),
        ImportResult::Json(_) => panic!("Expected Menu result"),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let err = file_to_menu("/definitely/not/here.txt").unwrap_err();
    assert!(matches!(err, MenuError::Io(_)));
    assert!(err.to_string().starts_with("Failed to read input"));
}

#[test]
fn test_text_to_json_is_pretty() {
    let json = text_to_json(RECIPE).unwrap();

    assert!(json.contains("\n  \"title\": \"葱油拌面\""));
    assert!(json.contains("\"ingredientGroups\""));
}
