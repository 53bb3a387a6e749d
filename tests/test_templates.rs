//! Tests for template library loading

use msgtpl::storage::{display_name, load_category, load_templates, Category};
use tempfile::TempDir;

mod common;

#[test]
fn test_display_name_derivation() {
    assert_eq!(display_name("02_Стандартное.txt"), "Стандартное");
    assert_eq!(display_name("01_С_контактами.txt"), "С_контактами");
}

#[test]
fn test_display_name_without_underscore_uses_whole_stem() {
    assert_eq!(display_name("greeting.txt"), "greeting");
}

#[test]
fn test_templates_sorted_by_file_name() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    common::write_file(&dir.join("10_Last.txt"), "last");
    common::write_file(&dir.join("02_Second.txt"), "second");
    common::write_file(&dir.join("01_First.txt"), "first");

    let store = load_category(dir).unwrap();

    let names: Vec<&str> = store.keys().collect();
    assert_eq!(names, vec!["First", "Second", "Last"]);
}

#[test]
fn test_only_txt_files_are_loaded() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    common::write_file(&dir.join("01_Keep.txt"), "keep");
    common::write_file(&dir.join("02_Skip.md"), "skip");
    common::write_file(&dir.join("03_Backup.txt.bak"), "skip");

    let store = load_category(dir).unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.get("Keep"), Some("keep"));
}

#[test]
fn test_template_content_is_raw() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    common::write_file(&dir.join("01_Multi.txt"), "line one\n{contacts}\n");

    let store = load_category(dir).unwrap();

    assert_eq!(store.get("Multi"), Some("line one\n{contacts}\n"));
}

#[test]
fn test_duplicate_display_names_keep_first_file() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    common::write_file(&dir.join("01_Same.txt"), "first");
    common::write_file(&dir.join("02_Same.txt"), "second");

    let store = load_category(dir).unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.get("Same"), Some("first"));
}

#[test]
fn test_missing_category_dir_is_io_error() {
    let (_temp_dir, layout) = common::temp_layout();

    let err = load_templates(&layout).unwrap_err();
    assert!(matches!(err, msgtpl::MsgError::Io { .. }));
}

#[test]
fn test_load_seeded_templates() {
    let (_temp_dir, layout) = common::seeded_layout();

    let templates = load_templates(&layout).unwrap();

    assert_eq!(
        templates.category(Category::Greetings).get("Официальное"),
        Some("Уважаемый(ая) {name}!")
    );
    assert_eq!(
        templates.main_parts.get("Радостное"),
        Some("Мы рады сообщить вам, что {info}!")
    );
    let endings: Vec<&str> = templates.endings.keys().collect();
    assert_eq!(endings, vec!["Формальное", "С_контактами"]);
}

#[cfg(unix)]
#[test]
fn test_non_utf8_file_name_is_skipped() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    common::write_file(&dir.join(OsStr::from_bytes(b"01_\xff.txt")), "broken name");
    common::write_file(&dir.join("02_Valid.txt"), "valid");

    let store = load_category(dir).unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.get("Valid"), Some("valid"));
}
