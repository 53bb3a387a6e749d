//! First-run setup of the base directory with example data

use std::path::Path;

use tracing::{debug, info};

use super::layout::{Category, StorageLayout, CATEGORIES};
use crate::error::{MsgError, MsgResult};

const EXAMPLE_RECIPIENTS: &str =
    "Алексей Петров|менеджер по продажам\nМария Сидорова|директор по маркетингу";
const EXAMPLE_AUTHORS: &str = "ООО 'Технологии'|sales@tech.ru\nИП Сергеев|info@sergeev.ru";
const EXAMPLE_INFO_OPTIONS: &str =
    "Заказ готов|ваш заказ готов к выдаче\nПодписание|договор требует подписания";

/// Example template files written into an empty category directory.
pub fn example_templates(category: Category) -> [(&'static str, &'static str); 2] {
    match category {
        Category::Greetings => [
            ("01_Официальное.txt", "Уважаемый(ая) {name}!"),
            ("02_Стандартное.txt", "Добрый день, {name}!"),
        ],
        Category::MainParts => [
            ("01_Нейтральное.txt", "Сообщаем вам, что {info}."),
            ("02_Радостное.txt", "Мы рады сообщить вам, что {info}!"),
        ],
        Category::Endings => [
            ("01_Формальное.txt", "С уважением, {author}."),
            ("02_С_контактами.txt", "Будем рады вашим вопросам!\n{contacts}"),
        ],
    }
}

/// Make sure the directory tree exists and seed missing example files.
///
/// Idempotent: existing files are never touched, and a category directory
/// only gets examples while it is completely empty.
pub fn ensure_layout(layout: &StorageLayout) -> MsgResult<()> {
    create_dir(layout.base_dir())?;
    create_dir(&layout.templates_dir())?;

    write_if_missing(&layout.recipients_file(), EXAMPLE_RECIPIENTS)?;
    write_if_missing(&layout.authors_file(), EXAMPLE_AUTHORS)?;
    write_if_missing(&layout.info_options_file(), EXAMPLE_INFO_OPTIONS)?;

    for category in CATEGORIES {
        let dir = layout.category_dir(category);
        create_dir(&dir)?;

        if is_empty_dir(&dir)? {
            info!(category = %category, "seeding example templates");
            for (file_name, content) in example_templates(category) {
                write_file(&dir.join(file_name), content)?;
            }
        }
    }

    Ok(())
}

fn create_dir(path: &Path) -> MsgResult<()> {
    std::fs::create_dir_all(path)
        .map_err(|e| MsgError::io(format!("creating directory {}", path.display()), e))
}

fn is_empty_dir(path: &Path) -> MsgResult<bool> {
    let mut entries = std::fs::read_dir(path)
        .map_err(|e| MsgError::io(format!("listing {}", path.display()), e))?;
    Ok(entries.next().is_none())
}

fn write_if_missing(path: &Path, content: &str) -> MsgResult<()> {
    if path.exists() {
        return Ok(());
    }
    debug!(path = %path.display(), "writing example data file");
    write_file(path, content)
}

fn write_file(path: &Path, content: &str) -> MsgResult<()> {
    std::fs::write(path, content)
        .map_err(|e| MsgError::io(format!("writing {}", path.display()), e))
}
