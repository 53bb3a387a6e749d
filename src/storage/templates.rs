//! Template library loading from category directories

use std::path::Path;

use tracing::{debug, warn};

use super::layout::{Category, StorageLayout, CATEGORIES};
use super::pairs::KeyValueStore;
use crate::error::{MsgError, MsgResult};

/// Templates of every category, each as display name -> raw template text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateSet {
    pub greetings: KeyValueStore,
    pub main_parts: KeyValueStore,
    pub endings: KeyValueStore,
}

impl TemplateSet {
    pub fn category(&self, category: Category) -> &KeyValueStore {
        match category {
            Category::Greetings => &self.greetings,
            Category::MainParts => &self.main_parts,
            Category::Endings => &self.endings,
        }
    }

    fn category_mut(&mut self, category: Category) -> &mut KeyValueStore {
        match category {
            Category::Greetings => &mut self.greetings,
            Category::MainParts => &mut self.main_parts,
            Category::Endings => &mut self.endings,
        }
    }
}

/// Menu label for a template file name.
///
/// The `.txt` stem is split on its first underscore and the remainder kept,
/// dropping an ordering prefix like `02_`. A stem without an underscore is
/// used whole.
pub fn display_name(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);

    match stem.split_once('_') {
        Some((_, rest)) => rest.to_string(),
        None => stem.to_string(),
    }
}

/// Load every `.txt` template in one directory, in file-name order.
///
/// File names that are not valid UTF-8 are skipped with a warning. When two
/// files map to the same display name, the first file in sort order keeps
/// both its position and its text; later ones are ignored.
pub fn load_category(dir: &Path) -> MsgResult<KeyValueStore> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| MsgError::io(format!("listing {}", dir.display()), e))?;

    let mut file_names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| MsgError::io(format!("listing {}", dir.display()), e))?;
        match entry.file_name().into_string() {
            Ok(name) => file_names.push(name),
            Err(raw) => warn!(dir = %dir.display(), name = ?raw, "skipping non UTF-8 file name"),
        }
    }
    file_names.sort();

    let mut store = KeyValueStore::new();
    for file_name in file_names.iter().filter(|n| n.ends_with(".txt")) {
        let path = dir.join(file_name);
        let content = std::fs::read_to_string(&path)
            .map_err(|e| MsgError::io(format!("reading {}", path.display()), e))?;

        let name = display_name(file_name);
        if !store.insert(name.clone(), content) {
            warn!(file = %path.display(), name = %name, "duplicate template name, keeping the first");
        }
    }

    debug!(dir = %dir.display(), templates = store.len(), "loaded templates");
    Ok(store)
}

/// Load all three categories from the layout's template directories.
pub fn load_templates(layout: &StorageLayout) -> MsgResult<TemplateSet> {
    let mut set = TemplateSet::default();
    for category in CATEGORIES {
        *set.category_mut(category) = load_category(&layout.category_dir(category))?;
    }
    Ok(set)
}
