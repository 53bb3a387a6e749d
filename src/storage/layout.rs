//! Paths under the base directory

use std::path::{Path, PathBuf};

/// Template category directories, in the order the session asks for them.
pub const CATEGORIES: [Category; 3] = [Category::Greetings, Category::MainParts, Category::Endings];

/// One of the three template groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Greetings,
    MainParts,
    Endings,
}

impl Category {
    /// Directory name under `templates/`
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Greetings => "greetings",
            Category::MainParts => "main_parts",
            Category::Endings => "endings",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// All file locations derived from a single base directory.
///
/// Passed explicitly to bootstrap, loaders and the writer so a run can be
/// pointed at any directory (a temp dir in tests).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    base_dir: PathBuf,
}

impl StorageLayout {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// `~/message_templates`, or `./message_templates` when no home directory is known.
    pub fn default_base_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("message_templates")
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.base_dir.join("templates")
    }

    pub fn category_dir(&self, category: Category) -> PathBuf {
        self.templates_dir().join(category.dir_name())
    }

    pub fn recipients_file(&self) -> PathBuf {
        self.base_dir.join("recipients.txt")
    }

    pub fn authors_file(&self) -> PathBuf {
        self.base_dir.join("authors.txt")
    }

    pub fn info_options_file(&self) -> PathBuf {
        self.base_dir.join("info_options.txt")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.base_dir.join("output")
    }
}
