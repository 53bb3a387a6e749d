//! Storage module - base directory layout, bootstrap and loaders

pub mod bootstrap;
pub mod layout;
pub mod pairs;
pub mod templates;

pub use bootstrap::*;
pub use layout::*;
pub use pairs::*;
pub use templates::*;

use tracing::error;

use crate::error::MsgResult;

/// Everything a session chooses from.
#[derive(Debug, Clone, Default)]
pub struct Library {
    pub recipients: KeyValueStore,
    pub authors: KeyValueStore,
    pub info_options: KeyValueStore,
    pub templates: TemplateSet,
}

/// Bootstrap the base directory, then load all stores and templates.
///
/// Failures are logged here and passed on to the caller.
pub fn load_library(layout: &StorageLayout) -> MsgResult<Library> {
    let result = ensure_layout(layout).and_then(|_| {
        Ok(Library {
            recipients: load_pairs(&layout.recipients_file())?,
            authors: load_pairs(&layout.authors_file())?,
            info_options: load_pairs(&layout.info_options_file())?,
            templates: load_templates(layout)?,
        })
    });

    if let Err(e) = &result {
        error!(base_dir = %layout.base_dir().display(), error = %e, "failed to load templates");
    }
    result
}
