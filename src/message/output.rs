//! Output file naming and persistence

use std::path::PathBuf;

use tracing::info;

use crate::error::{MsgError, MsgResult};
use crate::storage::StorageLayout;

/// File name for a message: `message_<first word of recipient>_<info title>.txt`.
///
/// Spaces in the info title become underscores. The same recipient/topic
/// pair always maps to the same name.
pub fn output_file_name(recipient: &str, info_title: &str) -> MsgResult<String> {
    let first = recipient.split_whitespace().next().ok_or_else(|| {
        MsgError::malformed(
            "recipient",
            format!("'{}' has no name to build a file name from", recipient),
        )
    })?;
    Ok(format!("message_{}_{}.txt", first, info_title.replace(' ', "_")))
}

/// Write the message under `<base>/output/`, replacing any file of the same name.
pub fn save_message(
    layout: &StorageLayout,
    recipient: &str,
    info_title: &str,
    message: &str,
) -> MsgResult<PathBuf> {
    let dir = layout.output_dir();
    std::fs::create_dir_all(&dir)
        .map_err(|e| MsgError::io(format!("creating directory {}", dir.display()), e))?;

    let path = dir.join(output_file_name(recipient, info_title)?);
    std::fs::write(&path, message)
        .map_err(|e| MsgError::io(format!("writing {}", path.display()), e))?;

    info!(path = %path.display(), bytes = message.len(), "message saved");
    Ok(path)
}
