//! One interactive run: load, choose, compose, show, save

use std::path::PathBuf;

use tracing::info;

use crate::cli::Selector;
use crate::error::MsgResult;
use crate::message::{compose, save_message, Substitutions, TemplatePart};
use crate::report::MessageSummary;
use crate::storage::{load_library, StorageLayout};
use crate::utils::{print_banner, print_saved};

/// Prompt shown before the program exits.
pub const EXIT_PROMPT: &str = "Press Enter to exit...";

/// Run the whole flow once and return the path of the written message.
///
/// The sequence is fixed: recipient, author, topic, greeting, body, closing.
pub fn run_session(layout: &StorageLayout, selector: &mut dyn Selector) -> MsgResult<PathBuf> {
    let library = load_library(layout)?;

    print_banner(env!("CARGO_PKG_VERSION"));

    let recipient = selector.select("Choose a recipient", &library.recipients)?;
    let author = selector.select("Choose a sender", &library.authors)?;
    let info_option = selector.select("Choose a message type", &library.info_options)?;

    let templates = &library.templates;
    let greeting = selector.select("Choose a greeting", &templates.greetings)?;
    let body = selector.select("Choose the main part", &templates.main_parts)?;
    let closing = selector.select("Choose a closing", &templates.endings)?;

    let values = Substitutions {
        name: recipient.key.to_string(),
        info: info_option.value.to_string(),
        author: author.key.to_string(),
        contacts: author.value.to_string(),
    };
    let message = compose(
        TemplatePart { label: greeting.key, text: greeting.value },
        TemplatePart { label: body.key, text: body.value },
        TemplatePart { label: closing.key, text: closing.value },
        &values,
    )?;

    let summary = MessageSummary {
        recipient: recipient.key.to_string(),
        position: recipient.value.to_string(),
        info_title: info_option.key.to_string(),
        greeting: greeting.key.to_string(),
        body: body.key.to_string(),
        closing: closing.key.to_string(),
        message,
    };
    summary.display();

    let path = save_message(layout, recipient.key, info_option.key, &summary.message)?;
    print_saved(&path);
    info!(recipient = recipient.key, topic = info_option.key, "session complete");

    Ok(path)
}
