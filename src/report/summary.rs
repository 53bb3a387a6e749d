//! Composed message summary shown before saving

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::utils::print_rule;

/// What was chosen for a message, and the resulting text.
#[derive(Debug, Clone, Default)]
pub struct MessageSummary {
    pub recipient: String,
    pub position: String,
    pub info_title: String,
    pub greeting: String,
    pub body: String,
    pub closing: String,
    pub message: String,
}

impl MessageSummary {
    /// `greeting / body / closing` template labels
    pub fn style_line(&self) -> String {
        format!("{} / {} / {}", self.greeting, self.body, self.closing)
    }

    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);

        table.add_row(vec![
            Cell::new("Message for").add_attribute(Attribute::Bold),
            Cell::new(format!("{} ({})", self.recipient, self.position)).fg(Color::Cyan),
        ]);
        table.add_row(vec![
            Cell::new("Type").add_attribute(Attribute::Bold),
            Cell::new(&self.info_title).fg(Color::Yellow),
        ]);
        table.add_row(vec![
            Cell::new("Style").add_attribute(Attribute::Bold),
            Cell::new(self.style_line()),
        ]);
        table
    }

    pub fn display(&self) {
        println!();
        print_rule();
        println!("{}", self.table());
        print_rule();
        println!("{}", style(&self.message).white());
        print_rule();
    }
}
