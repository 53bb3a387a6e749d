//! Terminal styling utilities

use console::{style, Emoji};

// Emoji icons with fallbacks for terminals that don't support them
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");
pub static MAIL: Emoji<'_, '_> = Emoji("✉️  ", "");

const RULE_WIDTH: usize = 50;

/// Print a horizontal rule
pub fn print_rule() {
    println!("{}", style("=".repeat(RULE_WIDTH)).dim());
}

/// Print the application banner
pub fn print_banner(version: &str) {
    print_rule();
    println!(
        "{}{} {}",
        MAIL,
        style("MESSAGE GENERATOR").cyan().bold(),
        style("(templates on disk)").dim()
    );
    println!("{}", style(format!("v{}", version)).dim());
    print_rule();
}

/// Print the path a message was written to
pub fn print_saved(path: &std::path::Path) {
    println!();
    println!("{}Saved to: {}", SAVE, style(path.display()).bold());
}

/// Print an error line
pub fn print_error(message: &str) {
    println!();
    println!(
        "{} {}",
        style("Error:").red().bold(),
        style(message).red()
    );
}
