//! Placeholder substitution and message assembly

use crate::error::{MsgError, MsgResult};

/// Separator between the greeting, body and closing.
pub const PART_SEPARATOR: &str = "\n\n";

/// The four values a template may reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitutions {
    /// Recipient display name, `{name}`
    pub name: String,
    /// Info option text, `{info}`
    pub info: String,
    /// Author display name, `{author}`
    pub author: String,
    /// Author contact line, `{contacts}`
    pub contacts: String,
}

impl Substitutions {
    fn lookup(&self, placeholder: &str) -> Option<&str> {
        match placeholder {
            "name" => Some(&self.name),
            "info" => Some(&self.info),
            "author" => Some(&self.author),
            "contacts" => Some(&self.contacts),
            _ => None,
        }
    }
}

/// A chosen template: its menu label and raw text.
#[derive(Debug, Clone, Copy)]
pub struct TemplatePart<'a> {
    pub label: &'a str,
    pub text: &'a str,
}

/// Fill the placeholders of a single template.
///
/// `{{` and `}}` produce literal braces. Any field other than the four
/// supported names is an `InvalidPlaceholder`; an unclosed `{` or a lone `}`
/// makes the template malformed.
pub fn render(part: TemplatePart<'_>, values: &Substitutions) -> MsgResult<String> {
    let malformed = |reason: &str| MsgError::malformed(format!("template '{}'", part.label), reason);

    let mut out = String::with_capacity(part.text.len());
    let mut chars = part.text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '{' => {
                let mut field = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some('{') => return Err(malformed("'{' inside a placeholder")),
                        Some(ch) => field.push(ch),
                        None => return Err(malformed("unclosed '{'")),
                    }
                }
                let value = values
                    .lookup(&field)
                    .ok_or_else(|| MsgError::InvalidPlaceholder {
                        template: part.label.to_string(),
                        placeholder: field.clone(),
                    })?;
                out.push_str(value);
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '}' => return Err(malformed("single '}' encountered")),
            _ => out.push(c),
        }
    }

    Ok(out)
}

/// Render greeting, body and closing and join them with blank lines.
pub fn compose(
    greeting: TemplatePart<'_>,
    body: TemplatePart<'_>,
    closing: TemplatePart<'_>,
    values: &Substitutions,
) -> MsgResult<String> {
    let parts = [
        render(greeting, values)?,
        render(body, values)?,
        render(closing, values)?,
    ];
    Ok(parts.join(PART_SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> Substitutions {
        Substitutions {
            name: "Ann".to_string(),
            info: "done".to_string(),
            author: "Bob".to_string(),
            contacts: "bob@example.com".to_string(),
        }
    }

    fn part(text: &str) -> TemplatePart<'_> {
        TemplatePart { label: "t", text }
    }

    #[test]
    fn test_escaped_braces() {
        let out = render(part("{{literal}} {name}"), &values()).unwrap();
        assert_eq!(out, "{literal} Ann");
    }

    #[test]
    fn test_repeated_placeholder() {
        let out = render(part("{name}, {name}!"), &values()).unwrap();
        assert_eq!(out, "Ann, Ann!");
    }
}
