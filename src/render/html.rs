//! Minimal HTML escaping helpers
//!
//! All markup in this crate is plain string building; these two functions
//! are the only gate between tenant-controlled strings and the output.

use std::borrow::Cow;

/// Escape text content (`&`, `<`, `>`).
pub fn esc(text: &str) -> Cow<'_, str> {
    escape_with(text, false)
}

/// Escape an attribute value (text escapes plus `"` and `'`).
pub fn attr(value: &str) -> Cow<'_, str> {
    escape_with(value, true)
}

fn escape_with(text: &str, quotes: bool) -> Cow<'_, str> {
    let needs_escape = text
        .chars()
        .any(|c| matches!(c, '&' | '<' | '>') || (quotes && matches!(c, '"' | '\'')));
    if !needs_escape {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quotes => out.push_str("&quot;"),
            '\'' if quotes => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clean_text_is_borrowed() {
        assert!(matches!(esc("Acme Capital"), Cow::Borrowed(_)));
    }

    #[test]
    fn text_escapes_markup_characters() {
        assert_eq!(esc("A & B <Fund>"), "A &amp; B &lt;Fund&gt;");
    }

    #[test]
    fn attributes_also_escape_quotes() {
        assert_eq!(
            attr(r#"say "hi" & <go>'"#),
            "say &quot;hi&quot; &amp; &lt;go&gt;&#39;"
        );
        // Text context leaves quotes alone.
        assert_eq!(esc(r#"say "hi""#), r#"say "hi""#);
    }
}
