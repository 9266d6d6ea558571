//! Escaping for text placed inside WordprocessingML text nodes.

use std::borrow::Cow;

/// Whether `c` may appear in an XML 1.0 document.
///
/// Excludes the C0 controls other than tab, line feed and carriage return,
/// and the noncharacters U+FFFE and U+FFFF. Surrogates cannot occur in a
/// `char`.
pub fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

fn needs_escaping(c: char) -> bool {
    matches!(c, '&' | '<' | '>' | '"' | '\'') || !is_xml_char(c)
}

/// Escapes the five XML special characters and drops characters XML 1.0
/// does not allow.
///
/// Each character is mapped once, so an entity produced for one character is
/// never escaped again.
pub fn escape_xml(text: &str) -> Cow<'_, str> {
    if !text.chars().any(needs_escaping) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c if is_xml_char(c) => escaped.push(c),
            _ => {}
        }
    }
    Cow::Owned(escaped)
}
