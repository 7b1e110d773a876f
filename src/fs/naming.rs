//! Directory name derivation from page titles.

use std::sync::OnceLock;

use regex::Regex;

/// Leading parenthesized tag such as `(NSFW) `, followed by ASCII whitespace.
fn tag_prefix() -> &'static Regex {
    static TAG_PREFIX: OnceLock<Regex> = OnceLock::new();
    TAG_PREFIX.get_or_init(|| Regex::new(r"^\(.+\)[ \t\n\x0C\r]").expect("static regex"))
}

/// Strip a leading `(tag) ` prefix from a title.
pub fn strip_tag_prefix(title: &str) -> &str {
    match tag_prefix().find(title) {
        Some(m) => &title[m.end()..],
        None => title,
    }
}

/// Turn a page heading into a directory name.
///
/// Trims surrounding whitespace, strips a `(tag) ` prefix and replaces
/// characters that cannot appear in a single path component with `_`.
/// The result may be empty.
pub fn sanitize_title(raw: &str) -> String {
    strip_tag_prefix(raw.trim())
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// Whether a sanitized title can be used as a directory name of its own.
pub fn is_usable_dir_name(name: &str) -> bool {
    !name.trim().is_empty() && name != "." && name != ".."
}
