//! Text utilities.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that would be read as inline Markdown syntax if left bare.
static INLINE_SPECIALS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\\`*_~\[\]]").expect("valid escape pattern"));

/// Backslash-escape inline Markdown special characters.
///
/// Applied to plain text runs only; code-formatted runs keep their content
/// verbatim since backticks already neutralize inline syntax.
pub fn escape_inline(text: &str) -> String {
    INLINE_SPECIALS.replace_all(text, r"\$0").into_owned()
}
