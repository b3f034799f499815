//! Code fence escaping.
//!
//! Rendered prompts are often pasted into another fenced block (a chat
//! message, a review comment, a second prompt). A run of three or more
//! backticks inside that text could close the outer block early, so every
//! backtick of such a run is preceded by a backslash.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// The Markdown code fence delimiter.
pub const FENCE: &str = "```";

/// What a bare [`FENCE`] becomes after escaping.
pub const ESCAPED_FENCE: &str = r"\`\`\`";

static BACKTICK_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`{3,}").expect("Invalid backtick run regex"));

/// Escape every run of three or more backticks in `text`.
///
/// Runs of one or two backticks (inline code) are left alone. The output
/// never contains three consecutive backticks, so applying the function to
/// its own output changes nothing.
///
/// # Examples
///
/// ```
/// use genprompt::prompt::escape_delimiters;
///
/// assert_eq!(escape_delimiters("```js\nx\n```"), "\\`\\`\\`js\nx\n\\`\\`\\`");
/// ```
pub fn escape_delimiters(text: &str) -> String {
    BACKTICK_RUN_REGEX
        .replace_all(text, |caps: &Captures<'_>| caps[0].replace('`', r"\`"))
        .into_owned()
}

/// Wrap `text` in a fenced block tagged with `lang`, escaping inner fences.
pub fn fence(text: &str, lang: &str) -> String {
    format!("{FENCE}{lang}\n{}\n{FENCE}", escape_delimiters(text))
}
