//! Implementation of the `genprompt escape` command.

use crate::cli::EscapeArgs;
use crate::error::{GenpromptError, Result};
use crate::prompt::{escape_delimiters, fence};
use std::io::Read;
use std::path::Path;

/// Execute the `genprompt escape` command.
pub fn cmd_escape(args: EscapeArgs) -> Result<()> {
    let input = read_input(args.file.as_deref())?;
    let output = escape_text(&input, args.fence.as_deref());
    tracing::debug!(
        input_bytes = input.len(),
        output_bytes = output.len(),
        "escaped code fences"
    );
    print!("{}", output);
    Ok(())
}

/// Escape code fences in `input`, optionally wrapping it in a new fence.
///
/// Without a fence the text is otherwise returned byte for byte. With one,
/// a single trailing newline of the input is dropped before wrapping and
/// the result ends with a newline.
pub fn escape_text(input: &str, fence_lang: Option<&str>) -> String {
    match fence_lang {
        Some(lang) => {
            let body = input.strip_suffix('\n').unwrap_or(input);
            format!("{}\n", fence(body, lang))
        }
        None => escape_delimiters(input),
    }
}

/// Read FILE, or stdin for `None` and `-`. Unreadable input is an I/O error.
pub(crate) fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path).map_err(|e| {
            GenpromptError::Io(format!("failed to read '{}': {}", path.display(), e))
        }),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| GenpromptError::Io(format!("failed to read stdin: {}", e)))?;
            Ok(buf)
        }
    }
}
