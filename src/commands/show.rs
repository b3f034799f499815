//! Implementation of the `genprompt show` command.
//!
//! Displays a template's label, its placeholders and its body.

use crate::cli::ShowArgs;
use crate::error::Result;
use crate::prompt::{TemplateKey, label_of};

const RULE: &str =
    "================================================================================";

/// Execute the `genprompt show` command.
pub fn cmd_show(args: ShowArgs) -> Result<()> {
    print!("{}", format_show(&args.key, args.raw)?);
    Ok(())
}

/// Format a template for display.
///
/// With `raw`, the body is returned exactly as registered.
pub(crate) fn format_show(name: &str, raw: bool) -> Result<String> {
    let key: TemplateKey = name.parse()?;

    if raw {
        return Ok(key.body().to_string());
    }

    let placeholders = key.placeholders();
    let placeholder_list = if placeholders.is_empty() {
        "(none)".to_string()
    } else {
        placeholders
            .iter()
            .map(|name| format!("{{{{{}}}}}", name))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("{} [{}]\n", key, label_of(key)));
    out.push_str(RULE);
    out.push_str("\n\n");
    out.push_str(&format!("Placeholders: {}\n\n", placeholder_list));
    out.push_str(key.body().trim());
    out.push('\n');
    Ok(out)
}
