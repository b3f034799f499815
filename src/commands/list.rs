//! Implementation of the `genprompt list` command.

use crate::cli::ListArgs;
use crate::error::{GenpromptError, Result};
use crate::prompt::generator_types;

/// Execute the `genprompt list` command.
pub fn cmd_list(args: ListArgs) -> Result<()> {
    print!("{}", format_list(args.json)?);
    Ok(())
}

/// Format the generator type directory as aligned text or pretty JSON.
pub(crate) fn format_list(json: bool) -> Result<String> {
    let types = generator_types();

    if json {
        let mut out = serde_json::to_string_pretty(types).map_err(|e| {
            GenpromptError::UserError(format!("failed to serialize generator types: {}", e))
        })?;
        out.push('\n');
        return Ok(out);
    }

    let width = types
        .iter()
        .map(|g| g.key.as_str().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for generator in types {
        out.push_str(&format!(
            "{:<width$}  {}\n",
            generator.key.as_str(),
            generator.label,
            width = width
        ));
    }
    Ok(out)
}
