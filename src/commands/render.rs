//! Implementation of the `genprompt render` command.
//!
//! Resolves the template key, layers the variables (config defaults, then
//! `--vars-file`, then `-v`), applies the strict policy and prints or writes
//! the rendered prompt.

use crate::cli::RenderArgs;
use crate::config::{CONFIG_FILE_NAME, Config};
use crate::error::{GenpromptError, Result};
use crate::fs::write_prompt_file;
use crate::prompt::{self, TemplateKey, Variables};
use crate::variables::{load_variables_file, merge, parse_assignment};
use std::path::Path;

/// Execute the `genprompt render` command.
pub fn cmd_render(args: RenderArgs, config_path: Option<&Path>) -> Result<()> {
    let config = Config::discover(config_path)?;
    let rendered = render_prompt(&args, &config)?;

    match &args.output {
        Some(path) => {
            write_prompt_file(path, &rendered)?;
            tracing::info!(path = %path.display(), "prompt written");
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Render the prompt described by `args` under `config`.
///
/// # Returns
///
/// * `Ok(String)` - The trimmed prompt
/// * `Err(GenpromptError::TemplateNotFound)` - Unknown key
/// * `Err(GenpromptError::UnresolvedPlaceholders)` - Strict mode and a placeholder has no value
/// * `Err(GenpromptError::UserError)` - No key available, or invalid variables
pub fn render_prompt(args: &RenderArgs, config: &Config) -> Result<String> {
    let key = resolve_key(args.key.as_deref(), config)?;
    let variables = collect_variables(args, config)?;

    let missing = prompt::unresolved(key, &variables);
    if !missing.is_empty() {
        if strict_mode(args, config) {
            return Err(GenpromptError::UnresolvedPlaceholders {
                key: key.to_string(),
                names: missing.iter().map(|name| name.to_string()).collect(),
            });
        }
        tracing::warn!(%key, ?missing, "rendering with unresolved placeholders");
    }

    tracing::debug!(%key, variables = variables.len(), "rendering template");
    Ok(prompt::render(key, &variables))
}

/// `--strict` / `--no-strict` win over the config's `strict`.
fn strict_mode(args: &RenderArgs, config: &Config) -> bool {
    if args.strict {
        true
    } else if args.no_strict {
        false
    } else {
        config.strict
    }
}

fn resolve_key(explicit: Option<&str>, config: &Config) -> Result<TemplateKey> {
    if let Some(name) = explicit {
        return Ok(name.parse()?);
    }

    config.default_key()?.ok_or_else(|| {
        GenpromptError::UserError(format!(
            "no template key given.\n\n\
             Pass one of the keys from `genprompt list`, or set default_generator in {}.",
            CONFIG_FILE_NAME
        ))
    })
}

fn collect_variables(args: &RenderArgs, config: &Config) -> Result<Variables> {
    let defaults: Variables = config
        .variables
        .iter()
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();

    let from_file = match &args.vars_file {
        Some(path) => load_variables_file(path)?,
        None => Variables::new(),
    };

    let mut from_args = Variables::new();
    for arg in &args.vars {
        let (name, value) = parse_assignment(arg)?;
        from_args.insert(name, value);
    }

    Ok(merge([&defaults, &from_file, &from_args]))
}
