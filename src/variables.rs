//! Variable sources for the CLI.
//!
//! Variables reach a render from three places, later ones winning:
//!
//! 1. `variables:` in the config file
//! 2. A `--vars-file` YAML or JSON mapping
//! 3. Repeated `-v name=value` arguments
//!
//! Scalar values of any type are kept as their text; lists and maps are
//! rejected.

use crate::error::{GenpromptError, Result};
use crate::prompt::{Variables, is_placeholder_name};
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Parse a `name=value` argument.
///
/// Only the first `=` separates; the value may contain more of them.
pub fn parse_assignment(arg: &str) -> Result<(String, String)> {
    let (name, value) = arg.split_once('=').ok_or_else(|| {
        GenpromptError::UserError(format!(
            "invalid variable '{}': expected NAME=VALUE",
            arg
        ))
    })?;

    if !is_placeholder_name(name) {
        return Err(GenpromptError::UserError(format!(
            "invalid variable name '{}'.\n\
             Fix: use only ASCII letters, digits and '_'.",
            name
        )));
    }

    Ok((name.to_string(), value.to_string()))
}

/// Load a YAML (or JSON) mapping of variables from a file.
///
/// An unreadable file is [`GenpromptError::Io`]; malformed content is
/// [`GenpromptError::UserError`].
pub fn load_variables_file<P: AsRef<Path>>(path: P) -> Result<Variables> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path).map_err(|e| {
        GenpromptError::Io(format!(
            "failed to read variables file '{}': {}",
            path.display(),
            e
        ))
    })?;

    parse_variables(&content).map_err(|e| match e {
        GenpromptError::UserError(msg) => {
            GenpromptError::UserError(format!("{} (in '{}')", msg, path.display()))
        }
        other => other,
    })
}

/// Parse a YAML (or JSON) mapping of variables.
pub fn parse_variables(content: &str) -> Result<Variables> {
    if content.trim().is_empty() {
        return Ok(Variables::new());
    }

    let raw: BTreeMap<String, Value> = serde_yaml::from_str(content).map_err(|e| {
        GenpromptError::UserError(format!("failed to parse variables: {}", e))
    })?;

    let mut variables = Variables::with_capacity(raw.len());
    for (name, value) in raw {
        if !is_placeholder_name(&name) {
            return Err(GenpromptError::UserError(format!(
                "invalid variable name '{}'",
                name
            )));
        }
        let text = scalar_text(&value).ok_or_else(|| {
            GenpromptError::UserError(format!("variable '{}' must be a scalar value", name))
        })?;
        variables.insert(name, text);
    }

    Ok(variables)
}

/// Merge variable layers; later layers override earlier ones.
pub fn merge<'a, I>(layers: I) -> Variables
where
    I: IntoIterator<Item = &'a Variables>,
{
    let mut merged = Variables::new();
    for layer in layers {
        merged.extend(layer.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    merged
}

/// Textual representation of a YAML scalar; `None` for lists and maps.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null => Some(String::new()),
        _ => None,
    }
}

/// Deserialize a name-to-scalar map, coercing each scalar to text.
pub(crate) fn deserialize_scalar_map<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(name, value)| match scalar_text(&value) {
            Some(text) => Ok((name, text)),
            None => Err(serde::de::Error::custom(format!(
                "variable '{}' must be a scalar value",
                name
            ))),
        })
        .collect()
}
