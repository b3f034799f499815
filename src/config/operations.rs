//! Config loading, discovery and validation.

use super::model::{CONFIG_FILE_NAME, Config};
use crate::error::{GenpromptError, Result};
use crate::prompt::{TemplateKey, is_placeholder_name};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(GenpromptError::Io)` - The file cannot be read
    /// * `Err(GenpromptError::UserError)` - Parse error or validation failure
    /// * `Err(GenpromptError::TemplateNotFound)` - `default_generator` is not a known key
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            GenpromptError::Io(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the config for this invocation.
    ///
    /// An explicit path must exist. Without one, `genprompt.yaml` in the
    /// current directory is used when present, otherwise the defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading config");
            return Self::load(path);
        }

        let implicit = Path::new(CONFIG_FILE_NAME);
        if implicit.is_file() {
            tracing::debug!(path = %implicit.display(), "loading config from current directory");
            return Self::load(implicit);
        }

        tracing::debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the default config.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                GenpromptError::UserError(format!("failed to parse config YAML: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            GenpromptError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `default_generator`, when set, must be a registered template key
    /// - `variables` names must be valid placeholder names
    pub fn validate(&self) -> Result<()> {
        self.default_key()?;

        for name in self.variables.keys() {
            if !is_placeholder_name(name) {
                return Err(GenpromptError::UserError(format!(
                    "config validation failed: variable name '{}' is not a valid placeholder name.\n\
                     Fix: use only ASCII letters, digits and '_'.",
                    name
                )));
            }
        }

        Ok(())
    }

    /// The configured default template, if any.
    pub fn default_key(&self) -> Result<Option<TemplateKey>> {
        match &self.default_generator {
            Some(name) => Ok(Some(name.parse()?)),
            None => Ok(None),
        }
    }
}
