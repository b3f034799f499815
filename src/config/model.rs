//! Config struct definition.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// File name looked up in the current directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "genprompt.yaml";

/// Configuration for prompt rendering.
///
/// This struct represents the contents of `genprompt.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Template rendered by `genprompt render` when no key is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_generator: Option<String>,

    /// Fail rendering when placeholders are left without a value.
    pub strict: bool,

    /// Default variable values. Values from `--vars-file` and `-v` win.
    ///
    /// Scalars of any type are accepted and kept as their text
    /// (`retries: 3` becomes `"3"`).
    #[serde(deserialize_with = "crate::variables::deserialize_scalar_map")]
    pub variables: BTreeMap<String, String>,
}
