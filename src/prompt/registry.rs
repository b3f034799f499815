//! Template registry.
//!
//! The set of templates is closed: every [`TemplateKey`] has exactly one body,
//! embedded into the binary at build time. There is no registration API.
//! String identifiers arriving from the outside (CLI arguments, config files)
//! are parsed into a key with [`str::parse`], which is the only place a
//! [`TemplateError::TemplateNotFound`] can come from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for template lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The identifier does not name any registered template.
    #[error("template not found: '{key}'")]
    TemplateNotFound {
        /// The identifier exactly as supplied by the caller.
        key: String,
    },
}

/// Identifier of a registered prompt template.
///
/// Serialized as its stable SCREAMING_SNAKE_CASE identifier
/// (e.g. `PLAYWRIGHT_CODE_GENERATION`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemplateKey {
    /// Page Object plus a Playwright test exercising it.
    PlaywrightCodeGeneration,
    /// A standalone Playwright test, no Page Object.
    TestOnly,
    /// A Page Object class, no test.
    PageOnly,
    /// A Cucumber feature file in Gherkin.
    CucumberOnly,
}

impl TemplateKey {
    /// Every key, in presentation order.
    pub const ALL: [TemplateKey; 4] = [
        TemplateKey::PlaywrightCodeGeneration,
        TemplateKey::TestOnly,
        TemplateKey::PageOnly,
        TemplateKey::CucumberOnly,
    ];

    /// The stable string identifier of this key.
    pub const fn as_str(self) -> &'static str {
        match self {
            TemplateKey::PlaywrightCodeGeneration => "PLAYWRIGHT_CODE_GENERATION",
            TemplateKey::TestOnly => "TEST_ONLY",
            TemplateKey::PageOnly => "PAGE_ONLY",
            TemplateKey::CucumberOnly => "CUCUMBER_ONLY",
        }
    }

    /// The raw template body, placeholders intact and untrimmed.
    pub const fn body(self) -> &'static str {
        match self {
            TemplateKey::PlaywrightCodeGeneration => {
                include_str!("../../templates/playwright_code_generation.md")
            }
            TemplateKey::TestOnly => include_str!("../../templates/test_only.md"),
            TemplateKey::PageOnly => include_str!("../../templates/page_only.md"),
            TemplateKey::CucumberOnly => include_str!("../../templates/cucumber_only.md"),
        }
    }

    /// Distinct placeholder names in this template, in order of first use.
    pub fn placeholders(self) -> Vec<&'static str> {
        super::template::placeholders(self.body())
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKey {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| TemplateError::TemplateNotFound { key: s.to_string() })
    }
}

/// Look up the body of a template.
pub fn lookup(key: TemplateKey) -> &'static str {
    key.body()
}

/// Look up the body of a template by its string identifier.
///
/// # Examples
///
/// ```
/// use genprompt::prompt::{TemplateError, lookup_by_name};
///
/// assert!(lookup_by_name("CUCUMBER_ONLY").unwrap().contains("Gherkin"));
/// assert_eq!(
///     lookup_by_name("NON_EXISTENT_KEY"),
///     Err(TemplateError::TemplateNotFound { key: "NON_EXISTENT_KEY".to_string() })
/// );
/// ```
pub fn lookup_by_name(name: &str) -> Result<&'static str, TemplateError> {
    Ok(lookup(name.parse()?))
}
