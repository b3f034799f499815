//! Generator type directory.
//!
//! Human-readable labels for each template, for callers that let a user pick
//! a generator. Labels are derived from [`TemplateKey`] with an exhaustive
//! match, so the directory and the registry always cover the same keys.

use super::registry::{TemplateError, TemplateKey};
use serde::Serialize;

/// A generator choice as presented to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GeneratorType {
    /// The template this generator renders.
    pub key: TemplateKey,
    /// Display label.
    pub label: &'static str,
}

static GENERATOR_TYPES: [GeneratorType; 4] = [
    entry(TemplateKey::PlaywrightCodeGeneration),
    entry(TemplateKey::TestOnly),
    entry(TemplateKey::PageOnly),
    entry(TemplateKey::CucumberOnly),
];

const fn entry(key: TemplateKey) -> GeneratorType {
    GeneratorType {
        key,
        label: label_of(key),
    }
}

/// All generator types, in [`TemplateKey::ALL`] order.
pub fn generator_types() -> &'static [GeneratorType] {
    &GENERATOR_TYPES
}

/// Display label of a generator.
pub const fn label_of(key: TemplateKey) -> &'static str {
    match key {
        TemplateKey::PlaywrightCodeGeneration => "Playwright Code Generation",
        TemplateKey::TestOnly => "Test-Only",
        TemplateKey::PageOnly => "Page-Only",
        TemplateKey::CucumberOnly => "Cucumber-Only",
    }
}

/// Display label of a generator identified by string.
pub fn label_of_name(name: &str) -> Result<&'static str, TemplateError> {
    Ok(label_of(name.parse()?))
}
