//! genprompt: prompt templates for test-generation tools.
//!
//! A fixed registry of templates, one per generator type, rendered by
//! filling `{{name}}` placeholders with caller-supplied values.
//!
//! # Example
//!
//! ```
//! use genprompt::{TemplateKey, label_of, render, vars};
//!
//! let prompt = render(
//!     TemplateKey::PlaywrightCodeGeneration,
//!     &vars([
//!         ("domContent", "<button id='go'>Go</button>"),
//!         ("userAction", "click Go"),
//!         ("pageUrl", "https://example.com"),
//!     ]),
//! );
//!
//! assert!(prompt.contains("click Go"));
//! assert_eq!(label_of(TemplateKey::CucumberOnly), "Cucumber-Only");
//! ```
//!
//! The [`prompt`] module is pure and synchronous. The remaining modules back
//! the `genprompt` binary: configuration, variable files, output and the CLI.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod prompt;
pub mod variables;

#[cfg(test)]
mod test_support;

pub use prompt::{
    GeneratorType, TemplateError, TemplateKey, Variables, escape_delimiters, generator_types,
    label_of, label_of_name, lookup, lookup_by_name, render, render_by_name, vars,
};
