//! Prompt templates for test generators.
//!
//! This module provides:
//!
//! - **Registry**: The closed set of templates, one per [`TemplateKey`]
//! - **Template**: Placeholder substitution producing the final prompt text
//! - **Escape**: Code fence escaping for nesting rendered text
//! - **Directory**: Display labels for each generator type
//!
//! Everything here is pure: no I/O, no logging, no shared mutable state.
//!
//! # Template Syntax
//!
//! Templates use `{{name}}` placeholders:
//!
//! ```text
//! Generate a Page Object class for the page at {{pageUrl}}.
//!
//! ## Page DOM
//! {{domContent}}
//! ```
//!
//! Placeholders without a supplied value stay in the output unchanged.

mod directory;
mod escape;
mod registry;
mod template;

pub use directory::{GeneratorType, generator_types, label_of, label_of_name};
pub use escape::{ESCAPED_FENCE, FENCE, escape_delimiters, fence};
pub use registry::{TemplateError, TemplateKey, lookup, lookup_by_name};
pub use template::{
    Variables, is_placeholder_name, placeholders, render, render_by_name, substitute, unresolved,
    vars,
};
