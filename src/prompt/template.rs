//! Placeholder substitution engine.
//!
//! Fills the placeholders of a registered template with caller-supplied
//! values and returns the trimmed prompt text.
//!
//! # Syntax
//!
//! - `{{name}}` - Substitutes the value of variable `name`
//! - Names consist of ASCII letters, digits and `_` only. `{{ name }}`,
//!   `{{a.b}}` and `{{}}` are plain text.
//! - Single braces are always plain text, so template bodies can carry
//!   code such as `{ name: 'Submit' }` or Cucumber's `{string}` untouched.
//!
//! # Unresolved placeholders
//!
//! Rendering never fails once the template is found. A placeholder whose
//! name has no entry in the variables is copied to the output verbatim,
//! braces included, and entries that no placeholder references are ignored.
//!
//! Substitution is a single pass over the template body: a value that itself
//! looks like `{{other}}` is inserted literally and never expanded.

use super::registry::{TemplateError, TemplateKey};
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Variable name to value mapping supplied per render call.
pub type Variables = HashMap<String, String>;

static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("Invalid placeholder regex")
});

/// Render a registered template.
///
/// # Examples
///
/// ```
/// use genprompt::prompt::{TemplateKey, render, vars};
///
/// let vars = vars([("pageUrl", "https://example.com")]);
/// let prompt = render(TemplateKey::TestOnly, &vars);
///
/// assert!(prompt.contains("https://example.com"));
/// // Not supplied, so left as-is.
/// assert!(prompt.contains("{{userAction}}"));
/// ```
pub fn render(key: TemplateKey, variables: &Variables) -> String {
    substitute(key.body(), variables).trim().to_string()
}

/// Render a template identified by its string identifier.
///
/// # Returns
///
/// * `Ok(String)` - The trimmed, substituted prompt
/// * `Err(TemplateError::TemplateNotFound)` - If `name` is not a registered key
pub fn render_by_name(name: &str, variables: &Variables) -> Result<String, TemplateError> {
    let key: TemplateKey = name.parse()?;
    Ok(render(key, variables))
}

/// Substitute placeholders in an arbitrary body without trimming.
pub fn substitute(body: &str, variables: &Variables) -> String {
    PLACEHOLDER_REGEX
        .replace_all(body, |caps: &Captures<'_>| match variables.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Distinct placeholder names in `body`, in order of first occurrence.
pub fn placeholders(body: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for caps in PLACEHOLDER_REGEX.captures_iter(body) {
        if let Some(name) = caps.get(1).map(|m| m.as_str())
            && !names.contains(&name)
        {
            names.push(name);
        }
    }
    names
}

/// Placeholder names of a template that `variables` does not cover.
pub fn unresolved(key: TemplateKey, variables: &Variables) -> Vec<&'static str> {
    key.placeholders()
        .into_iter()
        .filter(|name| !variables.contains_key(*name))
        .collect()
}

/// Whether `name` could appear inside a `{{...}}` placeholder.
pub fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Helper to create a variables map from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> Variables
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_vars() -> Variables {
        vars([
            ("domContent", "<button id='go'>Go</button>"),
            ("userAction", "click Go"),
            ("pageUrl", "https://example.com"),
        ])
    }

    #[test]
    fn test_simple_substitution() {
        let vars = vars([("name", "Alice"), ("greeting", "Hello")]);
        let result = substitute("{{greeting}}, {{name}}!", &vars);
        assert_eq!(result, "Hello, Alice!");
    }

    #[test]
    fn test_no_placeholders() {
        let result = substitute("Just plain text", &Variables::new());
        assert_eq!(result, "Just plain text");
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(substitute("", &Variables::new()), "");
    }

    #[test]
    fn test_missing_variable_left_verbatim() {
        let vars = vars([("a", "A")]);
        let result = substitute("{{a}} and {{b}}", &vars);
        assert_eq!(result, "A and {{b}}");
    }

    #[test]
    fn test_repeated_placeholder_replaced_everywhere() {
        let vars = vars([("x", "X")]);
        assert_eq!(substitute("{{x}}-{{x}}-{{x}}", &vars), "X-X-X");
    }

    #[test]
    fn test_adjacent_placeholders() {
        let vars = vars([("a", "A"), ("b", "B")]);
        assert_eq!(substitute("{{a}}{{b}}", &vars), "AB");
    }

    #[test]
    fn test_extra_variables_ignored() {
        let vars = vars([("a", "A"), ("unused", "zzz")]);
        assert_eq!(substitute("{{a}}", &vars), "A");
    }

    #[test]
    fn test_value_is_not_rescanned() {
        let vars = vars([("a", "{{b}}"), ("b", "B")]);
        assert_eq!(substitute("{{a}}|{{b}}", &vars), "{{b}}|B");
    }

    #[test]
    fn test_value_with_replacement_syntax_inserted_literally() {
        let vars = vars([("a", "$1 ${0} $$")]);
        assert_eq!(substitute("[{{a}}]", &vars), "[$1 ${0} $$]");
    }

    #[test]
    fn test_malformed_placeholders_are_plain_text() {
        let vars = vars([("name", "N"), ("a.b", "AB")]);
        let body = "{{ name }} {{}} {{a.b}} {name} {{name}";
        assert_eq!(substitute(body, &vars), body);
    }

    #[test]
    fn test_triple_braces_substitute_inner_placeholder() {
        let vars = vars([("x", "X")]);
        assert_eq!(substitute("{{{x}}}", &vars), "{X}");
    }

    #[test]
    fn test_single_brace_code_untouched() {
        let vars = vars([("name", "Submit")]);
        let body = "page.getByRole('button', { name: '{{name}}' })";
        assert_eq!(
            substitute(body, &vars),
            "page.getByRole('button', { name: 'Submit' })"
        );
    }

    #[test]
    fn test_empty_value_substitution() {
        let vars = vars([("empty", "")]);
        assert_eq!(substitute("before{{empty}}after", &vars), "beforeafter");
    }

    #[test]
    fn test_unicode_in_body_and_values() {
        let vars = vars([("emoji", "🎉"), ("text", "日本語")]);
        assert_eq!(
            substitute("Hello {{emoji}} {{text}}!", &vars),
            "Hello 🎉 日本語!"
        );
    }

    #[test]
    fn test_render_playwright_code_generation() {
        let result = render(TemplateKey::PlaywrightCodeGeneration, &page_vars());

        assert!(result.contains("<button id='go'>Go</button>"));
        assert!(result.contains("click Go"));
        assert!(result.contains("https://example.com"));
        assert_eq!(result, result.trim());
    }

    #[test]
    fn test_render_with_all_variables_leaves_no_placeholders() {
        for key in TemplateKey::ALL {
            let result = render(key, &page_vars());
            assert!(
                placeholders(&result).is_empty(),
                "{} left {:?}",
                key,
                placeholders(&result)
            );
        }
    }

    #[test]
    fn test_render_without_variables_returns_trimmed_body() {
        for key in TemplateKey::ALL {
            assert_eq!(render(key, &Variables::new()), key.body().trim());
        }
    }

    #[test]
    fn test_render_ignores_irrelevant_variables() {
        let mut extended = page_vars();
        extended.insert("extra".to_string(), "x".to_string());

        for key in TemplateKey::ALL {
            assert_eq!(render(key, &page_vars()), render(key, &extended));
        }
    }

    #[test]
    fn test_render_repeated_page_url() {
        let body = TemplateKey::PlaywrightCodeGeneration.body();
        assert!(body.matches("{{pageUrl}}").count() >= 2);

        let result = render(TemplateKey::PlaywrightCodeGeneration, &page_vars());
        assert_eq!(
            result.matches("https://example.com").count(),
            body.matches("{{pageUrl}}").count()
        );
    }

    #[test]
    fn test_render_by_name() {
        let by_name = render_by_name("CUCUMBER_ONLY", &page_vars()).unwrap();
        assert_eq!(by_name, render(TemplateKey::CucumberOnly, &page_vars()));
    }

    #[test]
    fn test_render_by_name_unknown_key() {
        let err = render_by_name("NON_EXISTENT_KEY", &Variables::new()).unwrap_err();
        assert_eq!(
            err,
            TemplateError::TemplateNotFound {
                key: "NON_EXISTENT_KEY".to_string()
            }
        );
    }

    #[test]
    fn test_placeholders_distinct_in_order() {
        let names = placeholders("{{b}} {{a}} {{b}} {{ c }} {{c}}");
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_unresolved_lists_missing_names() {
        let vars = vars([("pageUrl", "https://example.com")]);
        let missing = unresolved(TemplateKey::TestOnly, &vars);
        assert!(missing.contains(&"domContent"));
        assert!(missing.contains(&"userAction"));
        assert!(!missing.contains(&"pageUrl"));

        assert!(unresolved(TemplateKey::TestOnly, &page_vars()).is_empty());
    }

    #[test]
    fn test_is_placeholder_name() {
        assert!(is_placeholder_name("domContent"));
        assert!(is_placeholder_name("page_url_2"));
        assert!(!is_placeholder_name(""));
        assert!(!is_placeholder_name("page-url"));
        assert!(!is_placeholder_name("a b"));
    }

    #[test]
    fn test_vars_helper() {
        let vars = vars([("a", "1"), ("b", "2")]);
        assert_eq!(vars.get("a"), Some(&"1".to_string()));
        assert_eq!(vars.get("b"), Some(&"2".to_string()));
    }
}
