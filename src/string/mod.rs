//! String helpers.
//!
//! # Examples
//!
//! ```rust
//! use tidbits::string::{ensure_prefix, slash, template};
//!
//! assert_eq!(slash(r"C:\Users\me"), "C:/Users/me");
//! assert_eq!(ensure_prefix("/", "api"), "/api");
//! assert_eq!(template("{0} + {1}", &["1", "2"]), "1 + 2");
//! ```

mod template;

pub use template::{template, template_named};

/// Replaces every backslash with a forward slash.
#[must_use]
pub fn slash(path: &str) -> String {
    path.replace('\\', "/")
}

/// Returns `text` with `prefix` prepended, unless it already starts with it.
#[must_use]
pub fn ensure_prefix(prefix: &str, text: &str) -> String {
    if text.starts_with(prefix) {
        text.to_string()
    } else {
        format!("{prefix}{text}")
    }
}

/// Returns `text` with `suffix` appended, unless it already ends with it.
#[must_use]
pub fn ensure_suffix(suffix: &str, text: &str) -> String {
    if text.ends_with(suffix) {
        text.to_string()
    } else {
        format!("{text}{suffix}")
    }
}

/// Upper-cases the first character and lower-cases the rest.
///
/// # Examples
///
/// ```rust
/// use tidbits::string::capitalize;
///
/// assert_eq!(capitalize("hELLO"), "Hello");
/// assert_eq!(capitalize(""), "");
/// ```
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut characters = text.chars();
    characters.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(characters.flat_map(char::to_lowercase))
            .collect()
    })
}

/// Removes the indentation shared by every non-blank line.
///
/// A leading and a trailing blank line are dropped, so the helper can be fed a
/// raw multi-line literal directly.
///
/// # Examples
///
/// ```rust
/// use tidbits::string::unindent;
///
/// let text = "
///     fn main() {
///         run();
///     }
/// ";
/// assert_eq!(unindent(text), "fn main() {\n    run();\n}");
/// ```
#[must_use]
pub fn unindent(text: &str) -> String {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if lines.first().is_some_and(|line| line.trim().is_empty()) {
        lines.remove(0);
    }
    if lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    let indent = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|line| line.get(indent..).unwrap_or_else(|| line.trim_start()))
        .collect::<Vec<_>>()
        .join("\n")
}
