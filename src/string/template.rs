//! `{placeholder}` substitution.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

/// Replaces `{0}`, `{1}`, ... with the matching positional argument.
///
/// Placeholders without a matching argument are left untouched.
#[must_use]
pub fn template<S: AsRef<str>>(input: &str, args: &[S]) -> String {
    substitute(input, |key| {
        let index: usize = key.parse().ok()?;
        args.get(index).map(|arg| arg.as_ref().to_string())
    })
}

/// Replaces `{name}` placeholders with values from `values`.
///
/// Unknown names are replaced by `fallback` when one is given and left
/// untouched otherwise.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use tidbits::string::template_named;
///
/// let values = HashMap::from([("name", "Ada")]);
/// assert_eq!(template_named("Hi {name}{mark}", &values, None), "Hi Ada{mark}");
/// assert_eq!(template_named("Hi {name}{mark}", &values, Some("!")), "Hi Ada!");
/// ```
#[must_use]
pub fn template_named<K, V, S>(
    input: &str,
    values: &HashMap<K, V, S>,
    fallback: Option<&str>,
) -> String
where
    K: Borrow<str> + Hash + Eq,
    V: Display,
    S: std::hash::BuildHasher,
{
    substitute(input, |key| {
        values
            .get(key)
            .map(ToString::to_string)
            .or_else(|| fallback.map(str::to_string))
    })
}

fn substitute<F>(input: &str, mut lookup: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let mut output = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find('}') else {
            rest = &rest[open..];
            break;
        };
        let key = &after_open[..close];
        // `{a{b}` restarts at the inner brace
        if key.contains('{') {
            output.push('{');
            rest = after_open;
            continue;
        }
        match lookup(key) {
            Some(value) => output.push_str(&value),
            None => {
                output.push('{');
                output.push_str(key);
                output.push('}');
            }
        }
        rest = &after_open[close + 1..];
    }

    output.push_str(rest);
    output
}
