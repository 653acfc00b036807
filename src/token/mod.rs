//! Token engine for `<name>` placeholders
//!
//! Templates are plain strings such as `<job_path>/<spot>/<shot>/3d`. Tokens
//! are substituted best-effort: a placeholder without a non-empty value is
//! left in place so the same template can be evaluated again once more
//! values are known. Expansion repeats while a substituted value introduces
//! another resolvable placeholder.

use std::collections::{HashMap, HashSet};
use std::path::MAIN_SEPARATOR;

use crate::error::{self, Result};

/// Token name to token value.
pub type TokenMap = HashMap<String, String>;

/// Upper bound on substitution passes before giving up.
pub const MAX_EXPANSION_DEPTH: usize = 32;

/// Find the token names in a template, in order of appearance.
///
/// Duplicates are preserved. A `<` without a closing `>` ends the scan.
///
/// # Examples
/// ```
/// use jobpath::token::find_tokens;
/// assert_eq!(find_tokens("<job_path>/<spot>/<spot>"), vec!["job_path", "spot", "spot"]);
/// assert_eq!(find_tokens("<spot>/<sho"), vec!["spot"]);
/// ```
pub fn find_tokens(template: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find('<') {
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find('>') else {
            break;
        };
        tokens.push(after_open[..close].to_string());
        rest = &after_open[close..];
    }

    tokens
}

/// Look up a token, treating an empty value as absent.
pub fn lookup<'a>(tokens: &'a TokenMap, name: &str) -> Option<&'a str> {
    tokens
        .get(name)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

/// Run a single substitution pass over the template.
///
/// Each discovered token with a non-empty value has every `<name>` occurrence
/// replaced. Unknown or empty tokens are left untouched.
pub fn substitute(template: &str, tokens: &TokenMap) -> String {
    let mut resolved = template.to_string();
    for name in find_tokens(template) {
        if let Some(value) = lookup(tokens, &name) {
            resolved = resolved.replace(&format!("<{name}>"), value);
        }
    }
    resolved
}

/// First token in the template that still has a substitutable value.
fn first_resolvable(template: &str, tokens: &TokenMap) -> Option<String> {
    find_tokens(template)
        .into_iter()
        .find(|name| lookup(tokens, name).is_some())
}

/// Substitute tokens until no remaining placeholder can be resolved.
///
/// The result is not separator-normalized; see [`replace_tokens`].
///
/// # Errors
/// Returns `TokenCycle` when an intermediate result repeats, and
/// `TokenRecursionLimit` when expansion keeps growing past
/// [`MAX_EXPANSION_DEPTH`] passes.
pub fn expand(template: &str, tokens: &TokenMap) -> Result<String> {
    let mut current = substitute(template, tokens);
    let mut seen = HashSet::from([template.to_string()]);

    for _ in 1..MAX_EXPANSION_DEPTH {
        let Some(pending) = first_resolvable(&current, tokens) else {
            return Ok(current);
        };
        if !seen.insert(current.clone()) {
            return Err(error::token::cycle(pending, template));
        }
        current = substitute(&current, tokens);
    }

    match first_resolvable(&current, tokens) {
        None => Ok(current),
        Some(_) => Err(error::token::recursion_limit(
            template,
            MAX_EXPANSION_DEPTH,
        )),
    }
}

/// Substitute tokens recursively, then normalize path separators.
///
/// # Examples
/// ```
/// use jobpath::token::{replace_tokens, TokenMap};
/// let tokens = TokenMap::from([("spot".to_string(), "S01".to_string())]);
/// let resolved = replace_tokens("<spot>_<shot>", &tokens).unwrap();
/// assert_eq!(resolved, "S01_<shot>");
/// ```
///
/// # Errors
/// See [`expand`].
pub fn replace_tokens(template: &str, tokens: &TokenMap) -> Result<String> {
    let expanded = expand(template, tokens)?;
    Ok(normalize_separators(&expanded))
}

/// Rejoin `/`-separated segments with the platform separator.
///
/// Empty segments are dropped, so doubled or trailing slashes collapse. A
/// leading `/` keeps the path rooted, and a leading `//` stays a UNC prefix.
pub fn normalize_separators(path: &str) -> String {
    let body = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(&MAIN_SEPARATOR.to_string());

    if path.starts_with("//") {
        format!("{MAIN_SEPARATOR}{MAIN_SEPARATOR}{body}")
    } else if path.starts_with('/') {
        format!("{MAIN_SEPARATOR}{body}")
    } else {
        body
    }
}
