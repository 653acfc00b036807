//! Token expansion errors

use super::JobpathError;

/// Creates a substitution cycle error
pub fn cycle(token: impl Into<String>, template: impl Into<String>) -> JobpathError {
    JobpathError::TokenCycle {
        token: token.into(),
        template: template.into(),
    }
}

/// Creates an expansion depth error
pub fn recursion_limit(template: impl Into<String>, depth: usize) -> JobpathError {
    JobpathError::TokenRecursionLimit {
        template: template.into(),
        depth,
    }
}

/// Creates an unresolved tokens error listing every missing token
pub fn unresolved(tokens: &[String]) -> JobpathError {
    JobpathError::UnresolvedTokens {
        tokens: tokens.join(", "),
    }
}
