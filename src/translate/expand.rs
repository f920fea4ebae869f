//! Expansion syntax rewriting
//!
//! Make references a variable as `$(VAR)`; shell wants `${VAR}`. The rewrite
//! is textual only: the referenced value is never looked up.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Matches Make variable references: $(VAR)
static MAKE_REF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\(([^)]+)\)").unwrap());

/// Rewrite every `$(IDENT)` in `value` to `${IDENT}`
///
/// `IDENT` is any non-empty run of characters other than `)`. Existing
/// `${IDENT}` references and all other characters pass through untouched.
///
/// # Examples
///
/// ```
/// use mk2env::translate::rewrite_expansions;
///
/// assert_eq!(rewrite_expansions("$(PREFIX)/bin"), "${PREFIX}/bin");
/// ```
pub fn rewrite_expansions(value: &str) -> String {
    MAKE_REF_RE
        .replace_all(value, |caps: &Captures| format!("${{{}}}", &caps[1]))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_single_reference() {
        assert_eq!(rewrite_expansions("$(FOO)"), "${FOO}");
    }

    #[test]
    fn test_rewrite_reference_in_path() {
        assert_eq!(rewrite_expansions("$(FOO)/baz"), "${FOO}/baz");
    }

    #[test]
    fn test_rewrite_multiple_references() {
        assert_eq!(
            rewrite_expansions("$(BUILD_DIR)/$(TARGET)-$(VERSION).tar.gz"),
            "${BUILD_DIR}/${TARGET}-${VERSION}.tar.gz"
        );
    }

    #[test]
    fn test_rewrite_adjacent_references() {
        assert_eq!(rewrite_expansions("$(A)$(B)"), "${A}${B}");
    }

    #[test]
    fn test_rewrite_preserves_plain_text() {
        assert_eq!(rewrite_expansions("no references here"), "no references here");
        assert_eq!(rewrite_expansions(""), "");
    }

    #[test]
    fn test_rewrite_leaves_braced_references() {
        assert_eq!(rewrite_expansions("${FOO}/$(BAR)"), "${FOO}/${BAR}");
    }

    #[test]
    fn test_rewrite_ignores_empty_parens() {
        assert_eq!(rewrite_expansions("$()"), "$()");
    }

    #[test]
    fn test_rewrite_ignores_lone_dollar() {
        assert_eq!(rewrite_expansions("cost $5 (approx)"), "cost $5 (approx)");
    }

    #[test]
    fn test_rewrite_identifier_is_any_non_paren_text() {
        assert_eq!(rewrite_expansions("$(lower case)"), "${lower case}");
    }

    #[test]
    fn test_rewrite_is_not_recursive() {
        // The inner reference ends the match at the first ')'
        assert_eq!(
            rewrite_expansions("$(shell echo $(X))"),
            "${shell echo $(X})"
        );
    }

    #[test]
    fn test_rewrite_unterminated_reference() {
        assert_eq!(rewrite_expansions("$(FOO"), "$(FOO");
    }
}
