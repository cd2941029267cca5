//! Small helpers exposed to templates.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
static LEADING_DOT_OR_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[._]").expect("leading pattern is valid"));
static INVALID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z\d\-~]+").expect("invalid chars pattern is valid"));

/// Converts a project name into a valid npm package name (kebab case).
///
/// ```
/// use sprout::utils::to_valid_package_name;
///
/// assert_eq!(to_valid_package_name(" My App "), "my-app");
/// ```
pub fn to_valid_package_name(name: &str) -> String {
    let name = name.trim().to_lowercase();
    let name = WHITESPACE.replace_all(&name, "-");
    let name = LEADING_DOT_OR_UNDERSCORE.replace(&name, "");
    INVALID_CHARS.replace_all(&name, "-").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_valid_package_name() {
        assert_eq!(to_valid_package_name("my-app"), "my-app");
        assert_eq!(to_valid_package_name("My Cool  App"), "my-cool-app");
        assert_eq!(to_valid_package_name(".hidden"), "hidden");
        assert_eq!(to_valid_package_name("_private"), "private");
        assert_eq!(to_valid_package_name("scope@name!"), "scope-name-");
        assert_eq!(to_valid_package_name("tilde~ok"), "tilde~ok");
    }
}
