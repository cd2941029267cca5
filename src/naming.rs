//! Naming conventions of template entries.
//!
//! Escaping and template suffixes are resolved once by the parser. Directory
//! sigils are resolved by the engine when the directory is reached, so hooks
//! that run earlier can still flip the data keys they depend on.

use crate::constants::{
    ESCAPE_CLOSE, ESCAPE_OPEN, EXCLUDE_IF_SIGIL, INCLUDE_IF_SIGIL, PATHLESS_SIGIL, TEMPLATE_SUFFIX,
};
use crate::context::Data;
use crate::tree::DirectoryEntry;

/// Strips literal-escape brackets from a source name.
///
/// Returns the effective name and whether it was escaped.
pub fn unescape(name: &str) -> (&str, bool) {
    match name.strip_prefix(ESCAPE_OPEN).and_then(|inner| inner.strip_suffix(ESCAPE_CLOSE)) {
        Some(inner) => (inner, true),
        None => (name, false),
    }
}

/// Returns the destination name of a template file, or `None` if the
/// name does not carry the template suffix.
pub fn strip_template_suffix(name: &str) -> Option<&str> {
    name.strip_suffix(TEMPLATE_SUFFIX).filter(|stripped| !stripped.is_empty())
}

/// How a directory name maps onto the destination tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryName<'a> {
    /// A regular folder with this name
    Folder(&'a str),
    /// Contents are flattened into the parent directory
    Pathless,
    /// Pathless, generated only if the data key is truthy
    IncludeIf(&'a str),
    /// Pathless, generated only if the data key is falsy or absent
    ExcludeIf(&'a str),
}

impl<'a> DirectoryName<'a> {
    pub fn classify(dir: &'a DirectoryEntry) -> Self {
        let name = dir.path.as_str();
        if name.is_empty() {
            return DirectoryName::Pathless;
        }
        if dir.literal {
            return DirectoryName::Folder(name);
        }

        let mut chars = name.chars();
        let sigil = chars.next();
        let key = chars.as_str();
        match sigil {
            Some(PATHLESS_SIGIL) => DirectoryName::Pathless,
            Some(INCLUDE_IF_SIGIL) if !key.is_empty() => DirectoryName::IncludeIf(key),
            Some(EXCLUDE_IF_SIGIL) if !key.is_empty() => DirectoryName::ExcludeIf(key),
            _ => DirectoryName::Folder(name),
        }
    }

    /// Evaluates conditional sigils against the current data bag.
    pub fn is_included(&self, data: &Data) -> bool {
        match self {
            DirectoryName::IncludeIf(key) => is_truthy(data.get(*key)),
            DirectoryName::ExcludeIf(key) => !is_truthy(data.get(*key)),
            DirectoryName::Folder(_) | DirectoryName::Pathless => true,
        }
    }

    /// The folder segment this directory adds to the destination path, if any.
    pub fn segment(&self) -> Option<&'a str> {
        match self {
            DirectoryName::Folder(name) => Some(*name),
            _ => None,
        }
    }
}

/// Truthiness of a data value: absent, `null`, `false`, `0`, and `""` are falsy.
/// Arrays and objects are truthy even when empty.
pub fn is_truthy(value: Option<&serde_json::Value>) -> bool {
    match value {
        None | Some(serde_json::Value::Null) => false,
        Some(serde_json::Value::Bool(b)) => *b,
        Some(serde_json::Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Some(serde_json::Value::String(s)) => !s.is_empty(),
        Some(serde_json::Value::Array(_)) | Some(serde_json::Value::Object(_)) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(value: serde_json::Value) -> Data {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_unescape() {
        assert_eq!(unescape("[_secret]"), ("_secret", true));
        assert_eq!(unescape("[.gitignore]"), (".gitignore", true));
        assert_eq!(unescape("plain"), ("plain", false));
        assert_eq!(unescape("[unclosed"), ("[unclosed", false));
    }

    #[test]
    fn test_strip_template_suffix() {
        assert_eq!(strip_template_suffix("README.md.j2"), Some("README.md"));
        assert_eq!(strip_template_suffix("README.md"), None);
        assert_eq!(strip_template_suffix(".j2"), None);
    }

    #[test]
    fn test_classify() {
        let named = |name: &str| DirectoryEntry::new(name);

        assert_eq!(DirectoryName::classify(&named("")), DirectoryName::Pathless);
        assert_eq!(DirectoryName::classify(&named("src")), DirectoryName::Folder("src"));
        assert_eq!(DirectoryName::classify(&named("_express")), DirectoryName::Pathless);
        assert_eq!(DirectoryName::classify(&named("+docker")), DirectoryName::IncludeIf("docker"));
        assert_eq!(DirectoryName::classify(&named("-docker")), DirectoryName::ExcludeIf("docker"));
        assert_eq!(DirectoryName::classify(&named("+")), DirectoryName::Folder("+"));

        let mut escaped = named("_secret");
        escaped.literal = true;
        assert_eq!(DirectoryName::classify(&escaped), DirectoryName::Folder("_secret"));
    }

    #[test]
    fn test_is_included() {
        let flag = DirectoryName::IncludeIf("flag");
        let no_flag = DirectoryName::ExcludeIf("flag");

        assert!(flag.is_included(&data(json!({"flag": true}))));
        assert!(!flag.is_included(&data(json!({"flag": false}))));
        assert!(!flag.is_included(&data(json!({}))));
        assert!(no_flag.is_included(&data(json!({}))));
        assert!(!no_flag.is_included(&data(json!({"flag": "yes"}))));
    }

    #[test]
    fn test_is_truthy() {
        assert!(!is_truthy(None));
        assert!(!is_truthy(Some(&json!(null))));
        assert!(!is_truthy(Some(&json!(0))));
        assert!(!is_truthy(Some(&json!(""))));
        assert!(is_truthy(Some(&json!(1.5))));
        assert!(is_truthy(Some(&json!([]))));
        assert!(is_truthy(Some(&json!({}))));
    }
}
