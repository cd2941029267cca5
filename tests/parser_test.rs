mod common;

use common::write;
use sprout::constants::HOOK_FILE;
use sprout::error::Error;
use sprout::parser::parse_template;
use sprout::tree::{Entry, FileEntry};
use tempfile::TempDir;

fn file<'a>(entries: &'a [Entry], path: &str) -> &'a FileEntry {
    entries
        .iter()
        .find_map(|entry| match entry {
            Entry::File(file) if file.path == path => Some(file),
            _ => None,
        })
        .unwrap_or_else(|| panic!("Expected file entry '{path}'"))
}

#[test]
fn test_root_path_is_empty() {
    let template = TempDir::new().unwrap();
    write(template.path(), "a.txt", "a");

    let tree = parse_template(template.path()).unwrap();
    assert_eq!(tree.path, "");
    assert_eq!(tree.entries.len(), 1);
}

#[test]
fn test_template_suffix_is_stripped() {
    let template = TempDir::new().unwrap();
    write(template.path(), "README.md.j2", "# {{ name }}");
    write(template.path(), "LICENSE", "MIT");

    let tree = parse_template(template.path()).unwrap();

    let readme = file(&tree.entries, "README.md");
    assert!(readme.is_template);
    assert_eq!(readme.content, b"# {{ name }}");
    assert_eq!(readme.source.as_deref(), Some(template.path().join("README.md.j2").as_path()));

    let license = file(&tree.entries, "LICENSE");
    assert!(!license.is_template);
}

#[test]
fn test_escaped_names() {
    let template = TempDir::new().unwrap();
    write(template.path(), "[_secret]/key.txt", "key");
    write(template.path(), "[raw.txt.j2]", "{{ not rendered }}");

    let tree = parse_template(template.path()).unwrap();

    let secret = tree
        .entries
        .iter()
        .find_map(|entry| match entry {
            Entry::Directory(dir) => Some(dir),
            _ => None,
        })
        .unwrap();
    assert_eq!(secret.path, "_secret");
    assert!(secret.literal);

    let raw = file(&tree.entries, "raw.txt.j2");
    assert!(!raw.is_template);
}

#[test]
fn test_hook_module_is_consumed() {
    let template = TempDir::new().unwrap();
    write(template.path(), HOOK_FILE, "#!/bin/sh\n");
    write(template.path(), "child/a.txt", "a");
    write(template.path(), &format!("child/[{HOOK_FILE}]"), "literal");

    let tree = parse_template(template.path()).unwrap();

    assert_eq!(tree.hook.as_deref(), Some(template.path().join(HOOK_FILE).as_path()));
    assert!(tree.find(HOOK_FILE).is_none());

    let Some(Entry::Directory(child)) = tree.find("child") else {
        panic!("Expected directory entry 'child'");
    };
    assert!(child.hook.is_none());
    assert_eq!(file(&child.entries, HOOK_FILE).content, b"literal");
}

#[test]
fn test_binary_content_is_preserved() {
    let template = TempDir::new().unwrap();
    let bytes = vec![0x89, 0x50, 0x4e, 0x47, 0x00, 0xff];
    std::fs::write(template.path().join("logo.png"), &bytes).unwrap();

    let tree = parse_template(template.path()).unwrap();
    assert_eq!(file(&tree.entries, "logo.png").content, bytes);
}

#[test]
fn test_missing_root_fails() {
    let template = TempDir::new().unwrap();
    let result = parse_template(template.path().join("missing"));
    assert!(matches!(result, Err(Error::IoError(_))));
}
