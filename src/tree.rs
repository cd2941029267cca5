//! In-memory representation of a template directory.
//!
//! The parser produces an [`Entry`] tree with every file's content already
//! loaded. Hooks may rewrite any part of it before the engine writes files, so
//! all types here are plain owned data and (de)serialize to JSON for the
//! script hook protocol.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A single node of the template tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entry {
    File(FileEntry),
    Directory(DirectoryEntry),
}

impl Entry {
    /// Returns the resolved name of the entry at its tree level.
    pub fn path(&self) -> &str {
        match self {
            Entry::File(file) => &file.path,
            Entry::Directory(dir) => &dir.path,
        }
    }
}

impl From<FileEntry> for Entry {
    fn from(file: FileEntry) -> Self {
        Entry::File(file)
    }
}

impl From<DirectoryEntry> for Entry {
    fn from(dir: DirectoryEntry) -> Self {
        Entry::Directory(dir)
    }
}

/// A template file with its content loaded into memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Destination name, with the template suffix already stripped
    pub path: String,
    /// Raw bytes read at parse time
    #[serde(with = "content")]
    pub content: Vec<u8>,
    /// Whether the content is rendered before it is written
    #[serde(default)]
    pub is_template: bool,
    /// Location the file was read from, absent for entries created by hooks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
}

impl FileEntry {
    /// Creates a plain file entry that is copied as-is.
    pub fn new<S: Into<String>, C: Into<Vec<u8>>>(path: S, content: C) -> Self {
        Self { path: path.into(), content: content.into(), is_template: false, source: None }
    }

    /// Creates a file entry whose content is rendered with the template data.
    pub fn template<S: Into<String>, C: Into<Vec<u8>>>(path: S, content: C) -> Self {
        Self { is_template: true, ..Self::new(path, content) }
    }

    /// Returns the content as text if it is valid UTF-8.
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.content).ok()
    }
}

/// A template directory and its children in filesystem enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// Resolved name at this tree level; empty for the template root
    pub path: String,
    #[serde(default)]
    pub entries: Vec<Entry>,
    /// Absolute path of the hook module found in this directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hook: Option<PathBuf>,
    /// The source name was bracket-escaped, so directory sigils do not apply
    #[serde(default)]
    pub literal: bool,
}

impl DirectoryEntry {
    pub fn new<S: Into<String>>(path: S) -> Self {
        Self { path: path.into(), ..Self::default() }
    }

    /// Adds an entry and returns the directory, for building trees inline.
    pub fn with_entry<E: Into<Entry>>(mut self, entry: E) -> Self {
        self.entries.push(entry.into());
        self
    }

    pub fn with_hook<P: AsRef<Path>>(mut self, hook: P) -> Self {
        self.hook = Some(hook.as_ref().to_path_buf());
        self
    }

    /// Finds a direct child by its resolved name.
    pub fn find(&self, path: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.path() == path)
    }

    /// Finds a direct child file by its resolved name for in-place edits.
    pub fn find_file_mut(&mut self, path: &str) -> Option<&mut FileEntry> {
        self.entries.iter_mut().find_map(|entry| match entry {
            Entry::File(file) if file.path == path => Some(file),
            _ => None,
        })
    }

    /// Collects the hook modules of this directory and all of its descendants.
    pub fn hook_modules(&self) -> Vec<&Path> {
        let mut hooks: Vec<&Path> = self.hook.as_deref().into_iter().collect();
        for entry in &self.entries {
            if let Entry::Directory(dir) = entry {
                hooks.extend(dir.hook_modules());
            }
        }
        hooks
    }
}

/// Serializes file content as a JSON string when it is UTF-8 and as a byte
/// array otherwise. Both forms are accepted when reading it back.
mod content {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Content {
        Text(String),
        Bytes(Vec<u8>),
    }

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        match std::str::from_utf8(bytes) {
            Ok(text) => serializer.serialize_str(text),
            Err(_) => serializer.collect_seq(bytes),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        Ok(match Content::deserialize(deserializer)? {
            Content::Text(text) => text.into_bytes(),
            Content::Bytes(bytes) => bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_serialization() {
        let dir = DirectoryEntry::new("src")
            .with_entry(FileEntry::template("main.rs", "fn main() {}"))
            .with_entry(FileEntry::new("logo.bin", vec![0xff, 0x00]));

        let value = serde_json::to_value(Entry::from(dir.clone())).unwrap();
        assert_eq!(value["type"], "directory");
        assert_eq!(value["entries"][0]["type"], "file");
        assert_eq!(value["entries"][0]["content"], "fn main() {}");
        assert_eq!(value["entries"][0]["is_template"], true);
        assert_eq!(value["entries"][1]["content"], json!([255, 0]));

        let parsed: Entry = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, Entry::Directory(dir));
    }

    #[test]
    fn test_entry_defaults_when_missing() {
        let parsed: Entry =
            serde_json::from_value(json!({"type": "file", "path": "a.txt", "content": "a"}))
                .unwrap();
        assert_eq!(parsed, Entry::File(FileEntry::new("a.txt", "a")));
    }

    #[test]
    fn test_hook_modules() {
        let tree = DirectoryEntry::new("")
            .with_hook("/t/_poop.js")
            .with_entry(DirectoryEntry::new("a").with_hook("/t/a/_poop.js"))
            .with_entry(FileEntry::new("b", ""));

        assert_eq!(
            tree.hook_modules(),
            vec![Path::new("/t/_poop.js"), Path::new("/t/a/_poop.js")]
        );
    }
}
