//! Template tree parsing.
//! Walks a template directory and loads it into a [`DirectoryEntry`] tree,
//! resolving escaped names, template suffixes and hook modules on the way.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::constants::HOOK_FILE;
use crate::error::{Error, Result};
use crate::naming::{strip_template_suffix, unescape};
use crate::tree::{DirectoryEntry, Entry, FileEntry};

/// Parses a template directory into an in-memory tree.
///
/// The returned root has an empty `path`, so generation places its children
/// directly into the destination rather than into a folder named after the
/// template.
///
/// # Arguments
/// * `template_root` - Root directory of the template
///
/// # Returns
/// * `Result<DirectoryEntry>` - The parsed tree with all file contents loaded
///
/// # Errors
/// * `Error::IoError` if any directory or file cannot be read
pub fn parse_template<P: AsRef<Path>>(template_root: P) -> Result<DirectoryEntry> {
    let template_root = std::path::absolute(template_root.as_ref())?;
    debug!("Parsing template '{}'.", template_root.display());

    if !fs::metadata(&template_root)?.is_dir() {
        return Err(Error::TemplateError(format!(
            "template root '{}' is not a directory",
            template_root.display()
        )));
    }

    let mut root = parse_directory(&template_root)?;
    root.path = String::new();
    Ok(root)
}

fn parse_directory(dir_path: &Path) -> Result<DirectoryEntry> {
    let mut children = Vec::new();
    for dir_entry in WalkDir::new(dir_path).min_depth(1).max_depth(1).follow_links(true) {
        let dir_entry = dir_entry.map_err(|e| Error::IoError(e.into()))?;
        children.push(dir_entry);
    }

    let hook = children
        .iter()
        .position(|child| child.file_type().is_file() && child.file_name() == HOOK_FILE)
        .map(|idx| children.remove(idx).into_path());

    if let Some(hook) = &hook {
        debug!("Found hook module '{}'.", hook.display());
    }

    let mut entries = Vec::with_capacity(children.len());
    for child in children {
        let raw_name = child.file_name().to_str().ok_or_else(|| {
            Error::TemplateError(format!(
                "template entry name is not valid UTF-8: '{}'",
                child.path().display()
            ))
        })?;
        let (name, escaped) = unescape(raw_name);
        let name = name.to_string();

        let entry = if child.file_type().is_dir() {
            let mut dir = parse_directory(child.path())?;
            dir.path = name;
            dir.literal = escaped;
            Entry::Directory(dir)
        } else {
            Entry::File(parse_file(child.into_path(), name, escaped)?)
        };
        entries.push(entry);
    }

    Ok(DirectoryEntry { path: dir_name(dir_path), entries, hook, literal: false })
}

fn parse_file(source: PathBuf, name: String, escaped: bool) -> Result<FileEntry> {
    let content = fs::read(&source)?;

    let (path, is_template) = match strip_template_suffix(&name) {
        Some(stripped) if !escaped => (stripped.to_string(), true),
        _ => (name, false),
    };

    Ok(FileEntry { path, content, is_template, source: Some(source) })
}

fn dir_name(dir_path: &Path) -> String {
    dir_path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default()
}
