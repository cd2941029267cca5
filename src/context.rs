//! Generation state handed to every hook invocation.

use std::path::PathBuf;

use crate::tree::DirectoryEntry;

/// The shared template data bag.
///
/// One bag lives for a whole generation; every hook and every rendered
/// template sees the same values.
pub type Data = serde_json::Map<String, serde_json::Value>;

/// Per-directory view of a running generation.
///
/// A new context is built for each directory right before its before-hook and
/// is passed again to its after-hook. Hooks change the rest of the traversal
/// only through it: `data` is the shared bag, `dir` is the directory about to
/// be generated (its entries may be filtered, replaced or extended) and `dest`
/// is where that directory will be written.
#[derive(Debug)]
pub struct Context<'a> {
    pub data: &'a mut Data,
    pub dir: &'a mut DirectoryEntry,
    pub dest: PathBuf,
}

impl<'a> Context<'a> {
    pub fn new(data: &'a mut Data, dir: &'a mut DirectoryEntry, dest: PathBuf) -> Self {
        Self { data, dir, dest }
    }
}
