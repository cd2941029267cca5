//! Git repository initialization of generated projects.

use log::{debug, info};
use std::path::Path;

use crate::error::Result;

/// Returns true if `dir` is inside an existing git work tree.
pub fn is_inside_git_repo<P: AsRef<Path>>(dir: P) -> bool {
    git2::Repository::discover(dir.as_ref()).is_ok()
}

/// Initializes a git repository in `dir` unless it already lies inside one.
///
/// # Returns
/// * `Result<bool>` - Whether a new repository was created
pub fn init_git<P: AsRef<Path>>(dir: P) -> Result<bool> {
    let dir = dir.as_ref();
    if is_inside_git_repo(dir) {
        debug!("'{}' is already inside a git repository.", dir.display());
        return Ok(false);
    }

    git2::Repository::init(dir)?;
    info!("Initialized git repository in '{}'.", dir.display());
    Ok(true)
}
