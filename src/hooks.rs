//! Per-directory lifecycle hooks.
//!
//! A template directory may contain a hook module (see [`HOOK_FILE`]). The
//! engine loads it through a [`HookLoader`] and calls [`Hook::before`] before
//! the directory is generated and [`Hook::after`] once its whole subtree is
//! written. The default loader runs hook modules as executable scripts that
//! exchange the [`Context`] as JSON over stdin/stdout.

use log::debug;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::constants::{HOOK_DEST_ENV, HOOK_FILE, HOOK_PHASE_ENV};
use crate::context::{Context, Data};
use crate::error::{Error, Result};
use crate::prompt::confirm;
use crate::tree::{DirectoryEntry, Entry};

/// Lifecycle phase a hook is invoked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Before,
    After,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Before => "before",
            Phase::After => "after",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle entry points of a loaded hook module.
///
/// Both entry points are optional; the default implementations do nothing.
/// Errors returned from either are propagated to the caller of the
/// generation unchanged.
pub trait Hook {
    /// Runs before the directory's entries are generated. May change the
    /// data bag, the entry list and the destination.
    fn before(&self, _ctx: &mut Context<'_>) -> Result<()> {
        Ok(())
    }

    /// Runs after every descendant of the directory has been generated.
    fn after(&self, _ctx: &mut Context<'_>) -> Result<()> {
        Ok(())
    }
}

/// Turns a hook module path found in the template into a callable [`Hook`].
pub trait HookLoader {
    fn load(&self, path: &Path) -> Result<Box<dyn Hook>>;
}

/// Loader that ignores every hook module.
///
/// Used when the user declines to run hooks. Hook files are still consumed
/// by the parser and never written to the destination.
#[derive(Debug, Default)]
pub struct SkipHookLoader;

struct SkippedHook;

impl Hook for SkippedHook {}

impl HookLoader for SkipHookLoader {
    fn load(&self, path: &Path) -> Result<Box<dyn Hook>> {
        debug!("Skipping hook module '{}'.", path.display());
        Ok(Box::new(SkippedHook))
    }
}

/// Loader running hook modules as executable scripts.
#[derive(Debug, Default)]
pub struct ScriptHookLoader;

impl HookLoader for ScriptHookLoader {
    fn load(&self, path: &Path) -> Result<Box<dyn Hook>> {
        let metadata = std::fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(Error::HookError(format!("'{}' is not a file", path.display())));
        }
        if !is_executable(&metadata) {
            return Err(Error::HookError(format!("'{}' is not executable", path.display())));
        }
        Ok(Box::new(ScriptHook { path: path.to_path_buf() }))
    }
}

#[cfg(unix)]
fn is_executable(metadata: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_metadata: &std::fs::Metadata) -> bool {
    true
}

/// Message written to a hook script's stdin.
#[derive(Debug, Serialize)]
pub struct HookInput<'a> {
    pub phase: Phase,
    pub data: &'a Data,
    pub dest: &'a Path,
    pub dir: &'a DirectoryEntry,
}

/// Changes a hook script may print to stdout. Absent fields are left as-is.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HookOutput {
    pub data: Option<Data>,
    pub dest: Option<PathBuf>,
    pub path: Option<String>,
    pub entries: Option<Vec<Entry>>,
}

impl HookOutput {
    /// Parses the stdout of a hook script; empty output means no changes.
    pub fn parse(stdout: &str) -> Result<Self> {
        let stdout = stdout.trim();
        if stdout.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(stdout)
            .map_err(|e| Error::HookError(format!("invalid hook output: {e}")))
    }

    pub fn apply(self, ctx: &mut Context<'_>) {
        if let Some(data) = self.data {
            *ctx.data = data;
        }
        if let Some(dest) = self.dest {
            ctx.dest = dest;
        }
        if let Some(path) = self.path {
            ctx.dir.path = path;
        }
        if let Some(entries) = self.entries {
            ctx.dir.entries = entries;
        }
    }
}

/// Hook module executed as a child process.
///
/// The script is called with the phase name as its only argument and
/// receives a [`HookInput`] on stdin. Anything it prints to stdout must be a
/// [`HookOutput`]; stderr is passed through to the user.
#[derive(Debug)]
pub struct ScriptHook {
    path: PathBuf,
}

impl ScriptHook {
    fn run(&self, phase: Phase, ctx: &mut Context<'_>) -> Result<()> {
        debug!("Running {} hook '{}'.", phase, self.path.display());

        let input = serde_json::to_vec(&HookInput {
            phase,
            data: &*ctx.data,
            dest: &ctx.dest,
            dir: &*ctx.dir,
        })
        .map_err(|e| Error::HookError(format!("failed to serialize hook input: {e}")))?;

        let mut child = Command::new(&self.path)
            .arg(phase.as_str())
            .env(HOOK_PHASE_ENV, phase.as_str())
            .env(HOOK_DEST_ENV, &ctx.dest)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(Error::IoError)?;

        // Feed stdin from its own thread so a script that prints before it
        // reads cannot fill the stdout pipe while we block on stdin.
        let writer = child.stdin.take().map(|mut stdin| {
            std::thread::spawn(move || match stdin.write_all(&input) {
                Err(e) if e.kind() != std::io::ErrorKind::BrokenPipe => Err(e),
                _ => Ok(()),
            })
        });

        let output = child.wait_with_output().map_err(Error::IoError)?;
        if let Some(writer) = writer {
            writer
                .join()
                .map_err(|_| Error::HookError("hook input writer panicked".to_string()))??;
        }

        if !output.status.success() {
            return Err(Error::HookError(format!(
                "{} hook '{}' failed with status: {}",
                phase,
                self.path.display(),
                output.status
            )));
        }

        HookOutput::parse(&String::from_utf8_lossy(&output.stdout))?.apply(ctx);
        Ok(())
    }
}

impl Hook for ScriptHook {
    fn before(&self, ctx: &mut Context<'_>) -> Result<()> {
        self.run(Phase::Before, ctx)
    }

    fn after(&self, ctx: &mut Context<'_>) -> Result<()> {
        self.run(Phase::After, ctx)
    }
}

/// Asks the user whether the template's hook modules may run.
///
/// # Arguments
/// * `tree` - Parsed template tree
/// * `skip_hooks_check` - Run hooks without asking
///
/// # Returns
/// * `Result<bool>` - Whether hooks should be executed
pub fn confirm_hook_execution(tree: &DirectoryEntry, skip_hooks_check: bool) -> Result<bool> {
    let hooks = tree.hook_modules();
    if hooks.is_empty() {
        return Ok(false);
    }

    debug!("Template contains {} {} module(s).", hooks.len(), HOOK_FILE);
    confirm(
        skip_hooks_check,
        format!(
            "WARNING: This template contains {} hook module(s) that will execute commands on your system. Do you want to run them?",
            hooks.len()
        ),
    )
}
