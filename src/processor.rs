//! Generation engine.
//!
//! Walks a parsed template tree depth-first and writes it to a destination.
//! Every directory goes through the same lifecycle: resolve its name, run the
//! before-hook, create the directory and generate its entries in order, then
//! run the after-hook. The first failure aborts the whole traversal; files
//! written up to that point are left in place.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{JsonIndent, Options};
use crate::context::{Context, Data};
use crate::error::{Error, Result};
use crate::hooks::{Hook, HookLoader, ScriptHookLoader};
use crate::materializer::Materializer;
use crate::naming::DirectoryName;
use crate::parser::parse_template;
use crate::renderer::{MiniJinjaRenderer, TemplateRenderer};
use crate::tree::{DirectoryEntry, Entry};

/// Drives the per-directory lifecycle over a template tree.
pub struct Processor<'a> {
    hooks: &'a dyn HookLoader,
    materializer: Materializer<'a>,
}

impl<'a> Processor<'a> {
    pub fn new(
        renderer: &'a dyn TemplateRenderer,
        hooks: &'a dyn HookLoader,
        json_indent: &'a JsonIndent,
    ) -> Self {
        Self { hooks, materializer: Materializer::new(renderer, json_indent) }
    }

    /// Generates `tree` into `dest_root`.
    ///
    /// The root directory's own name is never part of the output; its entries
    /// land directly in `dest_root`. `data` is shared by all hooks and
    /// templates and holds whatever the hooks left in it afterwards.
    ///
    /// Returns the root's final destination, which differs from `dest_root`
    /// when the root before-hook redirected the output.
    ///
    /// # Errors
    /// Returns the first hook, render or filesystem failure in traversal order.
    pub fn generate<P: AsRef<Path>>(
        &self,
        mut tree: DirectoryEntry,
        data: &mut Data,
        dest_root: P,
    ) -> Result<PathBuf> {
        let dest_root = std::path::absolute(dest_root.as_ref())?;
        debug!("Generating into '{}'.", dest_root.display());

        tree.path = String::new();
        let dest = self.process_directory(&mut tree, data, &dest_root)?;
        Ok(dest.unwrap_or(dest_root))
    }

    /// Returns the directory's final destination, `None` when it was skipped.
    fn process_directory(
        &self,
        dir: &mut DirectoryEntry,
        data: &mut Data,
        parent_dest: &Path,
    ) -> Result<Option<PathBuf>> {
        let name = DirectoryName::classify(dir);
        if !name.is_included(data) {
            debug!("Skipping directory '{}'.", dir.path);
            return Ok(None);
        }

        let dest = match name.segment() {
            Some(segment) => parent_dest.join(segment),
            None => parent_dest.to_path_buf(),
        };
        let original_path = dir.path.clone();
        let hook = self.load_hook(dir)?;

        let mut ctx = Context::new(data, dir, dest.clone());

        if let Some(hook) = &hook {
            hook.before(&mut ctx)?;
            ctx.dest = resolve_dest(&ctx, parent_dest, &dest, &original_path);
        }

        if ctx.dir.entries.is_empty() {
            debug!("Directory '{}' has no entries.", ctx.dest.display());
        } else {
            fs::create_dir_all(&ctx.dest)?;

            let dest = ctx.dest.clone();
            for entry in ctx.dir.entries.iter_mut() {
                match entry {
                    Entry::Directory(child) => {
                        self.process_directory(child, ctx.data, &dest)?;
                    }
                    Entry::File(file) => {
                        self.materializer.materialize(file, ctx.data, &dest)?;
                    }
                }
            }
        }

        if let Some(hook) = &hook {
            hook.after(&mut ctx)?;
        }
        Ok(Some(ctx.dest))
    }

    fn load_hook(&self, dir: &DirectoryEntry) -> Result<Option<Box<dyn Hook>>> {
        let Some(path) = &dir.hook else {
            return Ok(None);
        };

        debug!("Loading hook module '{}'.", path.display());
        self.hooks.load(path).map(Some).map_err(|e| Error::HookLoadError {
            path: path.display().to_string(),
            source: Box::new(e),
        })
    }
}

/// Destination of a directory after its before-hook ran.
///
/// An explicit new destination wins over a renamed directory; both are
/// resolved against the parent destination when relative.
fn resolve_dest(
    ctx: &Context<'_>,
    parent_dest: &Path,
    original_dest: &Path,
    original_path: &str,
) -> PathBuf {
    if ctx.dest != original_dest {
        debug!("Hook redirected output to '{}'.", ctx.dest.display());
        parent_dest.join(&ctx.dest)
    } else if ctx.dir.path != original_path {
        debug!("Hook renamed directory '{}' to '{}'.", original_path, ctx.dir.path);
        parent_dest.join(&ctx.dir.path)
    } else {
        ctx.dest.clone()
    }
}

/// Parses `options.template` and generates it with the default collaborators.
///
/// Templates are rendered with [`MiniJinjaRenderer`] and hook modules run
/// through [`ScriptHookLoader`]. Returns the data bag as left by the hooks.
///
/// # Example
/// ```no_run
/// use sprout::config::Options;
/// use sprout::processor::generate;
///
/// let mut data = serde_json::Map::new();
/// data.insert("name".to_string(), "my-app".into());
///
/// generate(Options::new("./template").destination("./my-app").data(data))?;
/// # Ok::<(), sprout::error::Error>(())
/// ```
pub fn generate(options: Options) -> Result<Data> {
    let destination = match options.destination {
        Some(destination) => destination,
        None => std::env::current_dir()?,
    };

    let tree = parse_template(&options.template)?;
    let renderer = MiniJinjaRenderer::new();
    let hooks = ScriptHookLoader;
    let processor = Processor::new(&renderer, &hooks, &options.json_indent);

    let mut data = options.data;
    processor.generate(tree, &mut data, &destination)?;
    Ok(data)
}
