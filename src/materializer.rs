//! Writing single template files to the destination.

use log::{debug, info};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::JsonIndent;
use crate::constants::JSON_SUFFIX;
use crate::context::Data;
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use crate::tree::FileEntry;

/// Writes [`FileEntry`]s, rendering templates and formatting JSON output.
pub struct Materializer<'a> {
    renderer: &'a dyn TemplateRenderer,
    json_indent: &'a JsonIndent,
}

impl<'a> Materializer<'a> {
    pub fn new(renderer: &'a dyn TemplateRenderer, json_indent: &'a JsonIndent) -> Self {
        Self { renderer, json_indent }
    }

    /// Writes one file into `dest_dir` and returns the path written.
    ///
    /// Template entries are rendered with `data`; rendered `.json` files are
    /// re-serialized with the configured indent. Other entries are copied
    /// byte for byte. An existing file at the destination is overwritten.
    ///
    /// # Errors
    /// * `Error::RenderError` if the renderer rejects the template
    /// * `Error::StructuredOutputError` if a rendered `.json` file is not valid JSON
    /// * `Error::IoError` if the file cannot be written
    pub fn materialize(&self, file: &FileEntry, data: &Data, dest_dir: &Path) -> Result<PathBuf> {
        let target = dest_dir.join(&file.path);

        if file.is_template {
            let content = self.render(file, data)?;
            let content = if file.path.ends_with(JSON_SUFFIX) {
                format_json(&content, self.json_indent).map_err(|e| {
                    Error::StructuredOutputError { path: target.display().to_string(), source: e }
                })?
            } else {
                content
            };
            info!("Writing file: '{}'", target.display());
            write_file(&target, content.as_bytes(), file.source.as_deref())?;
        } else {
            info!("Copying file: '{}'", target.display());
            write_file(&target, &file.content, file.source.as_deref())?;
        }

        Ok(target)
    }

    fn render(&self, file: &FileEntry, data: &Data) -> Result<String> {
        let template_name = || {
            file.source
                .as_ref()
                .map(|source| source.display().to_string())
                .unwrap_or_else(|| file.path.clone())
        };

        let template = file.text().ok_or_else(|| Error::RenderError {
            template: template_name(),
            source: Box::new(Error::TemplateError("template is not valid UTF-8".to_string())),
        })?;

        self.renderer.render(template, data).map_err(|e| Error::RenderError {
            template: template_name(),
            source: Box::new(e),
        })
    }
}

/// Parses `text` as JSON and serializes it again with `indent`.
///
/// Object keys keep their order. An empty indent yields compact output, and
/// formatting already formatted output returns it unchanged.
pub fn format_json(text: &str, indent: &JsonIndent) -> serde_json::Result<String> {
    let mut value: serde_json::Value = serde_json::from_str(text)?;
    integral_floats_as_integers(&mut value);
    if indent.as_str().is_empty() {
        return serde_json::to_string(&value);
    }

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_str().as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Rewrites floats without a fractional part (`1.0`, `1e2`) as integers.
fn integral_floats_as_integers(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Number(number) if number.is_f64() => {
            if let Some(float) = number.as_f64() {
                if float.fract() == 0.0 && float.abs() < i64::MAX as f64 {
                    *number = (float as i64).into();
                }
            }
        }
        serde_json::Value::Array(items) => items.iter_mut().for_each(integral_floats_as_integers),
        serde_json::Value::Object(map) => map.values_mut().for_each(integral_floats_as_integers),
        _ => {}
    }
}

/// Writes `content` next to `target` and renames it into place, so a failed
/// write never leaves a truncated file behind.
fn write_file(target: &Path, content: &[u8], source: Option<&Path>) -> Result<()> {
    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut builder = tempfile::Builder::new();
    builder.prefix(".sprout-");
    if let Some(permissions) = file_permissions(source) {
        builder.permissions(permissions);
    }

    let mut temp = builder.tempfile_in(parent)?;
    temp.write_all(content)?;
    temp.persist(target).map_err(|e| Error::IoError(e.error))?;
    debug!("Persisted '{}'.", target.display());
    Ok(())
}

fn file_permissions(source: Option<&Path>) -> Option<fs::Permissions> {
    match source.and_then(|source| fs::metadata(source).ok()) {
        Some(metadata) => Some(metadata.permissions()),
        None => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o666))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}
