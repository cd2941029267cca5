//! Loading of the initial template data.
//! Data can come from a JSON or YAML file, from stdin, and from `KEY=VALUE`
//! pairs on the command line; later sources override earlier ones.

use log::debug;
use std::io::Read;
use std::path::Path;

use crate::context::Data;
use crate::error::{Error, Result};

/// Converts a parsed document into a data bag; `null` counts as empty.
fn into_data(value: serde_json::Value, origin: &str) -> Result<Data> {
    match value {
        serde_json::Value::Object(map) => Ok(map),
        serde_json::Value::Null => Ok(Data::new()),
        other => Err(Error::ConfigError(format!(
            "{origin} must contain an object, found: {other}"
        ))),
    }
}

/// Parses JSON text into a data bag. Empty input yields an empty bag.
pub fn parse_data(content: &str) -> Result<Data> {
    let content = content.trim();
    if content.is_empty() {
        return Ok(Data::new());
    }
    let value = serde_json::from_str(content)
        .map_err(|e| Error::ConfigError(format!("Failed to parse data as JSON: {e}")))?;
    into_data(value, "data")
}

/// Reads a data file. `.yml` and `.yaml` files are parsed as YAML,
/// everything else as JSON.
pub fn load_data_file<P: AsRef<Path>>(path: P) -> Result<Data> {
    let path = path.as_ref();
    debug!("Loading data from '{}'.", path.display());
    let content = std::fs::read_to_string(path)?;

    let is_yaml = matches!(path.extension().and_then(|e| e.to_str()), Some("yml" | "yaml"));
    if !is_yaml {
        return parse_data(&content);
    }

    let value: serde_json::Value = serde_yaml::from_str(&content).map_err(|e| {
        Error::ConfigError(format!("Failed to parse '{}' as YAML: {e}", path.display()))
    })?;
    into_data(value, &format!("'{}'", path.display()))
}

pub fn load_from_stdin() -> Result<Data> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    parse_data(&buffer)
}

/// Parses a `KEY=VALUE` pair. The value is read as JSON when possible
/// (`flag=true`, `port=8080`, `tags=["a"]`) and kept as a string otherwise.
pub fn parse_data_pair(pair: &str) -> Result<(String, serde_json::Value)> {
    let (key, value) = pair.split_once('=').ok_or_else(|| {
        Error::ConfigError(format!("invalid data '{pair}', expected KEY=VALUE"))
    })?;
    let key = key.trim();
    if key.is_empty() {
        return Err(Error::ConfigError(format!("invalid data '{pair}', key is empty")));
    }

    let value = serde_json::from_str(value)
        .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

/// Builds the initial data bag from all configured sources.
///
/// # Arguments
/// * `data_file` - Optional JSON/YAML file
/// * `take_from_stdin` - Read a JSON object from stdin
/// * `pairs` - `KEY=VALUE` overrides, applied last
pub fn get_data<P: AsRef<Path>>(
    data_file: Option<P>,
    take_from_stdin: bool,
    pairs: &[String],
) -> Result<Data> {
    let mut data = match data_file {
        Some(path) => load_data_file(path)?,
        None => Data::new(),
    };

    if take_from_stdin {
        data.extend(load_from_stdin()?);
    }

    for pair in pairs {
        let (key, value) = parse_data_pair(pair)?;
        data.insert(key, value);
    }

    Ok(data)
}
