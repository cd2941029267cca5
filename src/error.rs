//! Error handling for the Sprout application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for Sprout operations.
///
/// This enum represents all possible errors that can occur while a template
/// is parsed, its hooks run and its files are written. Every generation failure
/// is fatal: the first error aborts the traversal and is returned to the caller.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// The hook module exists in the template tree but could not be loaded
    #[error("Failed to load hook module '{path}': {source}")]
    HookLoadError {
        path: String,
        #[source]
        source: Box<Error>,
    },

    /// Represents errors raised while a hook script runs
    #[error("Hook execution error: {0}")]
    HookError(String),

    /// The renderer rejected a template file
    #[error("Failed to render template '{template}': {source}")]
    RenderError {
        template: String,
        #[source]
        source: Box<Error>,
    },

    /// The template rendered, but the output is not valid JSON
    #[error("Rendered file '{path}' is not valid JSON: {source}")]
    StructuredOutputError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("MiniJinja error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors that occur during template processing
    #[error("Template error: {0}")]
    TemplateError(String),

    #[error("Template directory '{template_dir}' does not exist")]
    TemplateDoesNotExistsError { template_dir: String },

    /// Represents errors that occur while reading the template data
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Git error: {0}")]
    Git2Error(#[from] git2::Error),
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
