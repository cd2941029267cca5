//! Sprout is a project scaffolding engine.
//! It reproduces a template directory at a destination, rendering template
//! files with user data and running per-directory lifecycle hooks that may
//! reshape the generation plan before anything is written.

/// Command-line interface module for the Sprout application
pub mod cli;

/// Invocation options (`Options`, `JsonIndent`)
pub mod config;

/// Naming conventions: hook file name, template suffix, directory sigils
pub mod constants;

/// Generation state passed to hooks
pub mod context;

/// Loading of template data from files, stdin and command-line pairs
pub mod data;

/// Error types and handling for the Sprout application
pub mod error;

/// Git repository initialization of generated projects
pub mod git;

/// Per-directory lifecycle hooks and hook module loading
pub mod hooks;

/// Template source resolution (local directory or git repository)
pub mod loader;

/// Logger setup for the binary
pub mod logger;

/// Writing single files, with template rendering and JSON formatting
pub mod materializer;

/// Escaping, template suffix and directory sigil resolution
pub mod naming;

/// Template tree parsing
pub mod parser;

/// Core generation engine
/// Walks the template tree and drives the hook lifecycle
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Template rendering with MiniJinja
pub mod renderer;

/// In-memory template tree
pub mod tree;

/// Helpers exposed as template filters
pub mod utils;
