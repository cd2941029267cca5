//! Template rendering for Sprout.
//! Template files are rendered with MiniJinja against the shared data bag.
use crate::context::Data;
use crate::error::{Error, Result};
use crate::utils::to_valid_package_name;
use cruet::Inflector;
use minijinja::Environment;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given data.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `data` - Template data for variable interpolation
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, data: &Data) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new renderer with Sprout's filters registered.
    ///
    /// Besides the MiniJinja builtins the environment provides
    /// `package_name`, `kebab_case`, `snake_case`, `camel_case` and
    /// `pascal_case` filters.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.add_filter("package_name", |value: String| to_valid_package_name(&value));
        env.add_filter("kebab_case", |value: String| value.to_kebab_case());
        env.add_filter("snake_case", |value: String| value.to_snake_case());
        env.add_filter("camel_case", |value: String| value.to_camel_case());
        env.add_filter("pascal_case", |value: String| value.to_pascal_case());
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if the template has a syntax error or
    ///   fails while rendering
    fn render(&self, template: &str, data: &Data) -> Result<String> {
        self.env.render_str(template, data).map_err(Error::MinijinjaError)
    }
}
