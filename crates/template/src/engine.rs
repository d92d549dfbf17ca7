//! Template engine implementation
//!
//! The engine wraps minijinja. Rendering is strict: a script that references a
//! variable missing from the context fails instead of rendering an empty
//! string into a command line.

use crate::{Error, Result};
use kiln_core::RenderContext;
use minijinja::{Environment, UndefinedBehavior};

/// Template engine for rendering hook scripts
pub struct TemplateEngine {
    /// The minijinja environment
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine
    #[must_use]
    pub fn new() -> Self {
        let mut env = Environment::new();

        // Scripts must come out byte-identical when they contain no template
        // syntax, so keep the final newline and leave block whitespace alone.
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        Self { env }
    }

    /// Render a template string with the given context
    ///
    /// # Examples
    ///
    /// ```
    /// use kiln_core::RenderContext;
    /// use kiln_template::TemplateEngine;
    ///
    /// let engine = TemplateEngine::new();
    /// let mut context = RenderContext::new();
    /// context.insert("project_slug".to_string(), serde_json::json!("demo"));
    ///
    /// let result = engine.render_str("cd {{ project_slug }}", &context).unwrap();
    /// assert_eq!(result, "cd demo");
    /// ```
    pub fn render_str(&self, template: &str, context: &RenderContext) -> Result<String> {
        tracing::trace!(len = template.len(), "Rendering template string");
        self.env.render_str(template, context).map_err(Error::from)
    }

    /// Render a template string with a specific name for better error messages
    ///
    /// Error locations mention `name` (typically the hook file name) instead
    /// of the generic `<string>`.
    pub fn render_named_str(
        &self,
        name: &str,
        template: &str,
        context: &RenderContext,
    ) -> Result<String> {
        tracing::trace!(name, len = template.len(), "Rendering named template");
        self.env
            .render_named_str(name, template, context)
            .map_err(Error::from)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl kiln_core::TemplateRenderer for TemplateEngine {
    fn render_str(&self, template: &str, context: &RenderContext) -> kiln_core::Result<String> {
        TemplateEngine::render_str(self, template, context).map_err(Into::into)
    }

    fn render_named_str(
        &self,
        name: &str,
        template: &str,
        context: &RenderContext,
    ) -> kiln_core::Result<String> {
        TemplateEngine::render_named_str(self, name, template, context).map_err(Into::into)
    }
}
