//! Behavioral traits shared between kiln crates
//!
//! The hook engine renders scripts through [`TemplateRenderer`] so it does not
//! depend on a concrete template engine.

use crate::Result;
use indexmap::IndexMap;

/// Scaffolding variables for the current project instantiation
///
/// Keys become top-level template variables. The hook engine only ever reads it.
pub type RenderContext = IndexMap<String, serde_json::Value>;

/// Template renderer interface
///
/// # Examples
///
/// ```ignore
/// use kiln_core::{RenderContext, TemplateRenderer};
///
/// fn greet(renderer: &dyn TemplateRenderer) -> kiln_core::Result<String> {
///     let mut context = RenderContext::new();
///     context.insert("name".to_string(), serde_json::json!("Alice"));
///     renderer.render_str("Hello {{ name }}!", &context)
/// }
/// ```
pub trait TemplateRenderer {
    /// Render a template string with the given context
    fn render_str(&self, template: &str, context: &RenderContext) -> Result<String>;

    /// Render a template string with a specific name for better error messages
    ///
    /// # Arguments
    ///
    /// * `name` - Template name to use in error messages (e.g., file name)
    /// * `template` - The template source code
    /// * `context` - Context variables
    fn render_named_str(
        &self,
        name: &str,
        template: &str,
        context: &RenderContext,
    ) -> Result<String>;
}

/// Renderer that returns scripts unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpRenderer;

impl TemplateRenderer for NoOpRenderer {
    fn render_str(&self, template: &str, _context: &RenderContext) -> Result<String> {
        Ok(template.to_string())
    }

    fn render_named_str(
        &self,
        _name: &str,
        template: &str,
        _context: &RenderContext,
    ) -> Result<String> {
        Ok(template.to_string())
    }
}
