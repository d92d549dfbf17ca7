//! Hook orchestration
//!
//! Ties discovery, rendering and execution together: look the hook up, render
//! it against the project context into a temporary script, run that script in
//! the project directory. A template without the hook is a successful no-op.

use super::executor::ScriptExecutor;
use super::locator::HookLocator;
use super::name::HookName;
use super::script::Interpreters;
use kiln_core::{Error, RenderContext, Result, TemplateRenderer};
use kiln_template::TemplateEngine;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Runs template hooks for one scaffolding operation
///
/// # Examples
///
/// ```ignore
/// let runner = HookRunner::builder(template_dir)
///     .interpreters(interpreters)
///     .build();
///
/// runner.run(HookName::PreGenProject, project_dir, &context)?;
/// // ... generate the project ...
/// runner.run(HookName::PostGenProject, project_dir, &context)?;
/// ```
pub struct HookRunner<R = TemplateEngine>
where
    R: TemplateRenderer,
{
    locator: HookLocator,
    executor: ScriptExecutor,
    renderer: R,
    render: bool,
}

impl HookRunner<TemplateEngine> {
    /// Create a runner for the template rooted at `template_dir`
    #[must_use]
    pub fn new(template_dir: &Path) -> Self {
        Self::builder(template_dir).build()
    }

    /// Create a builder for configuring a `HookRunner`
    #[must_use]
    pub fn builder(template_dir: &Path) -> HookRunnerBuilder<TemplateEngine> {
        HookRunnerBuilder::new(template_dir)
    }
}

impl<R> HookRunner<R>
where
    R: TemplateRenderer,
{
    /// Locator used to find hook scripts
    #[must_use]
    pub fn locator(&self) -> &HookLocator {
        &self.locator
    }

    /// Find and run `hook` with `project_dir` as its working directory
    ///
    /// Scripts are rendered against `context` first unless rendering was
    /// disabled on the builder.
    ///
    /// # Errors
    ///
    /// Discovery, rendering and execution failures are returned unchanged.
    #[tracing::instrument(skip(self, context), fields(hook = %hook, project_dir = %project_dir.display()))]
    pub fn run(&self, hook: HookName, project_dir: &Path, context: &RenderContext) -> Result<()> {
        let registry = self.locator.locate()?;
        let Some(script) = registry.get(hook) else {
            tracing::debug!("No hooks found");
            return Ok(());
        };

        if self.render {
            self.run_script_with_context(script, project_dir, context)
        } else {
            self.executor.execute(script, project_dir)
        }
    }

    /// Render `script_path` against `context` and execute the result
    ///
    /// The rendered script goes to a uniquely named temporary file with the
    /// original extension, so interpreter dispatch sees the same script kind.
    /// The file is removed once the process has exited.
    pub fn run_script_with_context(
        &self,
        script_path: &Path,
        project_dir: &Path,
        context: &RenderContext,
    ) -> Result<()> {
        let contents = fs::read_to_string(script_path).map_err(|source| Error::HookLaunch {
            path: script_path.to_path_buf(),
            source,
        })?;

        let name = script_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("hook");
        tracing::debug!("Rendering hook script: {}", script_path.display());
        let rendered = self.renderer.render_named_str(name, &contents, context)?;

        let suffix = script_path
            .extension()
            .and_then(|e| e.to_str())
            .map(|ext| format!(".{ext}"))
            .unwrap_or_default();
        let stem = script_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("hook");

        let mut temp_file = tempfile::Builder::new()
            .prefix(&format!("{stem}-"))
            .suffix(&suffix)
            .tempfile()?;
        temp_file.write_all(rendered.as_bytes())?;

        // Close the handle before spawning; executing a file that is still
        // open for writing fails with ETXTBSY.
        let temp_path = temp_file.into_temp_path();
        tracing::debug!("Executing rendered script: {}", temp_path.display());

        let result = self.executor.execute(&temp_path, project_dir);

        if let Err(e) = temp_path.close() {
            tracing::debug!("Failed to remove rendered script: {}", e);
        }

        result
    }
}

/// Builder for creating a `HookRunner` with custom configuration
pub struct HookRunnerBuilder<R = TemplateEngine>
where
    R: TemplateRenderer,
{
    locator: HookLocator,
    executor: ScriptExecutor,
    renderer: R,
    render: bool,
}

impl HookRunnerBuilder<TemplateEngine> {
    /// Create a new builder for the template rooted at `template_dir`
    ///
    /// This is typically called via [`HookRunner::builder`].
    #[must_use]
    pub fn new(template_dir: &Path) -> Self {
        Self {
            locator: HookLocator::new(template_dir),
            executor: ScriptExecutor::new(),
            renderer: TemplateEngine::new(),
            render: true,
        }
    }
}

impl<R> HookRunnerBuilder<R>
where
    R: TemplateRenderer,
{
    /// Use a different template renderer
    #[must_use]
    pub fn template_renderer<T>(self, renderer: T) -> HookRunnerBuilder<T>
    where
        T: TemplateRenderer,
    {
        HookRunnerBuilder {
            locator: self.locator,
            executor: self.executor,
            renderer,
            render: self.render,
        }
    }

    /// Use a custom interpreter table
    #[must_use]
    pub fn interpreters(mut self, interpreters: Interpreters) -> Self {
        self.executor = ScriptExecutor::with_interpreters(interpreters);
        self
    }

    /// Enable or disable rendering scripts before execution (default: enabled)
    #[must_use]
    pub fn render(mut self, render: bool) -> Self {
        self.render = render;
        self
    }

    /// Build the `HookRunner`
    #[must_use]
    pub fn build(self) -> HookRunner<R> {
        HookRunner {
            locator: self.locator,
            executor: self.executor,
            renderer: self.renderer,
            render: self.render,
        }
    }
}

/// Find and run `hook` for the template in the current working directory
///
/// The caller must already have changed into the template root. The script is
/// rendered against `context` and executed in `project_dir`.
///
/// # Errors
///
/// Discovery, rendering and execution failures are returned unchanged.
pub fn run_hook(hook: HookName, project_dir: &Path, context: &RenderContext) -> Result<()> {
    let cwd = std::env::current_dir()?;
    HookRunner::new(&cwd).run(hook, project_dir, context)
}
