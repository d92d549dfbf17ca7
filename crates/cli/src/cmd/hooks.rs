//! Hook management commands
//!
//! `kiln hooks list` shows which lifecycle hooks a template defines;
//! `kiln hooks run` executes one of them against a project directory.

use anyhow::{Context, Result};
use clap::Args;
use kiln_config::{Config, InterpreterConfig};
use kiln_engine::HookName;
use kiln_engine::hooks::{HookLocator, HookRunner, Interpreters};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

/// List the hooks found in `template`
pub fn run_list(template: &Path) -> Result<()> {
    let locator = HookLocator::new(template);

    if !locator.exists() {
        println!("{}", "No hooks directory found.".yellow());
        println!(
            "Create {} with scripts named after a hook, for example:",
            locator.hooks_dir().display().cyan()
        );
        println!(
            "{}",
            r"
hooks/
  pre_gen_project.py     # runs before the project is generated
  post_gen_project.sh    # runs inside the generated project
"
            .dimmed()
        );
        return Ok(());
    }

    let registry = locator.locate().context("Failed to discover hooks")?;

    println!("Hooks directory: {}", locator.hooks_dir().display().cyan());
    for name in HookName::ALL {
        match registry.get(name) {
            Some(path) => println!("  {} {}", name.green(), path.display()),
            None => println!("  {} {}", name.dimmed(), "-".dimmed()),
        }
    }

    Ok(())
}

/// Run a single template hook
#[derive(Debug, Args)]
pub struct RunCommand {
    /// Hook to run (pre_gen_project, post_gen_project)
    #[arg(value_name = "HOOK")]
    pub hook: HookName,

    /// Template root containing the `hooks/` directory
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    pub template: PathBuf,

    /// Directory the hook runs in (the generated project)
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    pub project_dir: PathBuf,

    /// JSON file holding an object of template variables
    #[arg(short, long, value_name = "FILE")]
    pub context: Option<PathBuf>,

    /// Set a template variable (repeatable)
    #[arg(long = "var", value_name = "KEY=VALUE")]
    pub vars: Vec<String>,

    /// Run the script as-is instead of rendering it first
    #[arg(long)]
    pub no_render: bool,
}

impl RunCommand {
    /// Execute the hook described by this command
    pub fn execute(&self, config: &Config) -> Result<()> {
        // Resolve user paths before leaving the invocation directory
        let project_dir = std::path::absolute(&self.project_dir).with_context(|| {
            format!("Invalid project directory: {}", self.project_dir.display())
        })?;
        let context_file = self
            .context
            .as_deref()
            .map(std::path::absolute)
            .transpose()
            .context("Invalid context file path")?;

        let context = crate::context::load_context(context_file.as_deref(), &self.vars)?;

        // Hook discovery is relative to the template root
        std::env::set_current_dir(&self.template).with_context(|| {
            format!("Cannot enter template directory {}", self.template.display())
        })?;
        let template_dir = std::env::current_dir()?;

        let render = config.hooks.render && !self.no_render;
        tracing::debug!(
            hook = %self.hook,
            template = %template_dir.display(),
            project = %project_dir.display(),
            render,
            "Running hook"
        );

        let runner = HookRunner::builder(&template_dir)
            .interpreters(interpreters(&config.interpreters))
            .render(render)
            .build();

        runner
            .run(self.hook, &project_dir, &context)
            .with_context(|| format!("Hook '{}' failed", self.hook))
    }
}

/// Apply configured interpreter overrides to the built-in table
fn interpreters(config: &InterpreterConfig) -> Interpreters {
    let mut interpreters = Interpreters::default();
    if let Some(python) = &config.python {
        interpreters.python.clone_from(python);
    }
    if let Some(shell) = &config.shell {
        interpreters.shell.clone_from(shell);
    }
    if let Some(bash) = &config.bash {
        interpreters.bash.clone_from(bash);
    }
    interpreters
}
