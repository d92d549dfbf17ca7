//! End-to-end tests for `run_hook`
//!
//! `run_hook` discovers hooks relative to the current working directory, so
//! every test here changes directory and must run serially.
#![cfg(unix)]

use kiln_engine::{Error, HookName, RenderContext, find_hooks, run_hook};
use serial_test::serial;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Restores the previous working directory when dropped
struct CwdGuard(PathBuf);

impl CwdGuard {
    fn enter(dir: &Path) -> Self {
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir).unwrap();
        Self(previous)
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.0);
    }
}

fn template_with_hook(file_name: &str, content: &str) -> TempDir {
    let template = TempDir::new().unwrap();
    let hooks = template.path().join("hooks");
    fs::create_dir_all(&hooks).unwrap();
    fs::write(hooks.join(file_name), content).unwrap();
    template
}

#[test]
#[serial]
fn test_no_hooks_dir_is_noop() {
    let template = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    let _cwd = CwdGuard::enter(template.path());

    assert!(find_hooks().unwrap().is_empty());
    for hook in HookName::ALL {
        run_hook(hook, project.path(), &RenderContext::new()).unwrap();
    }
}

#[test]
#[serial]
fn test_failing_post_hook_and_absent_pre_hook() {
    let template = template_with_hook("post_gen_project.sh", "exit 7");
    let project = TempDir::new().unwrap();
    let _cwd = CwdGuard::enter(template.path());

    let err = run_hook(HookName::PostGenProject, project.path(), &RenderContext::new())
        .unwrap_err();
    assert!(matches!(err, Error::HookFailed { code: 7 }), "got {err:?}");

    run_hook(HookName::PreGenProject, project.path(), &RenderContext::new()).unwrap();
}

#[test]
#[serial]
fn test_find_hooks_returns_absolute_paths() {
    let template = template_with_hook("pre_gen_project.py", "pass\n");
    let _cwd = CwdGuard::enter(template.path());

    let registry = find_hooks().unwrap();

    assert_eq!(registry.len(), 1);
    let path = registry.get(HookName::PreGenProject).unwrap();
    assert!(path.is_absolute());
    assert!(path.ends_with("hooks/pre_gen_project.py"));
}

#[test]
#[serial]
fn test_hook_sees_rendered_context_and_project_dir() {
    let template = template_with_hook(
        "post_gen_project.sh",
        "echo '{{ cookiecutter.project_slug }}' > slug.txt\n",
    );
    let project = TempDir::new().unwrap();
    let _cwd = CwdGuard::enter(template.path());

    let mut context = RenderContext::new();
    context.insert(
        "cookiecutter".to_string(),
        serde_json::json!({ "project_slug": "hello_world" }),
    );

    run_hook(HookName::PostGenProject, project.path(), &context).unwrap();

    let slug = fs::read_to_string(project.path().join("slug.txt")).unwrap();
    assert_eq!(slug, "hello_world\n");
}

#[test]
#[serial]
fn test_undefined_variable_is_template_error() {
    let template = template_with_hook("pre_gen_project.sh", "echo {{ nope }}\n");
    let project = TempDir::new().unwrap();
    let _cwd = CwdGuard::enter(template.path());

    let err = run_hook(HookName::PreGenProject, project.path(), &RenderContext::new())
        .unwrap_err();

    assert!(matches!(err, Error::Template(_)), "got {err:?}");
}
