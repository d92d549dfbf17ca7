//! Integration tests for `kiln hooks` commands
//!
//! `hooks run` changes the working directory, so these tests run serially
//! and restore it afterwards.
#![cfg(unix)]

use kiln::cmd::hooks::{RunCommand, run_list};
use kiln_config::Config;
use kiln_engine::HookName;
use serial_test::serial;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct CwdGuard(PathBuf);

impl CwdGuard {
    fn save() -> Self {
        Self(std::env::current_dir().unwrap())
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.0);
    }
}

fn template(hooks: &[(&str, &str)]) -> TempDir {
    let template = TempDir::new().unwrap();
    let dir = template.path().join("hooks");
    fs::create_dir_all(&dir).unwrap();
    for (name, content) in hooks {
        fs::write(dir.join(name), content).unwrap();
    }
    template
}

fn run_command(hook: HookName, template: &Path, project: &Path) -> RunCommand {
    RunCommand {
        hook,
        template: template.to_path_buf(),
        project_dir: project.to_path_buf(),
        context: None,
        vars: Vec::new(),
        no_render: false,
    }
}

#[test]
#[serial]
fn test_list_without_hooks_dir() {
    let temp = TempDir::new().unwrap();

    run_list(temp.path()).unwrap();
}

#[test]
#[serial]
fn test_list_with_hooks() {
    let template = template(&[("pre_gen_project.py", "pass\n")]);

    run_list(template.path()).unwrap();
}

#[test]
#[serial]
fn test_run_renders_vars_into_project() {
    let _cwd = CwdGuard::save();
    let template = template(&[("post_gen_project.sh", "echo {{ name }} > name.txt\n")]);
    let project = TempDir::new().unwrap();

    let mut command = run_command(HookName::PostGenProject, template.path(), project.path());
    command.vars = vec!["name=demo".to_string()];
    command.execute(&Config::default()).unwrap();

    assert_eq!(
        fs::read_to_string(project.path().join("name.txt")).unwrap(),
        "demo\n"
    );
}

#[test]
#[serial]
fn test_run_reports_exit_status() {
    let _cwd = CwdGuard::save();
    let template = template(&[("post_gen_project.sh", "exit 7\n")]);
    let project = TempDir::new().unwrap();

    let err = run_command(HookName::PostGenProject, template.path(), project.path())
        .execute(&Config::default())
        .unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("post_gen_project"), "{message}");
    assert!(message.contains("exit status: 7"), "{message}");
}

#[test]
#[serial]
fn test_run_absent_hook_is_noop() {
    let _cwd = CwdGuard::save();
    let template = template(&[("post_gen_project.sh", "exit 7\n")]);
    let project = TempDir::new().unwrap();

    run_command(HookName::PreGenProject, template.path(), project.path())
        .execute(&Config::default())
        .unwrap();
}

#[test]
#[serial]
fn test_run_respects_render_config() {
    let _cwd = CwdGuard::save();
    let template = template(&[("post_gen_project.sh", "echo '{{ name }}' > raw.txt\n")]);
    let project = TempDir::new().unwrap();
    let config = Config::from_toml_str("[hooks]\nrender = false\n").unwrap();

    run_command(HookName::PostGenProject, template.path(), project.path())
        .execute(&config)
        .unwrap();

    assert_eq!(
        fs::read_to_string(project.path().join("raw.txt")).unwrap(),
        "{{ name }}\n"
    );
}
