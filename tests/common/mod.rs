#![allow(dead_code)]

use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use cppinit::cli::{Configuration, Verbosity};
use cppinit::template::TemplateKind;
use tempfile::TempDir;

pub fn scratch_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("cppinit-")
        .tempdir()
        .expect("create scratch dir")
}

pub fn build_config(directory: &str, file_name: &str, template_kind: TemplateKind) -> Configuration {
    Configuration {
        verbosity: Verbosity::Quiet,
        file_name: file_name.into(),
        destination_directory: directory.into(),
        template_kind,
    }
}

/// Runs the binary inside `cwd` with `args`.
pub fn run_in(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cppinit"))
        .current_dir(cwd)
        .args(args)
        .output()
        .expect("spawn cppinit")
}

pub fn run_in_raw(cwd: &Path, args: &[&OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cppinit"))
        .current_dir(cwd)
        .args(args)
        .output()
        .expect("spawn cppinit")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn assert_file_has_template(path: &Path, kind: TemplateKind) {
    let contents = fs::read_to_string(path).expect("read generated file");
    assert_eq!(contents, kind.body(), "unexpected contents in {}", path.display());
}

pub fn dir_is_empty(dir: &Path) -> bool {
    fs::read_dir(dir).expect("read dir").next().is_none()
}
