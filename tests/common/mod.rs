#![allow(dead_code)]

use assert_cmd::Command;
use predicates::prelude::predicate;
use std::path::{Path, PathBuf};

/// Initialize a store in the given directory and assert it succeeded
pub fn init_store(dir: &Path) {
    let mut cmd = Command::cargo_bin("nit").expect("Failed to find nit binary");
    cmd.current_dir(dir).arg("init");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Initialized empty repository in"));
}

/// Run a nit subcommand in the given directory and return its stdout
pub fn run_nit(dir: &Path, args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("nit").expect("Failed to find nit binary");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }

    let output = cmd.output().expect("Failed to run nit");
    assert!(
        output.status.success(),
        "nit {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("non-utf8 nit output")
}

/// Run a nit subcommand and return its trimmed single-line stdout (an oid)
pub fn run_nit_oid(dir: &Path, args: &[&str]) -> String {
    let oid = run_nit(dir, args).trim().to_string();
    assert_eq!(oid.len(), 40, "expected a 40-hex object id, got {oid:?}");
    oid
}

/// Path of the object file backing the given id
pub fn object_path(dir: &Path, oid: &str) -> PathBuf {
    dir.join(".git")
        .join("objects")
        .join(&oid[..2])
        .join(&oid[2..])
}
