use assert_cmd::Command;
use predicates::prelude::predicate;
use std::fs;

mod common;

#[test]
fn new_store_initiated_with_skeleton() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let dir_absolute_path = dir.path().canonicalize()?.display().to_string();
    let mut sut = Command::cargo_bin("nit")?;

    sut.arg("init").arg(dir.path());

    sut.assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty repository in .+\n$",
        )?)
        .stdout(predicate::str::contains(dir_absolute_path));

    assert!(dir.path().join(".git/objects").is_dir());
    assert!(dir.path().join(".git/refs/heads").is_dir());
    assert_eq!(
        fs::read_to_string(dir.path().join(".git/HEAD"))?,
        "ref: refs/heads/main\n"
    );

    Ok(())
}

#[test]
fn reinit_fails_when_skeleton_already_exists() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    common::init_store(dir.path());

    let mut sut = Command::cargo_bin("nit")?;
    sut.arg("init").arg(dir.path());

    sut.assert()
        .failure()
        .stderr(predicate::str::contains("already initialized repository"));

    Ok(())
}
