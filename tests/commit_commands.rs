use assert_cmd::Command;
use assert_fs::fixture::{FileWriteStr, PathChild};
use fake::Fake;
use fake::faker::internet::en::FreeEmail;
use fake::faker::name::en::Name;
use predicates::prelude::*;

mod common;

#[test]
fn root_commit_references_tree_and_message() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    common::init_store(dir.path());
    dir.child("file1").write_str("a\n")?;

    let tree_oid = common::run_nit_oid(dir.path(), &["write-tree"]);
    let commit_oid = common::run_nit_oid(
        dir.path(),
        &["commit-tree", &tree_oid, "-m", "Initial commit"],
    );

    let mut sut = Command::cargo_bin("nit")?;
    sut.current_dir(dir.path())
        .arg("cat-file")
        .arg("-p")
        .arg(&commit_oid);

    sut.assert()
        .success()
        .stdout(predicate::str::contains(format!("tree {tree_oid}")))
        .stdout(predicate::str::contains("Initial commit"))
        .stdout(predicate::str::contains("parent").not());

    Ok(())
}

#[test]
fn child_commit_references_parent() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    common::init_store(dir.path());
    dir.child("file1").write_str("a\n")?;

    let first_tree = common::run_nit_oid(dir.path(), &["write-tree"]);
    let first_commit = common::run_nit_oid(
        dir.path(),
        &["commit-tree", &first_tree, "-m", "Initial commit"],
    );

    dir.child("file2").write_str("b\n")?;
    let second_tree = common::run_nit_oid(dir.path(), &["write-tree"]);
    let second_commit = common::run_nit_oid(
        dir.path(),
        &[
            "commit-tree",
            &second_tree,
            "-p",
            &first_commit,
            "-m",
            "Second commit",
        ],
    );

    let mut sut = Command::cargo_bin("nit")?;
    sut.current_dir(dir.path())
        .arg("cat-file")
        .arg("-p")
        .arg(&second_commit);

    sut.assert()
        .success()
        .stdout(predicate::str::contains(format!("tree {second_tree}")))
        .stdout(predicate::str::contains(format!("parent {first_commit}")))
        .stdout(predicate::str::contains("Second commit"));

    Ok(())
}

#[test]
fn author_identity_comes_from_the_environment() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    common::init_store(dir.path());
    dir.child("file1").write_str("a\n")?;

    let tree_oid = common::run_nit_oid(dir.path(), &["write-tree"]);

    let author_name = Name().fake::<String>().replace(" ", "_");
    let author_email = FreeEmail().fake::<String>();

    let mut cmd = Command::cargo_bin("nit")?;
    let output = cmd
        .current_dir(dir.path())
        .env("GIT_AUTHOR_NAME", &author_name)
        .env("GIT_AUTHOR_EMAIL", &author_email)
        .arg("commit-tree")
        .arg(&tree_oid)
        .arg("-m")
        .arg("Authored commit")
        .output()?;
    assert!(output.status.success());
    let commit_oid = String::from_utf8(output.stdout)?.trim().to_string();

    let mut sut = Command::cargo_bin("nit")?;
    sut.current_dir(dir.path())
        .arg("cat-file")
        .arg("-p")
        .arg(&commit_oid);

    sut.assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "author {author_name} <{author_email}>"
        )));

    Ok(())
}

#[test]
fn verify_flag_rejects_dangling_tree_reference() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    common::init_store(dir.path());

    let mut sut = Command::cargo_bin("nit")?;
    sut.current_dir(dir.path())
        .arg("commit-tree")
        .arg("ce013625030ba8dba906f756967f9e9ca3946491")
        .arg("-m")
        .arg("Dangling commit")
        .arg("--verify");

    sut.assert()
        .failure()
        .stderr(predicate::str::contains("dangling reference"));

    Ok(())
}
