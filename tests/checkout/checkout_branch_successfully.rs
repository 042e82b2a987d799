use crate::common;
use crate::common::command::{committed_repository_dir, kommito_commit, run_kommito_command};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_branch_successfully(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    let first = common::read_head(dir);
    run_kommito_command(dir, &["branch", "create", "main"])
        .assert()
        .success();
    kommito_commit(dir, "second").assert().success();

    write_file(FileSpec::new(dir.join("a.txt"), "edited".to_string()));
    write_file(FileSpec::new(dir.join("scratch.txt"), "scratch".to_string()));
    write_file(FileSpec::new(dir.join("notes").join("keep.txt"), "keep".to_string()));

    run_kommito_command(dir, &["checkout", "main"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Checked out main\n"));

    assert_eq!(read_file(&dir.join("a.txt")), "hello");
    assert!(!dir.join("scratch.txt").exists());
    // only top-level files are pruned
    assert_eq!(read_file(&dir.join("notes").join("keep.txt")), "keep");
    assert_eq!(common::read_head(dir), first);

    Ok(())
}

#[rstest]
fn checkout_restores_from_the_index_not_the_commit(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    run_kommito_command(dir, &["branch", "create", "main"])
        .assert()
        .success();
    // staged after the commit the branch points at
    write_file(FileSpec::new(dir.join("later.txt"), "later".to_string()));
    run_kommito_command(dir, &["add", "later.txt"])
        .assert()
        .success();
    std::fs::remove_file(dir.join("later.txt"))?;

    run_kommito_command(dir, &["checkout", "main"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.join("later.txt")), "later");

    Ok(())
}

#[rstest]
fn checkout_restores_nested_index_paths(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    write_file(FileSpec::new(dir.join("src").join("lib.rs"), "pub fn f() {}".to_string()));
    run_kommito_command(dir, &["add", "src/lib.rs"])
        .assert()
        .success();
    kommito_commit(dir, "nested").assert().success();
    run_kommito_command(dir, &["branch", "create", "main"])
        .assert()
        .success();
    std::fs::remove_dir_all(dir.join("src"))?;

    run_kommito_command(dir, &["checkout", "main"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.join("src").join("lib.rs")), "pub fn f() {}");

    Ok(())
}
