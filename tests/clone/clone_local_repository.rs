use crate::common;
use crate::common::command::{committed_repository_dir, repository_dir, run_kommito_command, stdout_of};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn clone_local_repository(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = committed_repository_dir.path();
    write_file(FileSpec::new(source.join("untracked.txt"), "local only".to_string()));
    let parent = TempDir::new()?;
    let destination = parent.path().join("copy");

    let output = stdout_of(&mut run_kommito_command(
        parent.path(),
        &[
            "clone",
            &source.to_string_lossy(),
            &destination.to_string_lossy(),
        ],
    ));

    assert!(output.starts_with("Cloned "));
    assert_eq!(common::read_head(&destination), common::read_head(source));
    assert_eq!(common::index_lines(&destination), common::index_lines(source));
    assert_eq!(read_file(&destination.join("a.txt")), "hello");
    assert!(!destination.join("untracked.txt").exists());

    run_kommito_command(&destination, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("    first"));

    Ok(())
}

#[rstest]
fn clone_from_non_repository_fails(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = repository_dir.path().join("plain");
    std::fs::create_dir_all(&source)?;
    let destination = repository_dir.path().join("copy");

    run_kommito_command(
        repository_dir.path(),
        &[
            "clone",
            &source.to_string_lossy(),
            &destination.to_string_lossy(),
        ],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("not a valid Kommito repository"));

    assert!(!destination.join(".kommito").exists());

    Ok(())
}

#[rstest]
fn clone_fails_when_a_tracked_file_is_missing(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = committed_repository_dir.path();
    std::fs::remove_file(source.join("a.txt"))?;
    let destination = TempDir::new()?;

    run_kommito_command(
        destination.path(),
        &["clone", &source.to_string_lossy(), "copy"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("a.txt"));

    Ok(())
}

#[rstest]
fn clone_into_the_source_repository_fails(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    let head = common::read_head(dir);
    let index = common::index_lines(dir);

    run_kommito_command(dir, &["clone", ".", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("into itself"));

    assert_eq!(common::read_head(dir), head);
    assert_eq!(common::index_lines(dir), index);
    assert_eq!(read_file(&dir.join("a.txt")), "hello");

    Ok(())
}

#[rstest]
fn clone_into_a_directory_inside_the_source_fails(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();

    run_kommito_command(dir, &["clone", ".", "nested/copy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("into itself"));

    assert!(!dir.join("nested/copy/.kommito").exists());

    Ok(())
}
