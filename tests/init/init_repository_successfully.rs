use crate::common;
use crate::common::command::{repository_dir, run_kommito_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn init_repository_successfully(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir_absolute_path = repository_dir.path().canonicalize()?.display().to_string();

    run_kommito_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty Kommito repository in .+\n$",
        )?)
        .stdout(predicate::str::contains(dir_absolute_path));

    let dir = repository_dir.path();
    assert!(common::metadata_file(dir, "objects/blobs").is_dir());
    assert!(common::metadata_file(dir, "objects/commits").is_dir());
    assert!(common::metadata_file(dir, "refs/heads").is_dir());
    assert_eq!(common::read_head(dir), "ref: refs/heads/main");
    assert!(common::index_lines(dir).is_empty());

    let config: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(common::metadata_file(dir, "config.json"))?)?;
    assert_eq!(config["name"], "kommito");
    assert_eq!(config["version"], "0.1.0");

    // no branch file exists until one is created
    assert_eq!(std::fs::read_dir(common::metadata_file(dir, "refs/heads"))?.count(), 0);

    Ok(())
}

#[rstest]
fn init_creates_missing_target_directory(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let target = repository_dir.path().join("nested").join("project");

    run_kommito_command(repository_dir.path(), &["init", &target.to_string_lossy()])
        .assert()
        .success();

    assert!(target.join(".kommito").join("HEAD").is_file());

    Ok(())
}
