use crate::common::command::{committed_repository_dir, kommito_commit, run_kommito_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn merge_into_itself_fails(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    run_kommito_command(dir, &["branch", "create", "main"])
        .assert()
        .success();

    run_kommito_command(dir, &["merge", "main"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "cannot merge branch 'main' into itself",
        ));

    Ok(())
}

#[rstest]
fn merge_when_not_on_any_branch_fails(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    run_kommito_command(dir, &["branch", "create", "feature"])
        .assert()
        .success();
    kommito_commit(dir, "second").assert().success();

    run_kommito_command(dir, &["merge", "feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not on any branch"));

    Ok(())
}

#[rstest]
fn merge_missing_branch_fails(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    run_kommito_command(dir, &["branch", "create", "main"])
        .assert()
        .success();

    run_kommito_command(dir, &["merge", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("branch 'ghost' does not exist"));

    Ok(())
}
