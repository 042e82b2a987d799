use crate::common;
use crate::common::command::{committed_repository_dir, kommito_commit, stage_content, run_kommito_command};
use crate::common::file::read_file;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_commit_hash_keeps_head(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    let first = common::read_head(dir);
    stage_content(dir, "b.txt", "b");
    kommito_commit(dir, "second").assert().success();
    let second = common::read_head(dir);
    std::fs::write(dir.join("b.txt"), "dirty")?;

    run_kommito_command(dir, &["checkout", &first])
        .assert()
        .success();

    assert_eq!(common::read_head(dir), second);
    assert_eq!(read_file(&dir.join("b.txt")), "b");

    Ok(())
}
