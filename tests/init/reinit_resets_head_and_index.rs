use crate::common;
use crate::common::command::{committed_repository_dir, run_kommito_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn reinit_resets_head_and_index(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    let commits_before = std::fs::read_dir(common::metadata_file(dir, "objects/commits"))?.count();

    run_kommito_command(dir, &["init"]).assert().success();

    assert_eq!(common::read_head(dir), "ref: refs/heads/main");
    assert!(common::index_lines(dir).is_empty());
    // objects are never deleted
    assert_eq!(
        std::fs::read_dir(common::metadata_file(dir, "objects/commits"))?.count(),
        commits_before
    );

    Ok(())
}
