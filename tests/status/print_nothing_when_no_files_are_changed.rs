use crate::common;
use crate::common::command::{init_repository_dir, run_kommito_command, stdout_of};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

const EMPTY_STATUS: &str = "Staged files:\n  (none)\n\n\
    Modified but unstaged files:\n  (none)\n\n\
    Untracked files:\n  (none)\n";

#[rstest]
fn print_nothing_when_no_files_are_changed(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = stdout_of(&mut run_kommito_command(init_repository_dir.path(), &["status"]));

    assert_eq!(output, EMPTY_STATUS);

    Ok(())
}

#[rstest]
fn missing_index_reads_as_empty(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    std::fs::remove_file(common::metadata_file(dir, "index"))?;

    let output = stdout_of(&mut run_kommito_command(dir, &["status"]));

    assert_eq!(output, EMPTY_STATUS);

    Ok(())
}
