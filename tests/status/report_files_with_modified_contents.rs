use crate::common::command::{init_repository_dir, run_kommito_command, stage_content, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_files_with_modified_contents(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    stage_content(dir, "a.txt", "hello");
    write_file(FileSpec::new(dir.join("a.txt"), "hello, world".to_string()));

    let output = stdout_of(&mut run_kommito_command(dir, &["status"]));

    assert_eq!(
        output,
        "Staged files:\n  (none)\n\n\
         Modified but unstaged files:\n  modified:   a.txt\n\n\
         Untracked files:\n  (none)\n"
    );

    Ok(())
}

#[rstest]
fn report_deleted_files_as_staged(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    stage_content(dir, "a.txt", "hello");
    std::fs::remove_file(dir.join("a.txt"))?;

    let output = stdout_of(&mut run_kommito_command(dir, &["status"]));

    assert!(output.starts_with("Staged files:\n  staged:     a.txt\n"));

    Ok(())
}
