use crate::common;
use crate::common::command::{init_repository_dir, run_kommito_command, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn staging_a_dot_relative_path_uses_the_plain_name(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "hello".to_string()));

    let output = stdout_of(&mut run_kommito_command(dir, &["add", "./a.txt"]));

    assert_eq!(output, "Added a.txt\n");
    assert_eq!(
        common::index_lines(dir),
        vec![format!("{} a.txt", common::sha1_hex(b"hello"))]
    );

    let status = stdout_of(&mut run_kommito_command(dir, &["status"]));
    assert_eq!(
        status,
        "Staged files:\n  staged:     a.txt\n\n\
         Modified but unstaged files:\n  (none)\n\n\
         Untracked files:\n  (none)\n"
    );

    Ok(())
}

#[rstest]
fn staging_an_absolute_path_inside_the_repository(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "hello".to_string()));
    let absolute = dir.canonicalize()?.join("a.txt");

    run_kommito_command(dir, &["add", &absolute.to_string_lossy()])
        .assert()
        .success();

    assert_eq!(
        common::index_lines(dir),
        vec![format!("{} a.txt", common::sha1_hex(b"hello"))]
    );

    Ok(())
}
