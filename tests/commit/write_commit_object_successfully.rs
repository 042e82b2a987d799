use crate::common;
use crate::common::command::{
    AUTHOR_DATE, AUTHOR_NAME, init_repository_dir, kommito_commit, stage_content, stdout_of,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn write_commit_object_successfully(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    stage_content(dir, "a.txt", "hello");

    let output = stdout_of(&mut kommito_commit(dir, "first"));

    let head = common::read_head(dir);
    let commit_content = std::fs::read(common::metadata_file(dir, "objects/commits").join(&head))?;
    assert_eq!(head, common::sha1_hex(&commit_content));
    assert_eq!(output, format!("[{}] first\n", &head[..7]));

    let commit: serde_json::Value = serde_json::from_slice(&commit_content)?;
    assert_eq!(commit["author"], AUTHOR_NAME);
    assert_eq!(commit["message"], "first");
    assert_eq!(commit["blobs"], serde_json::json!([common::sha1_hex(b"hello")]));
    assert_eq!(
        chrono::DateTime::parse_from_rfc3339(commit["timestamp"].as_str().unwrap())?,
        chrono::DateTime::parse_from_rfc3339(AUTHOR_DATE)?
    );

    Ok(())
}

#[rstest]
fn commit_keeps_every_index_line_in_order(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    stage_content(dir, "a.txt", "v1");
    stage_content(dir, "b.txt", "b");
    stage_content(dir, "a.txt", "v2");

    kommito_commit(dir, "snapshot").assert().success();

    let head = common::read_head(dir);
    let commit: serde_json::Value = serde_json::from_slice(&std::fs::read(
        common::metadata_file(dir, "objects/commits").join(&head),
    )?)?;
    assert_eq!(
        commit["blobs"],
        serde_json::json!([
            common::sha1_hex(b"v1"),
            common::sha1_hex(b"b"),
            common::sha1_hex(b"v2"),
        ])
    );

    Ok(())
}

#[rstest]
fn commit_with_empty_index_is_allowed(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    kommito_commit(dir, "nothing yet").assert().success();

    let head = common::read_head(dir);
    let content = std::fs::read_to_string(common::metadata_file(dir, "objects/commits").join(&head))?;
    assert!(content.contains("\"blobs\": []"));

    Ok(())
}

#[rstest]
fn identical_commits_share_one_hash(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    stage_content(dir, "a.txt", "hello");

    kommito_commit(dir, "same").assert().success();
    let first = common::read_head(dir);
    kommito_commit(dir, "same").assert().success();
    let second = common::read_head(dir);
    kommito_commit(dir, "different").assert().success();
    let third = common::read_head(dir);

    assert_eq!(first, second);
    assert_ne!(first, third);

    Ok(())
}
