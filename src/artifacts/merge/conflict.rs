use bytes::Bytes;

pub const OURS_MARKER: &str = "<<<<<<<";
pub const SEPARATOR_MARKER: &str = "=======";
pub const THEIRS_MARKER: &str = ">>>>>>>";

/// Build the content of a conflict file holding both versions of a path.
///
/// ```text
/// <<<<<<< <current branch>
/// <current content>
/// =======
/// <target content>
/// >>>>>>> <target branch>
/// ```
pub fn render_conflict(
    current_branch: &str,
    current: &[u8],
    target_branch: &str,
    target: &[u8],
) -> Bytes {
    let mut content = Vec::with_capacity(current.len() + target.len() + 64);

    content.extend_from_slice(format!("{OURS_MARKER} {current_branch}\n").as_bytes());
    content.extend_from_slice(current);
    content.extend_from_slice(format!("\n{SEPARATOR_MARKER}\n").as_bytes());
    content.extend_from_slice(target);
    content.extend_from_slice(format!("\n{THEIRS_MARKER} {target_branch}\n").as_bytes());

    Bytes::from(content)
}
