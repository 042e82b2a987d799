pub mod branch_name;
pub mod ref_target;

/// Characters a reference file name must not contain.
pub const INVALID_BRANCH_NAME_REGEX: &str = r"[/\\\x00-\x1f\x7f]";
pub const SYMREF_REGEX: &str = r"^ref: refs/heads/(.+)$";
pub const SYMREF_PREFIX: &str = "ref: refs/heads/";
