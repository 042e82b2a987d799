use colored::Colorize;

/// Width reserved in front of each label
const LABEL_WIDTH: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileChangeType {
    Staged,
    Modified,
    Untracked,
}

impl FileChangeType {
    pub fn heading(&self) -> &'static str {
        match self {
            FileChangeType::Staged => "Staged files:",
            FileChangeType::Modified => "Modified but unstaged files:",
            FileChangeType::Untracked => "Untracked files:",
        }
    }
}

impl From<&FileChangeType> for &str {
    fn from(change_type: &FileChangeType) -> Self {
        match change_type {
            FileChangeType::Staged => "staged:     ",
            FileChangeType::Modified => "modified:   ",
            FileChangeType::Untracked => "untracked:  ",
        }
    }
}

impl std::fmt::Display for FileChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = self.into();
        let colored_str = match self {
            FileChangeType::Staged => label.green(),
            FileChangeType::Modified => label.red(),
            FileChangeType::Untracked => label.normal(),
        };
        write!(f, "{:>width$}{}", "", colored_str, width = LABEL_WIDTH)
    }
}
