use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::status_info::StatusReport;
use std::io::Write;

impl Repository {
    /// Report staged, modified-but-unstaged and untracked files.
    ///
    /// A missing index reads as an empty one.
    pub fn status(&self) -> anyhow::Result<StatusReport> {
        self.ensure_initialized()?;

        let staged = self.index().path_to_hash_map_or_empty()?;
        let workspace_files = self.workspace().list_files()?;

        let report = StatusReport::build(&staged, workspace_files, |path| {
            self.workspace()
                .read_file(path)
                .ok()
                .map(|content| ObjectId::digest(&content))
        });

        self.print_status(&report)?;

        Ok(report)
    }

    fn print_status(&self, report: &StatusReport) -> anyhow::Result<()> {
        for (position, (change_type, files)) in report.sections().into_iter().enumerate() {
            if position > 0 {
                writeln!(self.writer())?;
            }

            writeln!(self.writer(), "{}", change_type.heading())?;
            if files.is_empty() {
                writeln!(self.writer(), "  (none)")?;
            }
            for file in files {
                writeln!(self.writer(), "{}{}", change_type, file.display())?;
            }
        }

        Ok(())
    }
}
