use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::merge::conflict::render_conflict;
use crate::artifacts::merge::merge_plan::{MergeAction, MergeOutcome, MergePlan};
use crate::artifacts::objects::commit::Commit;
use crate::errors::KommitoError;
use std::io::Write;

impl Repository {
    /// Bring the files of `target` into the working directory.
    ///
    /// Nothing is committed and no reference moves; conflicting paths are
    /// left with both versions between conflict markers.
    pub fn merge(&self, target: &str) -> anyhow::Result<MergeOutcome> {
        self.ensure_initialized()?;

        let current = self.refs().current_branch()?;
        if current == target {
            return Err(KommitoError::SelfMerge(target.to_string()).into());
        }

        let current_commit = self.load_branch_commit(&current)?;
        let target_commit = self.load_branch_commit(target)?;

        let entries = self.index().entries()?;
        let plan = MergePlan::build(&entries, &current_commit, &target_commit);

        let mut outcome = MergeOutcome::default();
        for action in plan.actions() {
            match action {
                MergeAction::Create { path, oid } | MergeAction::Rewrite { path, oid } => {
                    let blob = self.database().load_blob(oid)?;
                    self.workspace().write_file(path, blob.content())?;
                    outcome.written.push(path.clone());
                }
                MergeAction::Conflict {
                    path,
                    current: current_oid,
                    target: target_oid,
                } => {
                    let ours = self.database().load_blob(current_oid)?;
                    let theirs = self.database().load_blob(target_oid)?;
                    let content =
                        render_conflict(&current, ours.content(), target, theirs.content());

                    self.workspace().write_file(path, &content)?;
                    outcome.conflicts.push(path.clone());
                }
            }
        }

        for oid in plan.unplaced() {
            tracing::warn!(%oid, "no path recorded for blob, skipping");
            outcome.unplaced.push(oid.clone());
        }

        self.report_merge(&outcome)?;

        Ok(outcome)
    }

    fn load_branch_commit(&self, name: &str) -> anyhow::Result<Commit> {
        let name = BranchName::try_parse(name.to_string())?;
        let raw = self.refs().branch_commit(&name)?;
        let commit_id = self.refs().resolve(&raw, &self.refs().heads_path())?;

        self.database().load_commit(&commit_id)
    }

    fn report_merge(&self, outcome: &MergeOutcome) -> anyhow::Result<()> {
        if outcome.is_clean() {
            writeln!(
                self.writer(),
                "Merge completed successfully. No conflicts detected."
            )?;
        } else {
            writeln!(self.writer(), "Merge completed with conflicts in:")?;
            for path in &outcome.conflicts {
                writeln!(self.writer(), "  {}", path.display())?;
            }
            writeln!(self.writer(), "Please resolve conflicts and commit.")?;
        }

        if !outcome.unplaced.is_empty() {
            writeln!(
                self.writer(),
                "Skipped {} blob(s) with no path in the index",
                outcome.unplaced.len()
            )?;
        }

        Ok(())
    }
}
