use crate::areas::refs::Branch;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Print every branch, marking the one whose content matches HEAD.
    pub fn list_branches(&self) -> anyhow::Result<Vec<Branch>> {
        self.ensure_initialized()?;

        let branches = self.refs().list_branches()?;
        let head = self.refs().read_head_raw()?;
        let current = branches.iter().position(|branch| branch.raw == head);

        writeln!(self.writer(), "Branches:")?;
        for (position, branch) in branches.iter().enumerate() {
            if Some(position) == current {
                writeln!(self.writer(), "* {}", branch.name.as_str().green())?;
            } else {
                writeln!(self.writer(), "  {}", branch.name)?;
            }
        }

        Ok(branches)
    }

    pub fn create_branch(&self, name: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let name = BranchName::try_parse(name.to_string())?;
        self.refs().create_branch(&name)?;

        writeln!(self.writer(), "Branch '{}' created", name)?;

        Ok(())
    }

    pub fn switch_branch(&self, name: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let name = BranchName::try_parse(name.to_string())?;
        self.refs().switch_branch(&name)?;

        writeln!(self.writer(), "Switched to branch '{}'", name)?;

        Ok(())
    }

    pub fn delete_branch(&self, name: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let name = BranchName::try_parse(name.to_string())?;
        let raw = self.refs().delete_branch(&name)?;

        writeln!(self.writer(), "Deleted branch {} (was {})", name, raw.trim())?;

        Ok(())
    }
}
