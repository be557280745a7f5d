use crate::error::{ContribError, Result};
use crate::git::CommitSource;
use crate::model::CommitRecord;
use chrono::{DateTime, FixedOffset};
use gix::Repository;
use std::path::{Path, PathBuf};
use tracing::trace;

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open the repository at exactly `path`; parent directories are not searched.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = gix::open(path.as_ref())?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();

        Ok(Self { repo, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Walks every commit reachable from `HEAD`, newest first.
    pub fn for_each_commit(&self, visit: &mut dyn FnMut(CommitRecord<'_>)) -> Result<()> {
        let mut head = self.repo.head()?;
        let head_commit = head.peel_to_commit_in_place()?;

        let walk = self
            .repo
            .rev_walk([head_commit.id])
            .all()
            .map_err(|e| ContribError::GitRepo(format!("Cannot walk history: {e}")))?;

        let mut count = 0usize;
        for info in walk {
            let info = info.map_err(|e| ContribError::GitRepo(format!("Cannot read history: {e}")))?;
            let commit = info.object()?;
            let author = commit.author()?;
            let time = author
                .time()
                .map_err(|e| ContribError::InvalidDate(format!("Commit {}: {e}", info.id)))?;
            let timestamp = to_datetime(time.seconds, time.offset)?;
            let email = author.email.to_string();

            visit(CommitRecord {
                author_email: &email,
                timestamp,
            });
            count += 1;
        }

        trace!(repo = %self.path.display(), commits = count, "history walked");
        Ok(())
    }
}

fn to_datetime(seconds: i64, offset: i32) -> Result<DateTime<FixedOffset>> {
    let tz = FixedOffset::east_opt(offset)
        .ok_or_else(|| ContribError::InvalidDate(format!("Invalid UTC offset: {offset}")))?;
    let utc = DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| ContribError::InvalidDate(format!("Invalid timestamp: {seconds}")))?;
    Ok(utc.with_timezone(&tz))
}

/// [`CommitSource`] that reads repositories from disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitSource;

impl CommitSource for GitSource {
    fn for_each_commit(&self, path: &Path, visit: &mut dyn FnMut(CommitRecord<'_>)) -> Result<()> {
        GitRepo::open(path)?.for_each_commit(visit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::process::Command;
    use tempfile::tempdir;

    fn has_git() -> bool {
        Command::new("git").arg("--version").output().is_ok()
    }

    fn git(dir: &Path, args: &[&str], author_date: Option<&str>) {
        let mut cmd = Command::new("git");
        cmd.args(args).current_dir(dir);
        if let Some(date) = author_date {
            cmd.env("GIT_AUTHOR_DATE", date).env("GIT_COMMITTER_DATE", date);
        }
        assert!(cmd.status().unwrap().success(), "git {args:?}");
    }

    fn init_repo(dir: &Path) {
        git(dir, &["init", "-q"], None);
        git(dir, &["config", "user.email", "dev@example.com"], None);
        git(dir, &["config", "user.name", "Dev"], None);
    }

    #[test]
    fn walks_author_email_and_time() {
        if !has_git() {
            return;
        }
        let dir = tempdir().unwrap();
        init_repo(dir.path());
        git(
            dir.path(),
            &["commit", "-q", "--allow-empty", "-m", "first"],
            Some("2024-03-01T10:00:00+0200"),
        );
        git(
            dir.path(),
            &["commit", "-q", "--allow-empty", "-m", "second"],
            Some("2024-03-02T11:00:00+0200"),
        );

        let mut seen = Vec::new();
        GitSource
            .for_each_commit(dir.path(), &mut |record| {
                seen.push((record.author_email.to_string(), record.timestamp.to_rfc3339()));
            })
            .unwrap();

        assert_eq!(
            seen,
            vec![
                ("dev@example.com".to_string(), "2024-03-02T11:00:00+02:00".to_string()),
                ("dev@example.com".to_string(), "2024-03-01T10:00:00+02:00".to_string()),
            ]
        );
    }

    #[test]
    fn missing_repository_is_an_error() {
        let dir = tempdir().unwrap();
        let result = GitSource.for_each_commit(&dir.path().join("nope"), &mut |_| {});
        assert!(result.is_err());
    }

    #[test]
    fn unborn_head_is_an_error() {
        if !has_git() {
            return;
        }
        let dir = tempdir().unwrap();
        init_repo(dir.path());
        let result = GitSource.for_each_commit(dir.path(), &mut |_| {});
        assert!(result.is_err());
    }
}
