pub mod repo;

pub use repo::{GitRepo, GitSource};

use crate::error::Result;
use crate::model::CommitRecord;
use std::path::Path;

/// Anything that can replay a repository's history as [`CommitRecord`]s.
///
/// Records are handed out newest first, starting at the checked-out branch
/// tip. An error means the repository could not be opened or read.
pub trait CommitSource {
    fn for_each_commit(&self, path: &Path, visit: &mut dyn FnMut(CommitRecord<'_>)) -> Result<()>;
}
