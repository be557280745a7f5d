use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContribError>;

#[derive(Error, Debug)]
pub enum ContribError {
    #[error("Git error: {0}")]
    Git(#[from] Box<gix::open::Error>),
    #[error("Git repository error: {0}")]
    GitRepo(String),
    #[error("Repository {} could not be read: {source}", path.display())]
    RepositoryAccess {
        path: PathBuf,
        #[source]
        source: Box<ContribError>,
    },
    #[error("Registry error: {0}")]
    Registry(String),
    #[error("Scan error: {0}")]
    Scan(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Object find error: {0}")]
    ObjectFind(#[from] Box<gix::object::find::existing::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("Head peel error: {0}")]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
    #[error("Object decode error: {0}")]
    ObjectDecode(#[from] Box<gix::objs::decode::Error>),
}

impl ContribError {
    pub fn repository_access(path: impl Into<PathBuf>, source: ContribError) -> Self {
        ContribError::RepositoryAccess {
            path: path.into(),
            source: Box::new(source),
        }
    }
}

// Manual From implementations for unboxed to boxed conversions
impl From<gix::open::Error> for ContribError {
    fn from(err: gix::open::Error) -> Self {
        ContribError::Git(Box::new(err))
    }
}

impl From<gix::object::find::existing::Error> for ContribError {
    fn from(err: gix::object::find::existing::Error) -> Self {
        ContribError::ObjectFind(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for ContribError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        ContribError::RefFind(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for ContribError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        ContribError::HeadPeel(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for ContribError {
    fn from(err: gix::objs::decode::Error) -> Self {
        ContribError::ObjectDecode(Box::new(err))
    }
}
