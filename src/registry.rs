use crate::error::{ContribError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const REGISTRY_FILE_NAME: &str = ".localcontribs";

/// Flat, newline-delimited list of known repository paths.
#[derive(Debug, Clone)]
pub struct Registry {
    path: PathBuf,
}

impl Registry {
    /// Use `path` when given, otherwise `~/.localcontribs`.
    pub fn new<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let path = match path {
            Some(p) => p.as_ref().to_path_buf(),
            None => Self::default_path()?,
        };
        Ok(Self { path })
    }

    pub fn default_path() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(REGISTRY_FILE_NAME))
            .ok_or_else(|| ContribError::Registry("Cannot determine home directory".to_string()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the registered paths, creating an empty registry if none exists.
    pub fn load(&self) -> Result<Vec<PathBuf>> {
        if !self.path.exists() {
            debug!(registry = %self.path.display(), "creating empty registry");
            self.write(&[])?;
            return Ok(Vec::new());
        }

        let content = fs::read(&self.path)?;
        content
            .split(|&b| b == b'\n')
            .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
            .filter(|line| !line.is_empty())
            .map(decode_path)
            .collect()
    }

    /// Appends `paths` not already present and returns how many were new.
    pub fn add<I>(&self, paths: I) -> Result<usize>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut known = self.load()?;
        let before = known.len();

        for path in paths {
            if !known.contains(&path) {
                known.push(path);
            }
        }

        let added = known.len() - before;
        if added > 0 {
            self.write(&known)?;
        }
        Ok(added)
    }

    fn write(&self, paths: &[PathBuf]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let lines = paths
            .iter()
            .map(|p| encode_path(p))
            .collect::<Result<Vec<_>>>()?;
        fs::write(&self.path, lines.join(&b'\n'))?;
        Ok(())
    }
}

// Paths are stored as raw bytes so non-UTF-8 names survive a round trip.
#[cfg(unix)]
fn encode_path(path: &Path) -> Result<Vec<u8>> {
    use std::os::unix::ffi::OsStrExt;
    Ok(path.as_os_str().as_bytes().to_vec())
}

#[cfg(unix)]
fn decode_path(bytes: &[u8]) -> Result<PathBuf> {
    use std::os::unix::ffi::OsStrExt;
    Ok(PathBuf::from(std::ffi::OsStr::from_bytes(bytes)))
}

#[cfg(not(unix))]
fn encode_path(path: &Path) -> Result<Vec<u8>> {
    path.to_str()
        .map(|s| s.as_bytes().to_vec())
        .ok_or_else(|| ContribError::Registry(format!("Path is not valid UTF-8: {}", path.display())))
}

#[cfg(not(unix))]
fn decode_path(bytes: &[u8]) -> Result<PathBuf> {
    std::str::from_utf8(bytes)
        .map(PathBuf::from)
        .map_err(|e| ContribError::Registry(format!("Registry entry is not valid UTF-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_registry_is_created_empty() {
        let dir = tempdir().unwrap();
        let registry = Registry::new(Some(dir.path().join("repos"))).unwrap();

        assert_eq!(registry.load().unwrap(), Vec::<PathBuf>::new());
        assert!(registry.path().exists());
    }

    #[test]
    fn add_skips_duplicates_and_keeps_order() {
        let dir = tempdir().unwrap();
        let registry = Registry::new(Some(dir.path().join("repos"))).unwrap();

        let first = registry
            .add(vec![PathBuf::from("/src/a"), PathBuf::from("/src/b")])
            .unwrap();
        let second = registry
            .add(vec![PathBuf::from("/src/b"), PathBuf::from("/src/c")])
            .unwrap();

        assert_eq!(first, 2);
        assert_eq!(second, 1);
        assert_eq!(
            registry.load().unwrap(),
            vec![
                PathBuf::from("/src/a"),
                PathBuf::from("/src/b"),
                PathBuf::from("/src/c"),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_paths_round_trip() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        let registry = Registry::new(Some(dir.path().join("repos"))).unwrap();
        let latin1 = PathBuf::from(OsStr::from_bytes(b"/src/caf\xe9"));

        registry
            .add(vec![latin1.clone(), PathBuf::from("/src/plain")])
            .unwrap();

        assert_eq!(fs::read(registry.path()).unwrap(), b"/src/caf\xe9\n/src/plain".to_vec());
        assert_eq!(registry.load().unwrap(), vec![latin1, PathBuf::from("/src/plain")]);
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("repos");
        fs::write(&file, "/src/a\r\n/src/b\r\n").unwrap();

        let registry = Registry::new(Some(&file)).unwrap();
        assert_eq!(
            registry.load().unwrap(),
            vec![PathBuf::from("/src/a"), PathBuf::from("/src/b")]
        );
    }

    #[test]
    fn blank_lines_are_ignored() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("repos");
        fs::write(&file, "/src/a\n\n/src/b\n").unwrap();

        let registry = Registry::new(Some(&file)).unwrap();
        assert_eq!(
            registry.load().unwrap(),
            vec![PathBuf::from("/src/a"), PathBuf::from("/src/b")]
        );
    }
}
