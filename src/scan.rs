use crate::cli::CommonArgs;
use crate::error::{ContribError, Result};
use crate::registry::Registry;
use crate::util::spinner;
use anyhow::Context;
use console::style;
use ignore::{DirEntry, WalkBuilder};
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const SKIPPED_DIRS: &[&str] = &["vendor", "node_modules"];

fn is_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|t| t.is_dir())
}

fn descend_into(entry: &DirEntry) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    let inside_git = entry
        .path()
        .parent()
        .and_then(Path::file_name)
        .is_some_and(|name| name == ".git");
    let skipped = is_dir(entry)
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name));
    !inside_git && !skipped
}

/// Finds every git working tree below `root`.
///
/// A directory is reported when it holds a `.git` directory. Nested
/// repositories are found too; `vendor` and `node_modules` are not entered.
pub fn discover_repositories(root: &Path) -> Result<Vec<PathBuf>> {
    discover_repositories_with_progress(root, &ProgressBar::hidden())
}

pub fn discover_repositories_with_progress(root: &Path, progress: &ProgressBar) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(ContribError::Scan(format!("{} is not a directory", root.display())));
    }
    let root = root.canonicalize()?;

    let walker = WalkBuilder::new(&root)
        .standard_filters(false)
        .follow_links(false)
        .filter_entry(descend_into)
        .build();

    let mut repos = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "skipping unreadable path");
                continue;
            }
        };

        if entry.depth() > 0 && entry.file_name() == ".git" && is_dir(&entry) {
            if let Some(repo) = entry.path().parent() {
                debug!(repo = %repo.display(), "found repository");
                progress.set_message(repo.display().to_string());
                repos.push(repo.to_path_buf());
            }
        }
    }

    repos.sort();
    repos.dedup();
    Ok(repos)
}

/// `--add`: scan `folder` and register every repository found.
pub fn exec(common: &CommonArgs, folder: &Path) -> anyhow::Result<()> {
    let pb = spinner("Scanning for repositories...");
    let repos = discover_repositories_with_progress(folder, &pb);
    pb.finish_and_clear();
    let repos = repos.with_context(|| format!("Failed to scan {}", folder.display()))?;

    println!("{}", style("Found folders:").bold());
    println!();
    for repo in &repos {
        println!("{}", repo.display());
    }

    let registry = Registry::new(common.registry.as_ref()).context("Failed to locate repository registry")?;
    let added = registry
        .add(repos.iter().cloned())
        .with_context(|| format!("Failed to update registry {}", registry.path().display()))?;

    println!();
    println!(
        "{} {} new, {} already known",
        style("Successfully added:").green().bold(),
        added,
        repos.len() - added
    );
    Ok(())
}
