use crate::cli::CommonArgs;
use crate::git::GitSource;
use crate::registry::Registry;
use crate::util::spinner;
use anyhow::Context;
use chrono::Local;
use tracing::info;

use super::{aggregate_with_progress, build_columns, CalendarRenderer};

pub fn exec(common: &CommonArgs, email: &str) -> anyhow::Result<()> {
    let registry = Registry::new(common.registry.as_ref()).context("Failed to locate repository registry")?;
    let repos = registry
        .load()
        .with_context(|| format!("Failed to read repository registry {}", registry.path().display()))?;
    info!(registry = %registry.path().display(), repos = repos.len(), "loaded registry");

    let now = Local::now();

    // Everything is collected before anything is printed, so a broken
    // repository never leaves a partial grid on stdout.
    let pb = spinner("Reading commit history...");
    let buckets = aggregate_with_progress(&GitSource, &repos, email, &now, &pb);
    pb.finish_and_clear();
    let buckets = buckets.context("Failed to collect commits")?;
    info!(email, commits = buckets.total(), "aggregated commits");

    let grid = build_columns(&buckets);
    CalendarRenderer::new(&now)
        .styled(common.use_color())
        .print(&grid)
        .context("Failed to write heatmap")?;

    Ok(())
}
