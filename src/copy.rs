//! Bulk copy of a template tree.
//! Copies every file below the source into the destination, never replacing a
//! file that already exists there and leaving out anything matching the
//! exclusion globs.

use crate::error::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// What happened to one source file during a bulk copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyAction {
    Copied,
    Excluded,
    KeptExisting,
}

/// Totals for one bulk copy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopySummary {
    pub copied: usize,
    pub excluded: usize,
    pub kept_existing: usize,
}

impl CopySummary {
    fn record(&mut self, action: CopyAction) {
        match action {
            CopyAction::Copied => self.copied += 1,
            CopyAction::Excluded => self.excluded += 1,
            CopyAction::KeptExisting => self.kept_existing += 1,
        }
    }
}

/// Builds a glob set from exclusion patterns.
pub fn build_exclusions(patterns: &[&str]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}

fn copy_entry(source: &Path, dest: &Path) -> Result<CopyAction> {
    if dest.exists() {
        debug!("Keeping existing file: {}", dest.display());
        return Ok(CopyAction::KeptExisting);
    }
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    debug!("Copying file: {}", dest.display());
    fs::copy(source, dest)?;
    Ok(CopyAction::Copied)
}

/// Copies the tree at `source_dir` into `target_dir`.
///
/// # Arguments
/// * `source_dir` - Root of the tree to copy, never modified
/// * `target_dir` - Destination root, created if missing
/// * `exclusions` - Globs matched against paths relative to `source_dir`
///
/// # Returns
/// * `Result<CopySummary>` - Counts of copied, excluded and kept files
pub fn copy_tree<P: AsRef<Path>, Q: AsRef<Path>>(
    source_dir: P,
    target_dir: Q,
    exclusions: &GlobSet,
) -> Result<CopySummary> {
    let source_dir = source_dir.as_ref();
    let target_dir = target_dir.as_ref();
    let mut summary = CopySummary::default();

    fs::create_dir_all(target_dir)?;

    let mut walker = WalkDir::new(source_dir).min_depth(1).sort_by_file_name().into_iter();
    while let Some(entry) = walker.next() {
        let entry = entry?;
        let relative = entry.path().strip_prefix(source_dir).unwrap_or(entry.path());

        if exclusions.is_match(relative) {
            debug!("Excluding {}", relative.display());
            summary.record(CopyAction::Excluded);
            // An excluded directory takes its whole subtree with it.
            if entry.file_type().is_dir() {
                walker.skip_current_dir();
            }
            continue;
        }

        let dest = target_dir.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)?;
        } else {
            summary.record(copy_entry(entry.path(), &dest)?);
        }
    }

    debug!(
        "Copied {} file(s), excluded {}, kept {} existing",
        summary.copied, summary.excluded, summary.kept_existing
    );
    Ok(summary)
}
