//! Dependency installation for generated projects.

use crate::command::CommandRunner;
use crate::error::Result;
use log::info;
use std::path::Path;

/// Package managers Kiln knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// Picks the package manager from the lockfile present in `project_dir`,
    /// falling back to npm.
    pub fn detect<P: AsRef<Path>>(project_dir: P) -> Self {
        let project_dir = project_dir.as_ref();
        if project_dir.join("yarn.lock").exists() {
            PackageManager::Yarn
        } else if project_dir.join("pnpm-lock.yaml").exists() {
            PackageManager::Pnpm
        } else {
            PackageManager::Npm
        }
    }

    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.program())
    }
}

/// Installs the project's dependencies with the detected package manager.
pub fn install_dependencies<P: AsRef<Path>>(runner: &dyn CommandRunner, project_dir: P) -> Result<()> {
    let project_dir = project_dir.as_ref();
    let manager = PackageManager::detect(project_dir);
    info!("Installing dependencies with {manager}");
    runner.run("install dependencies", manager.program(), &["install"], project_dir)
}
