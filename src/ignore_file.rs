//! Ignore rules appended to the generated project's `.gitignore`.

use crate::constants::IGNORE_FILE;
use crate::error::Result;
use log::debug;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Standard ignore rules for Node based projects.
pub const NODE_RULES: &[&str] = &[
    "# Logs",
    "logs",
    "*.log",
    "npm-debug.log*",
    "yarn-debug.log*",
    "yarn-error.log*",
    "",
    "# Runtime data",
    "pids",
    "*.pid",
    "*.seed",
    "*.pid.lock",
    "",
    "# Coverage",
    "lib-cov",
    "coverage",
    "*.lcov",
    ".nyc_output",
    "",
    "# Dependency directories",
    "node_modules/",
    "jspm_packages/",
    "",
    "# TypeScript cache",
    "*.tsbuildinfo",
    "",
    "# Caches",
    ".npm",
    ".eslintcache",
    ".cache",
    "",
    "# Build output",
    "dist",
    "out",
    "",
    "# Environment",
    ".env",
    ".env.test",
    "",
    "# Yarn",
    ".yarn-integrity",
    ".yarn/cache",
    ".yarn/unplugged",
    ".yarn/build-state.yml",
    ".pnp.*",
];

/// Writes the Node ignore rules to an already open writer.
pub fn write_node_rules<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer)?;
    for rule in NODE_RULES {
        writeln!(writer, "{rule}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Appends the Node ignore rules to `<target_dir>/.gitignore`, creating it if
/// needed. Existing content, such as a copied template `.gitignore`, is kept.
pub fn append_ignore_file<P: AsRef<Path>>(target_dir: P) -> Result<PathBuf> {
    let path = target_dir.as_ref().join(IGNORE_FILE);
    debug!("Appending ignore rules to {}", path.display());
    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    write_node_rules(&mut file)?;
    Ok(path)
}
