//! Kiln is a project scaffolding tool for extension projects.
//! It copies a template tree into a target directory, renders the template
//! files with the project's id and author, and runs the optional setup steps
//! (license, git, CI workflow, dependency installation) as one pipeline.

/// Command-line interface module for the Kiln application
pub mod cli;

/// External process invocation behind a trait
pub mod command;

/// Common constants used throughout the application
pub mod constants;

/// Bulk copy of a template tree, never replacing existing files
pub mod copy;

/// Error types and handling for the Kiln application
pub mod error;

/// Ignore rules appended to the generated `.gitignore`
pub mod ignore_file;

/// Package manager detection and dependency installation
pub mod install;

/// Bundled license texts
pub mod license;

pub mod logger;

/// Renders the template files of a template subdirectory
pub mod materializer;

/// Creation and template options
pub mod options;

/// Generic ordered step runner with per-step outcomes
pub mod pipeline;

/// End-to-end project creation and progress reporting
pub mod project;

/// Interactive questionnaire
pub mod prompt;

/// Fixed registry of bundled templates
pub mod registry;

/// Placeholder rendering
pub mod renderer;

/// Template file classification
pub mod resolver;

/// The canonical setup steps
pub mod tasks;
