//! Project creation: resolves the template, runs the setup pipeline and
//! reports what happened.

use crate::command::CommandRunner;
use crate::constants::DEFAULT_LICENSE;
use crate::error::Result;
use crate::options::{CreationOptions, TemplateOptions};
use crate::pipeline::{RunReport, StepObserver, StepOutcome};
use crate::registry::{ensure_template_directory, summary_hints, template_directory};
use crate::renderer::TemplateRenderer;
use crate::tasks::{setup_pipeline, SetupContext};
use log::debug;
use std::path::{Path, PathBuf};

/// Where templates come from and which license to write.
#[derive(Debug, Clone)]
pub struct ProjectSettings {
    pub templates_root: PathBuf,
    pub license_id: String,
}

impl ProjectSettings {
    pub fn new<P: AsRef<Path>>(templates_root: P) -> Self {
        Self {
            templates_root: templates_root.as_ref().to_path_buf(),
            license_id: DEFAULT_LICENSE.to_string(),
        }
    }
}

/// Result of a completed run.
#[derive(Debug)]
pub struct CreationReport {
    pub report: RunReport,
    /// Metadata file the user should review
    pub meta_file: &'static str,
    /// Template specific caution, if any
    pub message: Option<&'static str>,
}

impl CreationReport {
    pub fn succeeded(&self) -> bool {
        !self.report.has_failures()
    }

    /// Closing lines shown to the user regardless of step outcomes.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            "DONE Project ready".to_string(),
            format!("Make sure you check your {} before you get started.", self.meta_file),
        ];
        if let Some(message) = self.message {
            lines.push(message.to_string());
        }
        lines
    }
}

/// Generates a project from `options`.
///
/// # Errors
/// * `Error::TemplateDoesNotExistsError` if the template directory is missing
///   or unreadable. Nothing is written to the target directory in that case.
///
/// Step failures are not errors here; they are collected in the returned
/// report and every remaining step still runs.
pub fn create_project(
    options: CreationOptions,
    settings: &ProjectSettings,
    renderer: &dyn TemplateRenderer,
    runner: &dyn CommandRunner,
    observer: &mut dyn StepObserver,
) -> Result<CreationReport> {
    let template_dir = template_directory(&settings.templates_root, &options.template);
    debug!("Using template {} from {}", options.template, template_dir.display());
    ensure_template_directory(&template_dir)?;

    let template_options = TemplateOptions::new(options, &template_dir, settings.license_id.as_str())?;
    let context = SetupContext { options: &template_options, renderer, runner };
    let report = setup_pipeline().run(&context, observer);

    let (meta_file, message) = summary_hints(&template_options.creation.template);
    Ok(CreationReport { report, meta_file, message })
}

/// Prints one status line per finished step, disabled steps included.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(title: &str, outcome: &StepOutcome) -> String {
        match outcome {
            StepOutcome::Succeeded => format!("✔ {title}"),
            StepOutcome::Failed(e) => format!("✖ {title}\n  → {e}"),
            StepOutcome::Skipped(reason) => format!("↓ {title} [skipped]\n  → {reason}"),
            StepOutcome::Disabled => format!("- {title} [disabled]"),
        }
    }
}

impl StepObserver for ConsoleReporter {
    fn step_finished(&mut self, title: &str, outcome: &StepOutcome) {
        println!("{}", Self::format(title, outcome));
    }
}
