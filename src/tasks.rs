//! The project setup steps, in the order they run.

use crate::command::CommandRunner;
use crate::constants::{LICENSE_FILE, TEMPLATE_GLOB, WORKFLOW_SOURCE_DIR, WORKFLOW_TARGET_DIR};
use crate::copy::{build_exclusions, copy_tree};
use crate::error::Result;
use crate::ignore_file::append_ignore_file;
use crate::install::install_dependencies;
use crate::license::render_license;
use crate::materializer::Materializer;
use crate::options::TemplateOptions;
use crate::pipeline::{Pipeline, Step};
use crate::renderer::TemplateRenderer;
use log::debug;

pub const COPY_FILES: &str = "Copy project files";
pub const GENERATE_FILES: &str = "Generate project files";
pub const CREATE_GITIGNORE: &str = "Create gitignore";
pub const CREATE_LICENSE: &str = "Create License";
pub const INIT_GIT: &str = "Initialize git";
pub const CREATE_ACTIONS: &str = "Create Actions workflow";
pub const INSTALL_DEPENDENCIES: &str = "Install dependencies";

pub const INSTALL_SKIP_REASON: &str = "Pass --install to automatically install dependencies";

/// Everything a setup step may use.
pub struct SetupContext<'a> {
    pub options: &'a TemplateOptions,
    pub renderer: &'a dyn TemplateRenderer,
    pub runner: &'a dyn CommandRunner,
}

type SetupStep<'a> = Step<SetupContext<'a>>;

impl SetupContext<'_> {
    fn materializer(&self) -> Materializer<'_> {
        Materializer::new(
            self.renderer,
            &self.options.template_directory,
            &self.options.target_directory,
            &self.options.placeholders,
        )
    }
}

fn copy_project_files(ctx: &SetupContext<'_>) -> Result<()> {
    let exclusions = build_exclusions(&[TEMPLATE_GLOB])?;
    let summary = copy_tree(
        &ctx.options.template_directory,
        &ctx.options.target_directory,
        &exclusions,
    )?;
    debug!("Bulk copy finished: {summary:?}");
    Ok(())
}

fn generate_project_files(ctx: &SetupContext<'_>) -> Result<()> {
    ctx.materializer().materialize(".", None)?;
    Ok(())
}

fn create_gitignore(ctx: &SetupContext<'_>) -> Result<()> {
    append_ignore_file(&ctx.options.target_directory)?;
    Ok(())
}

fn create_license(ctx: &SetupContext<'_>) -> Result<()> {
    let text = render_license(&ctx.options.license_id, &ctx.options.creation.name)?;
    std::fs::write(ctx.options.target_directory.join(LICENSE_FILE), text)?;
    Ok(())
}

fn init_git(ctx: &SetupContext<'_>) -> Result<()> {
    ctx.runner.run("initialize git", "git", &["init"], &ctx.options.target_directory)
}

fn create_actions_workflow(ctx: &SetupContext<'_>) -> Result<()> {
    ctx.materializer().materialize(WORKFLOW_SOURCE_DIR, Some(WORKFLOW_TARGET_DIR))?;
    Ok(())
}

fn install(ctx: &SetupContext<'_>) -> Result<()> {
    install_dependencies(ctx.runner, &ctx.options.target_directory)
}

/// The canonical setup pipeline.
///
/// Steps touching the same file rely on this order: the ignore-file step
/// appends to a `.gitignore` the bulk copy may have placed.
pub fn setup_pipeline<'a>() -> Pipeline<SetupContext<'a>> {
    Pipeline::new(vec![
        SetupStep::new(COPY_FILES, copy_project_files),
        SetupStep::new(GENERATE_FILES, generate_project_files),
        SetupStep::new(CREATE_GITIGNORE, create_gitignore),
        SetupStep::new(CREATE_LICENSE, create_license).enabled(|ctx| ctx.options.creation.license),
        SetupStep::new(INIT_GIT, init_git).enabled(|ctx| ctx.options.creation.git),
        SetupStep::new(CREATE_ACTIONS, create_actions_workflow)
            .enabled(|ctx| ctx.options.creation.actions),
        SetupStep::new(INSTALL_DEPENDENCIES, install).skip(|ctx| {
            (!ctx.options.creation.run_install).then(|| INSTALL_SKIP_REASON.to_string())
        }),
    ])
}
