//! Kiln's main application entry point.
//! Parses arguments, collects the missing options, runs the setup pipeline
//! and prints the final summary.

use std::process::ExitCode;

use kiln::{
    cli::{get_args, Args},
    command::SystemCommandRunner,
    error::{default_error_handler, Error},
    logger::init_logger,
    project::{create_project, ConsoleReporter, ProjectSettings},
    prompt::{resolve_options, DialoguerPrompter},
    registry::default_templates_root,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() -> ExitCode {
    let args = get_args();
    init_logger(args.verbose);

    match run(args) {
        Ok(code) => code,
        Err(err) => match err.downcast::<Error>() {
            Ok(err) => default_error_handler(err),
            Err(err) => {
                eprintln!("ERROR {err:#}");
                ExitCode::FAILURE
            }
        },
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves options from flags and prompts
/// 2. Checks the template directory exists
/// 3. Runs the setup pipeline, reporting each step
/// 4. Prints the summary; exits non-zero if any step failed
fn run(args: Args) -> anyhow::Result<ExitCode> {
    let prompter = DialoguerPrompter::new();
    let options = resolve_options(&args, &prompter)?;

    let templates_root = match &args.templates_dir {
        Some(dir) => dir.clone(),
        None => default_templates_root(),
    };
    let settings = ProjectSettings::new(templates_root);

    let renderer = MiniJinjaRenderer::new();
    let runner = SystemCommandRunner::new();
    let mut reporter = ConsoleReporter::new();

    let created = create_project(options, &settings, &renderer, &runner, &mut reporter)?;

    println!();
    for line in created.summary_lines() {
        println!("{line}");
    }

    if created.succeeded() {
        Ok(ExitCode::SUCCESS)
    } else {
        for (title, err) in created.report.failures() {
            eprintln!("ERROR {title}: {err}");
        }
        Ok(ExitCode::FAILURE)
    }
}
