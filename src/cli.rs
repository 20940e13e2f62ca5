//! Command-line interface implementation for Kiln.
//! Provides argument parsing using clap.

use crate::constants::TEMPLATES_DIR_ENV;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for Kiln.
#[derive(Parser, Debug)]
#[command(author, version, about = "Kiln: scaffold a new extension project", long_about = None)]
pub struct Args {
    /// Template to use (TypeScript or JavaScript)
    #[arg(value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// Skip prompts and use defaults
    #[arg(short = 'y', long = "yes")]
    pub skip_prompts: bool,

    /// Initialize a git repository
    #[arg(short, long)]
    pub git: bool,

    /// Install dependencies once the project is generated
    #[arg(short = 'i', long = "install")]
    pub run_install: bool,

    /// Write an MIT license file
    #[arg(short, long)]
    pub license: bool,

    /// Generate a GitHub Actions workflow
    #[arg(short, long)]
    pub actions: bool,

    /// Author name
    #[arg(long)]
    pub name: Option<String>,

    /// Author username, defaults to the name
    #[arg(long)]
    pub user_name: Option<String>,

    /// Project id, e.g. `my-extension` or `@scope/my-extension`
    #[arg(long)]
    pub id: Option<String>,

    /// Directory where the project will be generated, defaults to the current directory
    #[arg(short, long, value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Directory holding the template sources
    #[arg(long, env = TEMPLATES_DIR_ENV, value_name = "DIR")]
    pub templates_dir: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
