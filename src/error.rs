//! Error handling for the Kiln application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for Kiln operations.
///
/// This enum represents all possible errors that can occur within the Kiln application.
/// It implements the standard Error trait through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors serializing a rendering context
    #[error("Serialization error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// Represents an invalid exclusion pattern handed to the bulk copy
    #[error("Glob pattern error: {0}.")]
    GlobError(#[from] globset::Error),

    /// Represents errors raised while walking the template tree
    #[error("Directory traversal error: {0}.")]
    WalkDirError(#[from] walkdir::Error),

    /// The template directory is missing or unreadable
    #[error("Invalid template name: template directory '{template_dir}' does not exist or is not readable.")]
    TemplateDoesNotExistsError { template_dir: String },

    /// No boilerplate text is bundled for the requested license id
    #[error("Unknown license '{license}'.")]
    UnknownLicenseError { license: String },

    /// An external process ran but reported failure
    #[error("Failed to {action}: process exited with {status}.")]
    CommandFailedError { action: String, status: String },

    /// An external process could not be started at all
    #[error("Failed to run '{program}': {source}.")]
    CommandSpawnError {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Represents validation failures in user input or data
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// Represents errors raised by the interactive prompts
    #[error("Prompt error: {0}.")]
    PromptError(String),
}

/// Convenience type alias for Results with Kiln's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("ERROR {err}");
    std::process::exit(1);
}
