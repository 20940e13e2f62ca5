//! Interactive collection of the options the command line left out.

use crate::cli::Args;
use crate::constants::DEFAULT_TEMPLATE;
use crate::error::{Error, Result};
use crate::options::{is_valid_package_id, validate, CreationOptions};
use crate::registry::template_ids;
use dialoguer::{Confirm, Input, Select};

/// Validates one line of user input, returning a message on rejection.
pub type InputValidator = fn(&str) -> std::result::Result<(), String>;

/// Source of answers for the questionnaire.
pub trait Prompter {
    /// Asks the user to pick one of `items`, returning its index.
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize>;

    /// Asks a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;

    /// Asks for a line of text. Empty answers are accepted only when
    /// `allow_empty` is set; `validator` runs on every non-empty answer.
    fn input(&self, prompt: &str, allow_empty: bool, validator: Option<InputValidator>)
        -> Result<String>;
}

/// Terminal prompts backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn input(
        &self,
        prompt: &str,
        allow_empty: bool,
        validator: Option<InputValidator>,
    ) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(allow_empty);
        if let Some(validator) = validator {
            input = input.validate_with(move |value: &String| -> std::result::Result<(), String> {
                if value.is_empty() {
                    return Ok(());
                }
                validator(value)
            });
        }
        input.interact_text().map_err(|e| Error::PromptError(e.to_string()))
    }
}

fn validate_name(input: &str) -> std::result::Result<(), String> {
    if input.trim().is_empty() {
        Err("Please enter a name".to_string())
    } else {
        Ok(())
    }
}

fn validate_package_id(input: &str) -> std::result::Result<(), String> {
    if is_valid_package_id(input) {
        Ok(())
    } else {
        Err("Use lowercase letters, digits and -._~, optionally scoped as @scope/name".to_string())
    }
}

/// Fills template, git, license and actions from flags or prompts.
fn prompt_for_missing_options(args: &Args, prompter: &dyn Prompter) -> Result<CreationOptions> {
    let mut options = CreationOptions {
        template: args.template.clone().unwrap_or_default(),
        git: args.git,
        license: args.license,
        run_install: args.run_install,
        actions: args.actions,
        target_directory: args.output_dir.clone(),
        ..Default::default()
    };

    if args.skip_prompts {
        if options.template.is_empty() {
            options.template = DEFAULT_TEMPLATE.to_string();
        }
        return Ok(options);
    }

    if options.template.is_empty() {
        let choices = template_ids();
        let default = choices.iter().position(|id| *id == DEFAULT_TEMPLATE).unwrap_or(0);
        let selection =
            prompter.select("Please choose which project template to use", &choices, default)?;
        options.template = choices[selection].to_string();
    }
    if !options.git {
        options.git = prompter.confirm("Initialize a git repository?", false)?;
    }
    if !options.license {
        options.license = prompter.confirm("Install MIT license files?", false)?;
    }
    if !options.actions {
        options.actions = prompter.confirm("Create a GitHub Actions workflow?", false)?;
    }
    Ok(options)
}

/// Fills name, username and project id from flags or prompts.
fn prompt_for_user_details(
    args: &Args,
    mut options: CreationOptions,
    prompter: &dyn Prompter,
) -> Result<CreationOptions> {
    options.name = match &args.name {
        Some(name) => name.clone(),
        None => prompter.input("Please enter your name", false, Some(validate_name))?,
    };
    options.user_name = match &args.user_name {
        Some(user_name) => Some(user_name.clone()),
        None => Some(prompter.input("[Optional] Enter your username", true, None)?),
    }
    .filter(|u| !u.trim().is_empty());
    options.id = match &args.id {
        Some(id) => id.clone(),
        None => prompter.input(
            "Enter an ID for your extension",
            false,
            Some(validate_package_id),
        )?,
    };
    Ok(options)
}

/// Resolves the full set of creation options, prompting for anything the
/// command line did not provide.
///
/// # Errors
/// * `Error::PromptError` if the terminal interaction fails
/// * `Error::ValidationError` if a flag value breaks the name or id rules
pub fn resolve_options(args: &Args, prompter: &dyn Prompter) -> Result<CreationOptions> {
    let options = prompt_for_missing_options(args, prompter)?;
    let options = prompt_for_user_details(args, options, prompter)?;
    validate(&options)?;
    Ok(options)
}
