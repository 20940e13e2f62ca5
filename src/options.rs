//! Resolved project options.
//! `CreationOptions` is what the CLI and prompts produce; `TemplateOptions`
//! adds the resolved template directory the pipeline reads from.

use crate::constants::PACKAGE_ID_PATTERN;
use crate::error::{Error, Result};
use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Options collected from flags and prompts, immutable once resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreationOptions {
    /// Template identifier, looked up in the registry
    pub template: String,
    /// Author name
    pub name: String,
    /// Optional username, falls back to `name`
    pub user_name: Option<String>,
    /// Project / extension identifier
    pub id: String,
    pub git: bool,
    pub license: bool,
    pub run_install: bool,
    pub actions: bool,
    /// Destination directory, defaults to the current working directory
    pub target_directory: Option<PathBuf>,
}

impl CreationOptions {
    /// Author identity used in rendered templates.
    pub fn author(&self) -> &str {
        self.user_name.as_deref().filter(|u| !u.is_empty()).unwrap_or(&self.name)
    }
}

/// Options for one pipeline run.
#[derive(Debug, Clone)]
pub struct TemplateOptions {
    pub creation: CreationOptions,
    /// Where the generated project is written
    pub target_directory: PathBuf,
    /// Read-only source tree of the chosen template
    pub template_directory: PathBuf,
    /// License id used by the license step
    pub license_id: String,
    /// Values substituted into template files
    pub placeholders: PlaceholderContext,
}

impl TemplateOptions {
    pub fn new<P: AsRef<Path>>(
        creation: CreationOptions,
        template_directory: P,
        license_id: impl Into<String>,
    ) -> Result<Self> {
        let target_directory = match &creation.target_directory {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };
        let placeholders = PlaceholderContext {
            package_id: creation.id.clone(),
            author: creation.author().to_string(),
        };
        Ok(Self {
            creation,
            placeholders,
            target_directory,
            template_directory: template_directory.as_ref().to_path_buf(),
            license_id: license_id.into(),
        })
    }
}

/// The two variables template files may reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderContext {
    pub package_id: String,
    pub author: String,
}

fn package_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PACKAGE_ID_PATTERN).expect("package id pattern is valid"))
}

/// Checks a project id against the package-name grammar.
pub fn is_valid_package_id(id: &str) -> bool {
    package_id_regex().is_match(id)
}

/// Validates the user-supplied fields before the pipeline is built.
pub fn validate(options: &CreationOptions) -> Result<()> {
    if options.name.trim().is_empty() {
        return Err(Error::ValidationError("name must not be empty".to_string()));
    }
    if !is_valid_package_id(&options.id) {
        return Err(Error::ValidationError(format!(
            "'{}' is not a valid project id",
            options.id
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_falls_back_to_name() {
        let mut options = CreationOptions { name: "Ada".to_string(), ..Default::default() };
        assert_eq!(options.author(), "Ada");

        options.user_name = Some(String::new());
        assert_eq!(options.author(), "Ada");

        options.user_name = Some("ada99".to_string());
        assert_eq!(options.author(), "ada99");
    }

    #[test]
    fn test_package_id_grammar() {
        for id in ["ext", "my-ext", "my.ext_2", "~tilde", "@scope/ext", "@my-org/my.ext"] {
            assert!(is_valid_package_id(id), "{id} should be valid");
        }
        for id in ["", "My-Ext", "has space", "@scope", "@/ext", "a/b", ".hidden", "@Scope/ext"] {
            assert!(!is_valid_package_id(id), "{id} should be invalid");
        }
    }

    #[test]
    fn test_validate_requires_name() {
        let options = CreationOptions { id: "ext".to_string(), ..Default::default() };
        assert!(matches!(validate(&options), Err(Error::ValidationError(_))));

        let options = CreationOptions {
            name: "Ada".to_string(),
            id: "ext".to_string(),
            ..Default::default()
        };
        assert!(validate(&options).is_ok());
    }

    #[test]
    fn test_placeholder_context_serializes_camel_case() {
        let context = PlaceholderContext {
            package_id: "my-ext".to_string(),
            author: "Ada".to_string(),
        };
        let value = serde_json::to_value(&context).unwrap();
        assert_eq!(value, serde_json::json!({"packageId": "my-ext", "author": "Ada"}));
    }
}
