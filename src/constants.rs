//! Common constants used throughout the Kiln application.

/// Suffix marking a file as a template that needs placeholder substitution
pub const TEMPLATE_SUFFIX: &str = ".hbs";

/// Glob excluding every template file from the bulk copy
pub const TEMPLATE_GLOB: &str = "**/*.hbs";

/// Name of the ignore file the ignore-file step appends to
pub const IGNORE_FILE: &str = ".gitignore";

/// Name of the license file written into the project root
pub const LICENSE_FILE: &str = "LICENSE";

/// Template subdirectory holding the CI workflow templates
pub const WORKFLOW_SOURCE_DIR: &str = ".github";

/// Destination of the rendered CI workflow files
pub const WORKFLOW_TARGET_DIR: &str = ".github/workflows";

/// Template used when none was given and prompts are skipped
pub const DEFAULT_TEMPLATE: &str = "TypeScript";

/// License written when the license step is enabled
pub const DEFAULT_LICENSE: &str = "MIT";

/// Metadata file named in the summary when the template has no registry entry
pub const FALLBACK_META_FILE: &str = "info.json";

/// Environment variable overriding the template root directory
pub const TEMPLATES_DIR_ENV: &str = "KILN_TEMPLATES_DIR";

/// Grammar every project id must satisfy, optionally scoped as `@scope/name`
pub const PACKAGE_ID_PATTERN: &str = r"^(@[a-z0-9-~][a-z0-9-._~]*/)?[a-z0-9-~][a-z0-9-._~]*$";
