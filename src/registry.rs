//! Fixed registry of the templates Kiln ships.
//! Template specific behaviour is plain data keyed by template id; adding a
//! template means adding a row here and a directory under `templates/`.

use crate::constants::FALLBACK_META_FILE;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Post-generation hints for one template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateInfo {
    /// Identifier the user selects
    pub id: &'static str,
    /// File the user should review once the project is generated
    pub meta_file: &'static str,
    /// Extra caution shown after generation
    pub message: Option<&'static str>,
}

impl TemplateInfo {
    /// Name of the template's directory below the template root.
    pub fn directory_name(&self) -> String {
        self.id.to_lowercase()
    }
}

pub const TEMPLATES: &[TemplateInfo] = &[
    TemplateInfo { id: "TypeScript", meta_file: "package.json", message: None },
    TemplateInfo {
        id: "JavaScript",
        meta_file: "info.json",
        message: Some("JavaScript projects have no package manifest, so their metadata must be set manually in info.json."),
    },
];

/// Looks a template up by id.
pub fn lookup(id: &str) -> Option<&'static TemplateInfo> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// Template ids in registry order, used as prompt choices.
pub fn template_ids() -> Vec<&'static str> {
    TEMPLATES.iter().map(|t| t.id).collect()
}

/// Metadata file and optional message to show in the final summary.
pub fn summary_hints(id: &str) -> (&'static str, Option<&'static str>) {
    match lookup(id) {
        Some(info) => (info.meta_file, info.message),
        None => (FALLBACK_META_FILE, None),
    }
}

/// Resolves the source tree for a template id below `templates_root`.
///
/// Ids without a registry row still resolve to their lower-cased directory so
/// that a template dropped into the root is usable; whether it exists is
/// checked once, before the pipeline starts.
pub fn template_directory<P: AsRef<Path>>(templates_root: P, id: &str) -> PathBuf {
    let dir_name = match lookup(id) {
        Some(info) => info.directory_name(),
        None => id.to_lowercase(),
    };
    templates_root.as_ref().join(dir_name)
}

/// Fails with a precondition error unless `dir` is a readable directory.
pub fn ensure_template_directory<P: AsRef<Path>>(dir: P) -> Result<()> {
    let dir = dir.as_ref();
    let readable = dir.is_dir() && std::fs::read_dir(dir).is_ok();
    if !readable {
        return Err(Error::TemplateDoesNotExistsError {
            template_dir: dir.display().to_string(),
        });
    }
    Ok(())
}

/// Root directory holding the bundled templates.
pub fn default_templates_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates")
}
