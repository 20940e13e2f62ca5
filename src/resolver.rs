//! Classification of template directory entries.
//! A file whose name ends in `.hbs` is rendered and written without the
//! suffix; everything else is left to the bulk copy.

use crate::constants::TEMPLATE_SUFFIX;
use crate::error::Result;
use log::debug;
use std::fs;
use std::path::Path;

/// One file found in a template directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    /// File name as found in the template directory
    pub name: String,
    /// Whether the file needs placeholder substitution
    pub is_template: bool,
}

impl TemplateEntry {
    pub fn new<S: Into<String>>(name: S) -> Self {
        let name = name.into();
        let is_template = is_template_file(&name);
        Self { name, is_template }
    }

    /// Name the entry is written under in the target directory.
    pub fn output_name(&self) -> &str {
        output_name(&self.name)
    }
}

/// Returns true when the file name carries the template suffix.
pub fn is_template_file(name: &str) -> bool {
    name.len() > TEMPLATE_SUFFIX.len() && name.ends_with(TEMPLATE_SUFFIX)
}

/// Strips the template suffix, leaving other names untouched.
pub fn output_name(name: &str) -> &str {
    if is_template_file(name) {
        &name[..name.len() - TEMPLATE_SUFFIX.len()]
    } else {
        name
    }
}

/// Lists the files directly inside `dir`, classified.
///
/// Subdirectories are not descended into; callers request them explicitly.
/// Entries are sorted by name so repeated runs behave the same.
pub fn list_entries<P: AsRef<Path>>(dir: P) -> Result<Vec<TemplateEntry>> {
    let dir = dir.as_ref();
    let mut entries = Vec::new();
    for dir_entry in fs::read_dir(dir)? {
        let dir_entry = dir_entry?;
        if !dir_entry.file_type()?.is_file() {
            continue;
        }
        let Some(name) = dir_entry.file_name().to_str().map(str::to_string) else {
            debug!("Skipping non UTF-8 file name in {}", dir.display());
            continue;
        };
        entries.push(TemplateEntry::new(name));
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
