//! Renders the template files of one template subdirectory into the target.

use crate::error::Result;
use crate::options::PlaceholderContext;
use crate::renderer::TemplateRenderer;
use crate::resolver::list_entries;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Renders `.hbs` files from one template subdirectory into the project.
pub struct Materializer<'a> {
    renderer: &'a dyn TemplateRenderer,
    template_dir: &'a Path,
    target_dir: &'a Path,
    context: &'a PlaceholderContext,
}

impl<'a> Materializer<'a> {
    pub fn new(
        renderer: &'a dyn TemplateRenderer,
        template_dir: &'a Path,
        target_dir: &'a Path,
        context: &'a PlaceholderContext,
    ) -> Self {
        Self { renderer, template_dir, target_dir, context }
    }

    /// Renders the template files found directly in `template_dir/subpath`.
    ///
    /// Output goes to `target_dir/dest_override` when given, otherwise to
    /// `target_dir/subpath`. Rendered files replace any file of the same name;
    /// non-template files are left to the bulk copy.
    ///
    /// # Returns
    /// * `Result<Vec<PathBuf>>` - Paths of the files written
    pub fn materialize(&self, subpath: &str, dest_override: Option<&str>) -> Result<Vec<PathBuf>> {
        let src_dir = self.template_dir.join(subpath);
        let dst_dir = self.target_dir.join(dest_override.unwrap_or(subpath));

        if !dst_dir.exists() {
            debug!("Creating directory: {}", dst_dir.display());
            fs::create_dir_all(&dst_dir)?;
        }

        let mut written = Vec::new();
        for entry in list_entries(&src_dir)?.into_iter().filter(|e| e.is_template) {
            let content = fs::read_to_string(src_dir.join(&entry.name))?;
            let rendered = self.renderer.render_placeholders(&content, self.context)?;
            let target = dst_dir.join(entry.output_name());
            debug!("Writing file: {}", target.display());
            fs::write(&target, rendered)?;
            written.push(target);
        }
        Ok(written)
    }
}
