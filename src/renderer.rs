//! Placeholder rendering for template files.
//! Template files reference `{{packageId}}` and `{{author}}`; anything else
//! renders as an empty string.
//!
//! Only `{{ expression }}` segments are interpreted. Everything outside them,
//! including `{% %}` and `{# #}` sequences, is written through unchanged.

use crate::error::Result;
use crate::options::PlaceholderContext;
use log::warn;
use minijinja::{Environment, UndefinedBehavior};
use regex::Regex;
use std::sync::OnceLock;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;

    /// Renders a template string with the two project placeholders.
    fn render_placeholders(&self, template: &str, context: &PlaceholderContext) -> Result<String> {
        self.render(template, &serde_json::to_value(context)?)
    }
}

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{\s*(.+?)\s*\}\}").expect("placeholder pattern is valid"))
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new renderer that treats unknown names as empty.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Chainable);
        Self { env }
    }

    /// Evaluates one placeholder. Expressions MiniJinja cannot evaluate are
    /// kept verbatim.
    fn interpolate(&self, placeholder: &str, expr: &str, context: &serde_json::Value) -> String {
        let value = self
            .env
            .compile_expression_owned(expr.to_string())
            .and_then(|expression| expression.eval(context));
        match value {
            Ok(value) if value.is_undefined() || value.is_none() => String::new(),
            Ok(value) => value.to_string(),
            Err(e) => {
                warn!("Leaving '{placeholder}' as is: {e}");
                placeholder.to_string()
            }
        }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Replaces every `{{ expression }}` with its value in `context`.
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let mut output = String::with_capacity(template.len());
        let mut last = 0;
        for caps in placeholder_regex().captures_iter(template) {
            let (Some(whole), Some(expr)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            output.push_str(&template[last..whole.start()]);
            output.push_str(&self.interpolate(whole.as_str(), expr.as_str(), context));
            last = whole.end();
        }
        output.push_str(&template[last..]);
        Ok(output)
    }
}
