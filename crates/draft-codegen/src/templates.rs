//! Template engine for the component wrapper.

use crate::error::{CodegenError, Result};
use draft_core::naming;
use handlebars::{handlebars_helper, Handlebars};
use serde::Serialize;

handlebars_helper!(capitalize: |s: str| naming::capitalize_first(s));
handlebars_helper!(sanitize: |s: str| naming::sanitize(s));

/// Template engine using Handlebars.
///
/// Output is source code, not HTML, so escaping is disabled.
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Create a new template engine.
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.register_helper("capitalize", Box::new(capitalize));
        handlebars.register_helper("sanitize", Box::new(sanitize));
        Self { handlebars }
    }

    /// Register a template.
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(CodegenError::InvalidTemplate)?;
        Ok(())
    }

    /// Render a registered template.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        self.handlebars
            .render(name, data)
            .map_err(CodegenError::TemplateError)
    }
}

impl Default for TemplateEngine<'_> {
    fn default() -> Self {
        Self::new()
    }
}
