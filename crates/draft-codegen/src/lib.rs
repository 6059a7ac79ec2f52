//! Code emitters for draft tag trees.
//!
//! Two independent emitters read the same tag tree:
//!
//! - [`MarkupGenerator`] renders a React function component, either with
//!   plain elements and a CSS-module lookup or with one styled component per
//!   tag.
//! - [`StylesheetGenerator`] renders flat class rules, styled-components
//!   declarations, or utility classes produced by a [`UtilityTranslator`].
//!
//! # Example
//!
//! ```ignore
//! use draft_codegen::{MarkupDialect, MarkupGenerator, StylesheetDialect, StylesheetGenerator};
//!
//! let markup = MarkupGenerator::new()?.generate(&tag, MarkupDialect::ElementBased)?;
//! let css = StylesheetGenerator::new().generate(&tag, StylesheetDialect::Css);
//! ```

pub mod error;
pub mod markup;
pub mod stylesheet;
pub mod templates;
pub mod utility;

pub use error::{CodegenError, Result};
pub use markup::{MarkupDialect, MarkupGenerator};
pub use stylesheet::{StylesheetDialect, StylesheetGenerator};
pub use templates::TemplateEngine;
pub use utility::{
    TailwindTranslator, TranslatedRule, TranslationOutcome, TranslationStatus, UtilityTranslator,
};
