//! Stylesheet emitter.

use draft_core::{naming, StyleRecord, Tag};
use serde::{Deserialize, Serialize};

use crate::markup::MarkupDialect;
use crate::utility::{TailwindTranslator, TranslationStatus, UtilityTranslator};

/// Stylesheet output flavor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StylesheetDialect {
    /// Flat class rules for a CSS module.
    #[default]
    Css,
    /// One `styled.div` declaration per record.
    StyledComponents,
    /// Utility classes translated from the flat rules.
    Tailwind,
}

impl StylesheetDialect {
    /// Markup grammar that pairs with this stylesheet.
    pub fn markup_dialect(self) -> MarkupDialect {
        match self {
            Self::StyledComponents => MarkupDialect::ComponentBased,
            Self::Css | Self::Tailwind => MarkupDialect::ElementBased,
        }
    }
}

/// Stylesheet generator.
///
/// The utility dialect delegates to a [`UtilityTranslator`]; the built-in
/// [`TailwindTranslator`] is used unless another one is supplied.
pub struct StylesheetGenerator {
    translator: Box<dyn UtilityTranslator>,
}

impl StylesheetGenerator {
    pub fn new() -> Self {
        Self::with_translator(TailwindTranslator::new())
    }

    pub fn with_translator(translator: impl UtilityTranslator + 'static) -> Self {
        Self {
            translator: Box::new(translator),
        }
    }

    /// Render the stylesheet for a tag tree.
    pub fn generate(&self, tag: &Tag<'_>, dialect: StylesheetDialect) -> String {
        match dialect {
            StylesheetDialect::Css => flat_rules(tag),
            StylesheetDialect::StyledComponents => scoped_rules(tag),
            StylesheetDialect::Tailwind => self.utility_classes(tag),
        }
    }

    fn utility_classes(&self, tag: &Tag<'_>) -> String {
        let outcome = self.translator.translate(&flat_rules(tag));
        if outcome.status != TranslationStatus::Ok {
            tracing::warn!("utility-class translation failed, emitting nothing");
            return String::new();
        }
        outcome
            .results
            .iter()
            .map(|r| r.result_val.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for StylesheetGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Records to emit, in pre-order.
///
/// Component definitions are emitted elsewhere, and instances are opaque, so
/// traversal stops at both. Empty records are dropped.
fn collect_records<'t>(tag: &'t Tag<'_>, records: &mut Vec<&'t StyleRecord>) {
    if tag.is_component_instance || tag.is_component_definition {
        return;
    }
    if !tag.style.is_empty() {
        records.push(&tag.style);
    }
    for child in &tag.children {
        collect_records(child, records);
    }
}

fn records<'t>(tag: &'t Tag<'_>) -> Vec<&'t StyleRecord> {
    let mut records = Vec::new();
    collect_records(tag, &mut records);
    records
}

fn declarations(record: &StyleRecord) -> String {
    record
        .properties
        .iter()
        .map(|p| format!("  {}: {};", p.name, p.value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `.class { ... }` blocks.
pub fn flat_rules(tag: &Tag<'_>) -> String {
    records(tag)
        .into_iter()
        .map(|record| {
            format!(
                ".{} {{\n{}\n}}\n",
                naming::sanitize(&record.class_name),
                declarations(record)
            )
        })
        .collect()
}

/// ``const Class = styled.div`...` `` declarations.
pub fn scoped_rules(tag: &Tag<'_>) -> String {
    records(tag)
        .into_iter()
        .map(|record| {
            format!(
                "const {} = styled.div`\n{}\n`\n",
                naming::strip_whitespace(&record.class_name),
                declarations(record)
            )
        })
        .collect()
}
