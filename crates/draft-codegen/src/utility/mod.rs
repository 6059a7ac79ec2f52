//! Utility-class translation of flat stylesheets.

mod parser;
mod tailwind;

use serde::{Deserialize, Serialize};

pub use parser::{parse_rules, CssRule, Declaration};
pub use tailwind::TailwindTranslator;

/// Whether a translation succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationStatus {
    Ok,
    Error,
}

/// Utility classes for one rule block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatedRule {
    pub selector: String,
    pub result_val: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationOutcome {
    pub status: TranslationStatus,
    pub results: Vec<TranslatedRule>,
}

impl TranslationOutcome {
    pub fn failed() -> Self {
        Self {
            status: TranslationStatus::Error,
            results: Vec::new(),
        }
    }
}

/// Converts flat CSS text into utility classes.
pub trait UtilityTranslator {
    fn translate(&self, css: &str) -> TranslationOutcome;
}

impl<F> UtilityTranslator for F
where
    F: Fn(&str) -> TranslationOutcome,
{
    fn translate(&self, css: &str) -> TranslationOutcome {
        self(css)
    }
}
