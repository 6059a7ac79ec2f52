//! Generation configuration.

use draft_codegen::{MarkupDialect, StylesheetDialect};
use draft_core::UnitType;
use draft_infer::{BuildOptions, ComponentDetection};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::{keys, load, SettingsStore};

/// Fully resolved settings for one generation request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateConfig {
    pub unit: UnitType,
    pub stylesheet: StylesheetDialect,
    /// Derived from `stylesheet` when unset.
    pub markup: Option<MarkupDialect>,
    pub detection: ComponentDetection,
}

impl GenerateConfig {
    /// Layer `overrides` over the persisted preferences, then defaults.
    ///
    /// Component detection is not persisted; it only comes from `overrides`.
    pub fn resolve(overrides: &ConfigOverrides, store: &dyn SettingsStore) -> Result<Self> {
        let unit = match overrides.unit {
            Some(unit) => unit,
            None => load(store, keys::UNIT_TYPE)?.unwrap_or_default(),
        };
        let stylesheet = match overrides.stylesheet {
            Some(dialect) => dialect,
            None => load(store, keys::CSS_STYLE)?.unwrap_or_default(),
        };
        Ok(Self {
            unit,
            stylesheet,
            markup: overrides.markup,
            detection: overrides.detection.unwrap_or_default(),
        })
    }

    pub fn markup_dialect(&self) -> MarkupDialect {
        self.markup
            .unwrap_or_else(|| self.stylesheet.markup_dialect())
    }

    pub fn build_options(&self) -> BuildOptions {
        BuildOptions::new(self.unit).with_detection(self.detection)
    }
}

/// Per-request settings that win over persisted ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigOverrides {
    pub unit: Option<UnitType>,
    pub stylesheet: Option<StylesheetDialect>,
    pub markup: Option<MarkupDialect>,
    pub detection: Option<ComponentDetection>,
}

impl ConfigOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unit(mut self, unit: UnitType) -> Self {
        self.unit = Some(unit);
        self
    }

    pub fn with_stylesheet(mut self, dialect: StylesheetDialect) -> Self {
        self.stylesheet = Some(dialect);
        self
    }

    pub fn with_markup(mut self, dialect: MarkupDialect) -> Self {
        self.markup = Some(dialect);
        self
    }

    pub fn with_detection(mut self, detection: ComponentDetection) -> Self {
        self.detection = Some(detection);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = GenerateConfig::resolve(&ConfigOverrides::new(), &MemoryStore::new()).unwrap();
        assert_eq!(config, GenerateConfig::default());
        assert_eq!(config.unit, UnitType::Px);
        assert_eq!(config.stylesheet, StylesheetDialect::Css);
        assert_eq!(config.detection, ComponentDetection::Identify);
        assert_eq!(config.markup_dialect(), MarkupDialect::ElementBased);
    }

    #[test]
    fn test_store_then_overrides() {
        let mut store = MemoryStore::new();
        store.set(keys::UNIT_TYPE, json!("remAs10px")).unwrap();
        store.set(keys::CSS_STYLE, json!("styled-components")).unwrap();

        let config = GenerateConfig::resolve(&ConfigOverrides::new(), &store).unwrap();
        assert_eq!(config.unit, UnitType::RemAs10px);
        assert_eq!(config.markup_dialect(), MarkupDialect::ComponentBased);

        let overrides = ConfigOverrides::new()
            .with_unit(UnitType::Rem)
            .with_markup(MarkupDialect::ElementBased)
            .with_detection(ComponentDetection::Ignore);
        let config = GenerateConfig::resolve(&overrides, &store).unwrap();
        assert_eq!(config.unit, UnitType::Rem);
        assert_eq!(config.stylesheet, StylesheetDialect::StyledComponents);
        assert_eq!(config.markup_dialect(), MarkupDialect::ElementBased);
        assert_eq!(config.build_options().detection, ComponentDetection::Ignore);
    }

    #[test]
    fn test_config_serde() {
        let config: GenerateConfig =
            serde_json::from_str(r#"{"unit": "rem", "stylesheet": "tailwind"}"#).unwrap();
        assert_eq!(config.unit, UnitType::Rem);
        assert_eq!(config.stylesheet, StylesheetDialect::Tailwind);
        assert_eq!(config.markup, None);
        insta::assert_json_snapshot!(config, @r#"
        {
          "unit": "rem",
          "stylesheet": "tailwind",
          "markup": null,
          "detection": "identify"
        }
        "#);
    }
}
