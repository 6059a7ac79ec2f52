//! Generation sessions: one selection, its settings, and the UI event loop.

use draft_codegen::{MarkupGenerator, StylesheetGenerator, UtilityTranslator};
use draft_core::{SceneNode, TextCounter};
use draft_infer::{build_tag_tree, ComponentDetection};
use serde::Serialize;

use crate::components::{ComponentIdentifier, NoopIdentifier, UserComponentIdentifier, UserComponentSetting};
use crate::config::{ConfigOverrides, GenerateConfig};
use crate::error::{HostError, Result};
use crate::messages::{GeneratedOutput, HostAction, UiEvent, COPY_SUCCESS_NOTICE};
use crate::storage::{keys, load, SettingsStore};

/// Drives generation for one host selection.
///
/// The selection is fixed for the lifetime of the session. Settings changes
/// arrive as [`UiEvent`]s; each one is persisted to the store and triggers a
/// fresh generation.
pub struct Session<S: SettingsStore> {
    store: S,
    selection: Vec<SceneNode>,
    identifier: Box<dyn ComponentIdentifier>,
    markup: MarkupGenerator<'static>,
    stylesheet: StylesheetGenerator,
    /// Detection mode is session state; it is never persisted.
    detection: ComponentDetection,
    last_config: Option<GenerateConfig>,
}

impl<S: SettingsStore> Session<S> {
    pub fn new(store: S, selection: Vec<SceneNode>) -> Result<Self> {
        Ok(Self {
            store,
            selection,
            identifier: Box::new(NoopIdentifier),
            markup: MarkupGenerator::new()?,
            stylesheet: StylesheetGenerator::new(),
            detection: ComponentDetection::default(),
            last_config: None,
        })
    }

    /// Decode the selection from the host's JSON export.
    pub fn from_selection_json(store: S, json: &str) -> Result<Self> {
        Self::new(store, SceneNode::selection_from_json(json)?)
    }

    /// Run `identifier` after the user-declared components are applied.
    pub fn with_identifier(mut self, identifier: impl ComponentIdentifier + 'static) -> Self {
        self.identifier = Box::new(identifier);
        self
    }

    /// Use `translator` for the utility-class dialect.
    pub fn with_translator(mut self, translator: impl UtilityTranslator + 'static) -> Self {
        self.stylesheet = StylesheetGenerator::with_translator(translator);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Configuration used by the last successful generation.
    pub fn last_config(&self) -> Option<&GenerateConfig> {
        self.last_config.as_ref()
    }

    /// Generate markup and stylesheet for the selected root.
    #[tracing::instrument(skip_all)]
    pub fn generate(&mut self, overrides: &ConfigOverrides) -> Result<GeneratedOutput> {
        let root = match self.selection.as_slice() {
            [root] => root,
            nodes => return Err(HostError::InvalidSelection { count: nodes.len() }),
        };

        let overrides = ConfigOverrides {
            detection: overrides.detection.or(Some(self.detection)),
            ..*overrides
        };
        let config = GenerateConfig::resolve(&overrides, &self.store)?;
        let user_components: Vec<UserComponentSetting> =
            load(&self.store, keys::USER_COMPONENT_SETTINGS)?.unwrap_or_default();
        tracing::debug!(node = %root.name, ?config, "generation started");

        let mut counter = TextCounter::new();
        let tag = build_tag_tree(root, &config.build_options(), &mut counter).ok_or_else(|| {
            HostError::InvisibleRoot {
                name: root.name.clone(),
            }
        })?;
        let tag = UserComponentIdentifier::new(user_components.clone()).identify(tag);
        let tag = self.identifier.identify(tag);

        let output = GeneratedOutput {
            generated_code_str: self.markup.generate(&tag, config.markup_dialect())?,
            css_string: self.stylesheet.generate(&tag, config.stylesheet),
            css_style: config.stylesheet,
            unit_type: config.unit,
            user_component_settings: user_components,
        };
        tracing::debug!(
            markup_len = output.generated_code_str.len(),
            css_len = output.css_string.len(),
            "generation finished"
        );

        self.last_config = Some(config);
        Ok(output)
    }

    /// Apply one panel event.
    pub fn handle(&mut self, event: UiEvent) -> Result<HostAction> {
        let overrides = match event {
            UiEvent::NotifyCopySuccess => return Ok(HostAction::Notify(COPY_SUCCESS_NOTICE.to_string())),
            UiEvent::DownloadFile { text } => return Ok(HostAction::Download { text }),
            UiEvent::NewCssStyleSet { css_style } => {
                self.persist(keys::CSS_STYLE, &css_style)?;
                ConfigOverrides::new().with_stylesheet(css_style)
            }
            UiEvent::NewUnitTypeSet { unit_type } => {
                self.persist(keys::UNIT_TYPE, &unit_type)?;
                ConfigOverrides::new().with_unit(unit_type)
            }
            UiEvent::NewIdentifyComponentSet { identify } => {
                self.detection = identify;
                ConfigOverrides::new().with_detection(identify)
            }
            UiEvent::UpdateUserComponentSettings {
                user_component_settings,
            } => {
                self.persist(keys::USER_COMPONENT_SETTINGS, &user_component_settings)?;
                ConfigOverrides::new()
            }
        };
        Ok(HostAction::Render(self.generate(&overrides)?))
    }

    /// Like [`Session::handle`], but failures become notices for the user.
    pub fn respond(&mut self, event: UiEvent) -> HostAction {
        self.handle(event).unwrap_or_else(|err| {
            tracing::warn!(%err, "event failed");
            HostAction::Notify(err.notice())
        })
    }

    /// Initial render when the panel opens.
    pub fn open(&mut self) -> HostAction {
        match self.generate(&ConfigOverrides::new()) {
            Ok(output) => HostAction::Render(output),
            Err(err) => {
                tracing::warn!(%err, "initial generation failed");
                HostAction::Notify(err.notice())
            }
        }
    }

    fn persist(&mut self, key: &str, value: &impl Serialize) -> Result<()> {
        self.store.set(key, serde_json::to_value(value)?)?;
        tracing::info!(key, "setting saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use draft_codegen::StylesheetDialect;
    use draft_core::UnitType;
    use serde_json::json;

    fn session(selection: Vec<SceneNode>) -> Session<MemoryStore> {
        Session::new(MemoryStore::new(), selection).unwrap()
    }

    #[test]
    fn test_selection_must_be_single() {
        let mut empty = session(Vec::new());
        assert!(matches!(
            empty.generate(&ConfigOverrides::new()),
            Err(HostError::InvalidSelection { count: 0 })
        ));
        assert_eq!(empty.open(), HostAction::Notify("Please select a node".to_string()));

        let mut two = session(vec![SceneNode::frame("A"), SceneNode::frame("B")]);
        assert_eq!(two.open(), HostAction::Notify("Please select only 1 node".to_string()));
    }

    #[test]
    fn test_invisible_root() {
        let mut hidden = session(vec![SceneNode::frame("Gone").hidden()]);
        assert!(matches!(
            hidden.generate(&ConfigOverrides::new()),
            Err(HostError::InvisibleRoot { .. })
        ));
        assert!(hidden.last_config().is_none());
    }

    #[test]
    fn test_settings_events_persist() {
        let mut session = session(vec![SceneNode::frame("Box").with_size(32.0, 16.0)]);

        let HostAction::Render(output) = session
            .handle(UiEvent::NewUnitTypeSet {
                unit_type: UnitType::Rem,
            })
            .unwrap()
        else {
            panic!("expected a render");
        };
        assert_eq!(output.unit_type, UnitType::Rem);
        assert_eq!(session.store().get(keys::UNIT_TYPE).unwrap(), Some(json!("rem")));

        session
            .handle(UiEvent::NewCssStyleSet {
                css_style: StylesheetDialect::StyledComponents,
            })
            .unwrap();
        assert_eq!(
            session.store().get(keys::CSS_STYLE).unwrap(),
            Some(json!("styled-components"))
        );
        // Unit preference survives the dialect change.
        let config = session.last_config().unwrap();
        assert_eq!(config.unit, UnitType::Rem);
        assert_eq!(config.stylesheet, StylesheetDialect::StyledComponents);
    }

    #[test]
    fn test_detection_is_remembered_but_not_persisted() {
        let mut session = session(vec![SceneNode::frame("Page").with_child(SceneNode::instance("Button"))]);
        session
            .handle(UiEvent::NewIdentifyComponentSet {
                identify: ComponentDetection::Ignore,
            })
            .unwrap();
        let output = session.generate(&ConfigOverrides::new()).unwrap();
        assert!(!output.generated_code_str.contains("@/components"));
        assert_eq!(session.last_config().unwrap().detection, ComponentDetection::Ignore);
        assert_eq!(session.store().get("identify").unwrap(), None);
    }

    #[test]
    fn test_pass_through_events() {
        let mut session = session(Vec::new());
        assert_eq!(
            session.handle(UiEvent::NotifyCopySuccess).unwrap(),
            HostAction::Notify(COPY_SUCCESS_NOTICE.to_string())
        );
        assert_eq!(
            session.respond(UiEvent::DownloadFile {
                text: "body".to_string()
            }),
            HostAction::Download {
                text: "body".to_string()
            }
        );
    }

    #[test]
    fn test_custom_identifier_runs_last() {
        fn mark_root(mut tag: draft_core::Tag<'_>) -> draft_core::Tag<'_> {
            tag.name = "Marked".to_string();
            tag
        }
        let mut session = session(vec![SceneNode::frame("Card")]).with_identifier(mark_root);
        let output = session.generate(&ConfigOverrides::new()).unwrap();
        assert!(output.generated_code_str.contains("const Marked: React.FC"));
    }
}
