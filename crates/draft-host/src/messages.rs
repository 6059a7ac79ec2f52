//! Messages exchanged with the host's settings panel.

use draft_codegen::StylesheetDialect;
use draft_core::UnitType;
use draft_infer::ComponentDetection;
use serde::{Deserialize, Serialize};

use crate::components::UserComponentSetting;
use crate::error::Result;

/// Notice shown after the panel copies generated code.
pub const COPY_SUCCESS_NOTICE: &str = "copied to clipboard👍";

/// Inbound event from the settings panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum UiEvent {
    NotifyCopySuccess,
    NewCssStyleSet {
        css_style: StylesheetDialect,
    },
    NewUnitTypeSet {
        unit_type: UnitType,
    },
    NewIdentifyComponentSet {
        identify: ComponentDetection,
    },
    DownloadFile {
        text: String,
    },
    UpdateUserComponentSettings {
        user_component_settings: Vec<UserComponentSetting>,
    },
}

impl UiEvent {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Outbound payload rendered by the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedOutput {
    pub generated_code_str: String,
    pub css_string: String,
    pub css_style: StylesheetDialect,
    pub unit_type: UnitType,
    pub user_component_settings: Vec<UserComponentSetting>,
}

impl GeneratedOutput {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// What the host should do in response to an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostAction {
    /// Show a transient notice.
    Notify(String),
    /// Post freshly generated code to the panel.
    Render(GeneratedOutput),
    /// Offer `text` as a file download.
    Download { text: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_events() {
        assert_eq!(
            UiEvent::from_json(r#"{"type": "notify-copy-success"}"#).unwrap(),
            UiEvent::NotifyCopySuccess
        );
        assert_eq!(
            UiEvent::from_json(r#"{"type": "new-css-style-set", "cssStyle": "styled-components"}"#).unwrap(),
            UiEvent::NewCssStyleSet {
                css_style: StylesheetDialect::StyledComponents
            }
        );
        assert_eq!(
            UiEvent::from_json(r#"{"type": "new-unit-type-set", "unitType": "remAs10px"}"#).unwrap(),
            UiEvent::NewUnitTypeSet {
                unit_type: UnitType::RemAs10px
            }
        );
        assert_eq!(
            UiEvent::from_json(r#"{"type": "new-identify-component-set", "identify": "0"}"#).unwrap(),
            UiEvent::NewIdentifyComponentSet {
                identify: ComponentDetection::Ignore
            }
        );
        assert_eq!(
            UiEvent::from_json(r#"{"type": "download-file", "text": "<div />"}"#).unwrap(),
            UiEvent::DownloadFile {
                text: "<div />".to_string()
            }
        );

        let event = UiEvent::from_json(
            r#"{"type": "update-user-component-settings", "userComponentSettings": [{"name": "Badge", "props": []}]}"#,
        )
        .unwrap();
        let UiEvent::UpdateUserComponentSettings { user_component_settings } = event else {
            panic!("unexpected event");
        };
        assert_eq!(user_component_settings[0].name, "Badge");
    }

    #[test]
    fn test_unknown_event_is_an_error() {
        assert!(UiEvent::from_json(r#"{"type": "close-plugin"}"#).is_err());
        assert!(UiEvent::from_json(r#"{"type": "new-unit-type-set", "unitType": "em"}"#).is_err());
    }

    #[test]
    fn test_output_shape() {
        let output = GeneratedOutput {
            generated_code_str: "const A = ...".to_string(),
            css_string: ".A00 {}".to_string(),
            css_style: StylesheetDialect::Tailwind,
            unit_type: UnitType::Rem,
            user_component_settings: Vec::new(),
        };
        insta::assert_snapshot!(output.to_json().unwrap(), @r#"{"generatedCodeStr":"const A = ...","cssString":".A00 {}","cssStyle":"tailwind","unitType":"rem","userComponentSettings":[]}"#);
    }
}
