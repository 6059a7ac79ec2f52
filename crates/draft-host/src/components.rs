//! Component identification: rewriting matched tags into component references.
//!
//! Identification runs between tree construction and code generation. It may
//! replace any non-root subtree with an instance tag; the emitters then import
//! and reference that component by name instead of expanding it.

use draft_core::{naming, Tag, TagAttribute};
use serde::{Deserialize, Serialize};

/// Rewrites a tag tree before it reaches the emitters.
pub trait ComponentIdentifier {
    fn identify<'a>(&self, tag: Tag<'a>) -> Tag<'a>;
}

impl<F> ComponentIdentifier for F
where
    F: for<'a> Fn(Tag<'a>) -> Tag<'a>,
{
    fn identify<'a>(&self, tag: Tag<'a>) -> Tag<'a> {
        self(tag)
    }
}

/// Leaves the tree untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopIdentifier;

impl ComponentIdentifier for NoopIdentifier {
    fn identify<'a>(&self, tag: Tag<'a>) -> Tag<'a> {
        tag
    }
}

/// A prop passed to a user-declared component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentProp {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub is_raw_expression: bool,
}

impl From<&ComponentProp> for TagAttribute {
    fn from(prop: &ComponentProp) -> Self {
        if prop.is_raw_expression {
            TagAttribute::expression(&prop.name, &prop.value)
        } else {
            TagAttribute::string(&prop.name, &prop.value)
        }
    }
}

/// A user-declared component: layers with this name render as a reference to
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserComponentSetting {
    pub name: String,
    #[serde(default)]
    pub props: Vec<ComponentProp>,
}

/// Applies persisted [`UserComponentSetting`]s.
///
/// A tag matches a setting when either its layer name or its sanitized tag
/// name equals the setting's name. The root is never replaced, and existing
/// instances are not searched.
#[derive(Debug, Clone, Default)]
pub struct UserComponentIdentifier {
    settings: Vec<UserComponentSetting>,
}

impl UserComponentIdentifier {
    pub fn new(settings: Vec<UserComponentSetting>) -> Self {
        Self { settings }
    }

    fn setting_for(&self, tag: &Tag<'_>) -> Option<&UserComponentSetting> {
        self.settings
            .iter()
            .find(|s| s.name == tag.source.name || s.name == tag.name)
    }

    fn rewrite_children(&self, tag: &mut Tag<'_>) {
        for child in &mut tag.children {
            if child.is_component_instance {
                continue;
            }
            if let Some(setting) = self.setting_for(child) {
                tracing::debug!(component = %setting.name, "replacing layer with user component");
                child.name = naming::sanitize(&setting.name);
                child.is_component_instance = true;
                child.is_component_definition = false;
                child.is_image = false;
                child.properties = setting.props.iter().map(TagAttribute::from).collect();
                child.children.clear();
            } else {
                self.rewrite_children(child);
            }
        }
    }
}

impl ComponentIdentifier for UserComponentIdentifier {
    fn identify<'a>(&self, mut tag: Tag<'a>) -> Tag<'a> {
        if !self.settings.is_empty() {
            self.rewrite_children(&mut tag);
        }
        tag
    }
}
