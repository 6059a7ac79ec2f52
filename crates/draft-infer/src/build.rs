//! Tag tree construction.

use draft_core::{naming, NodeKind, SceneNode, Tag, TagAttribute, TextCounter, UnitType};
use serde::{Deserialize, Serialize};

use crate::classify::is_image_like;
use crate::style::{infer_style, StyleContext};

/// Whether instances are kept as opaque component references.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentDetection {
    #[default]
    #[serde(rename = "identify", alias = "1")]
    Identify,
    #[serde(rename = "ignore", alias = "0")]
    Ignore,
}

/// Options for one tree build.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    pub unit: UnitType,
    pub detection: ComponentDetection,
}

impl BuildOptions {
    pub fn new(unit: UnitType) -> Self {
        Self {
            unit,
            detection: ComponentDetection::Identify,
        }
    }

    pub fn with_detection(mut self, detection: ComponentDetection) -> Self {
        self.detection = detection;
        self
    }
}

/// Build the tag tree for `root`.
///
/// Returns `None` when the root is invisible. `counter` should be fresh for
/// every generation request.
pub fn build_tag_tree<'a>(
    root: &'a SceneNode,
    options: &BuildOptions,
    counter: &mut TextCounter,
) -> Option<Tag<'a>> {
    build_tag(root, StyleContext::root(options.unit), options, counter)
}

fn build_tag<'a>(
    node: &'a SceneNode,
    ctx: StyleContext<'a>,
    options: &BuildOptions,
    counter: &mut TextCounter,
) -> Option<Tag<'a>> {
    if !node.visible {
        tracing::debug!(node = %node.name, "pruning invisible node");
        return None;
    }

    let is_image = is_image_like(node);
    let is_root = ctx.parent.is_none();
    let detect = options.detection == ComponentDetection::Identify;
    let style = infer_style(node, &ctx, counter);

    let children = if is_image {
        Vec::new()
    } else {
        node.children()
            .iter()
            .filter(|child| child.visible)
            .enumerate()
            .filter_map(|(index, child)| {
                let child_ctx = StyleContext {
                    unit: ctx.unit,
                    depth: ctx.depth + 1,
                    sibling_index: index,
                    parent: Some(node),
                };
                build_tag(child, child_ctx, options, counter)
            })
            .collect()
    };

    let properties = if is_image {
        vec![TagAttribute::string("src", "")]
    } else {
        Vec::new()
    };

    let text_characters = match &node.kind {
        NodeKind::Text(text) => Some(text.characters.clone()),
        _ => None,
    };

    Some(Tag {
        name: if is_image {
            "img".to_string()
        } else {
            naming::sanitize(&node.name)
        },
        is_text: text_characters.is_some(),
        text_characters,
        is_image,
        is_component_instance: detect && matches!(node.kind, NodeKind::Instance(_)),
        is_component_definition: detect && !is_root && matches!(node.kind, NodeKind::Component(_)),
        properties,
        style,
        children,
        source: node,
    })
}
