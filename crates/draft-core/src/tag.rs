//! The tag tree: the annotated IR shared by both code emitters.

use serde::{Deserialize, Serialize};

use crate::scene::SceneNode;

/// One `name: value` stylesheet declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleProperty {
    pub name: String,
    pub value: String,
}

/// A generated class name and its ordered declarations.
///
/// A record without declarations is always the empty sentinel: no class name
/// and no properties. Emitters skip it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRecord {
    pub class_name: String,
    pub properties: Vec<StyleProperty>,
}

impl StyleRecord {
    /// The empty sentinel.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(class_name: impl Into<String>, properties: Vec<StyleProperty>) -> Self {
        if properties.is_empty() {
            return Self::empty();
        }
        Self {
            class_name: class_name.into(),
            properties,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Value of the first declaration named `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

/// A markup attribute on a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagAttribute {
    pub name: String,
    /// `None` renders a bare boolean attribute.
    pub value: Option<String>,
    /// Render as `{value}` instead of `"value"`.
    #[serde(default)]
    pub is_raw_expression: bool,
}

impl TagAttribute {
    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            is_raw_expression: false,
        }
    }

    pub fn expression(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            is_raw_expression: true,
        }
    }
}

/// A node of the tag tree.
///
/// Built once per generation request and read-only afterwards. `children`
/// keeps scene order with invisible nodes removed; image tags never have
/// children.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag<'a> {
    /// Sanitized display name (`img` for image tags).
    pub name: String,
    pub is_text: bool,
    pub text_characters: Option<String>,
    pub is_image: bool,
    pub is_component_instance: bool,
    pub is_component_definition: bool,
    pub properties: Vec<TagAttribute>,
    pub style: StyleRecord,
    pub children: Vec<Tag<'a>>,
    /// The scene node this tag was built from.
    pub source: &'a SceneNode,
}

impl<'a> Tag<'a> {
    /// Pre-order traversal over this tag and all descendants.
    pub fn iter(&self) -> TagIter<'_, 'a> {
        TagIter { stack: vec![self] }
    }

    /// Find the first tag (pre-order) with the given name.
    pub fn find(&self, name: &str) -> Option<&Tag<'a>> {
        self.iter().find(|t| t.name == name)
    }
}

/// Pre-order iterator over a tag tree.
pub struct TagIter<'t, 'a> {
    stack: Vec<&'t Tag<'a>>,
}

impl<'t, 'a> Iterator for TagIter<'t, 'a> {
    type Item = &'t Tag<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.stack.pop()?;
        self.stack.extend(tag.children.iter().rev());
        Some(tag)
    }
}

/// Discriminator source for text and image class names.
///
/// One counter lives for exactly one traversal and is threaded through it by
/// `&mut`, so every text/image class name in a tree is unique and numbered in
/// visitation order starting at 1.
#[derive(Debug)]
pub struct TextCounter {
    next: u32,
}

impl TextCounter {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Take the current value and advance.
    pub fn take(&mut self) -> u32 {
        let value = self.next;
        self.next += 1;
        value
    }

    /// The value the next `take` will return.
    pub fn peek(&self) -> u32 {
        self.next
    }
}

impl Default for TextCounter {
    fn default() -> Self {
        Self::new()
    }
}
