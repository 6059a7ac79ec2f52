//! Style inference for draft scene graphs.
//!
//! Walks a scene graph and produces the tag tree IR, annotating every visible
//! node with the stylesheet declarations inferred from its geometry, paint,
//! layout, and text attributes.
//!
//! # Example
//!
//! ```
//! use draft_core::{SceneNode, TextCounter, UnitType};
//! use draft_infer::{build_tag_tree, BuildOptions};
//!
//! let scene = SceneNode::frame("Card").with_child(SceneNode::text("Title", "Hello"));
//! let mut counter = TextCounter::new();
//! let tag = build_tag_tree(&scene, &BuildOptions::new(UnitType::Px), &mut counter).unwrap();
//! assert_eq!(tag.children[0].style.class_name, "text1");
//! ```

pub mod build;
pub mod classify;
pub mod color;
pub mod style;

pub use build::{build_tag_tree, BuildOptions, ComponentDetection};
pub use classify::{has_absolute_descendant, is_absolute_positioned, is_image_like, resolve_border_radius};
pub use color::resolve_color;
pub use style::{infer_style, padding_shorthand, StyleContext, PLACEHOLDER_IMAGE_SERVICE};
