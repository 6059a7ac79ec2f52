//! Single-node predicates used by style inference and tree building.

use draft_core::{
    format_size, CornerRadius, LayoutMode, LayoutPositioning, NodeKind, SceneNode, UnitType,
};

/// Whether a node should be emitted as an opaque image instead of being
/// unpacked into nested elements.
///
/// A node is image-like when it is
/// - a vector leaf,
/// - a node whose children are all vectors or groups, with at least one
///   vector among them (vector art wrapped in a frame or group), or
/// - a non-text node with a visible image paint anywhere in its fills.
pub fn is_image_like(node: &SceneNode) -> bool {
    if node.is_vector() {
        return true;
    }

    let children = node.children();
    if !children.is_empty() {
        let only_vector_art = children.iter().all(|c| c.is_vector() || c.is_group());
        let has_vector = children.iter().any(SceneNode::is_vector);
        if only_vector_art && has_vector {
            return true;
        }
    }

    !node.is_text() && node.fills().iter().any(|p| p.is_image() && p.visible)
}

/// Containers placing their children manually (no auto layout).
fn places_children_manually(node: &SceneNode) -> bool {
    node.container()
        .is_some_and(|c| c.layout_mode == LayoutMode::None)
}

/// Whether a node is taken out of flow relative to its parent.
///
/// `parent` is `None` at the root, which is never absolutely positioned.
pub fn is_absolute_positioned(node: &SceneNode, parent: Option<&SceneNode>) -> bool {
    let Some(parent) = parent else {
        return false;
    };
    node.visible
        && (node.layout_positioning == LayoutPositioning::Absolute
            || places_children_manually(parent))
}

/// Whether any direct child is absolutely positioned, making this node the
/// positioning anchor.
pub fn has_absolute_descendant(node: &SceneNode) -> bool {
    node.children()
        .iter()
        .any(|child| is_absolute_positioned(child, Some(node)))
}

/// Border radius value, or `None` when every corner is square.
///
/// Frames, instances, component definitions, and rectangles carry corners;
/// other kinds always return `None`.
pub fn resolve_border_radius(node: &SceneNode, unit: UnitType) -> Option<String> {
    let radius = match &node.kind {
        NodeKind::Frame(c) | NodeKind::Instance(c) | NodeKind::Component(c) => c.corner_radius,
        NodeKind::Rectangle(s) => s.corner_radius,
        _ => return None,
    };

    match radius {
        CornerRadius::Uniform(r) if r == 0.0 => None,
        CornerRadius::Uniform(r) => Some(format_size(r, unit)),
        CornerRadius::PerCorner(c) => {
            let corners = [c.top_left, c.top_right, c.bottom_right, c.bottom_left];
            if corners.iter().all(|&r| r == corners[0]) {
                return (corners[0] != 0.0).then(|| format_size(corners[0], unit));
            }
            Some(
                corners
                    .iter()
                    .map(|&r| format_size(r, unit))
                    .collect::<Vec<_>>()
                    .join(" "),
            )
        }
    }
}
