//! Style inference: scene node attributes to stylesheet declarations.

use draft_core::{
    format_number, format_px_floor, format_size, Container, CounterAxisAlign, LayoutMode,
    LetterSpacing, LineHeight, NodeKind, Paint, PaintKind, PrimaryAxisAlign, SceneNode,
    SizingMode, StyleProperty, StyleRecord, TextAlignHorizontal, TextAlignVertical,
    TextCounter, TextDecoration, TextNode, UnitType,
};

use crate::classify::{
    has_absolute_descendant, is_absolute_positioned, is_image_like, resolve_border_radius,
};
use crate::color::resolve_color;

/// Placeholder image service used for image-like nodes.
pub const PLACEHOLDER_IMAGE_SERVICE: &str = "https://via.placeholder.com";

/// Ambient position of a node within the traversal.
#[derive(Debug, Clone, Copy)]
pub struct StyleContext<'a> {
    pub unit: UnitType,
    /// Nesting depth; the root is 0.
    pub depth: usize,
    /// Index among the parent's visible children.
    pub sibling_index: usize,
    /// `None` at the root.
    pub parent: Option<&'a SceneNode>,
}

impl<'a> StyleContext<'a> {
    pub fn root(unit: UnitType) -> Self {
        Self {
            unit,
            depth: 0,
            sibling_index: 0,
            parent: None,
        }
    }
}

/// Ordered declaration list under construction.
#[derive(Default)]
struct Declarations(Vec<StyleProperty>);

impl Declarations {
    fn push(&mut self, name: &str, value: impl Into<String>) {
        self.0.push(StyleProperty {
            name: name.to_string(),
            value: value.into(),
        });
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Literal floored pixel size. Zero-size nodes carry no size.
    fn push_literal_size(&mut self, node: &SceneNode) {
        if node.width == 0.0 && node.height == 0.0 {
            return;
        }
        self.push("height", format_px_floor(node.height));
        self.push("width", format_px_floor(node.width));
    }

    fn push_border_radius(&mut self, node: &SceneNode, unit: UnitType) {
        if let Some(radius) = resolve_border_radius(node, unit) {
            self.push("border-radius", radius);
        }
    }

    /// Background from the first fill, unless it is an image or hidden.
    fn push_background(&mut self, fills: &[Paint]) {
        let Some(paint) = fills.first() else {
            return;
        };
        if paint.is_image() || !paint.visible {
            return;
        }
        let value = resolve_color(paint);
        if value.is_empty() {
            return;
        }
        let name = match paint.kind {
            PaintKind::GradientLinear { .. } => "background",
            _ => "background-color",
        };
        self.push(name, value);
    }

    /// Border from the first stroke.
    fn push_border(&mut self, node: &SceneNode, unit: UnitType) {
        let Some(paint) = node.strokes().first() else {
            return;
        };
        let color = resolve_color(paint);
        if color.is_empty() {
            return;
        }
        self.push(
            "border",
            format!("{} solid {}", format_size(node.stroke_weight(), unit), color),
        );
    }
}

fn justify_content(align: PrimaryAxisAlign) -> &'static str {
    match align {
        PrimaryAxisAlign::Min => "flex-start",
        PrimaryAxisAlign::Max => "flex-end",
        PrimaryAxisAlign::Center => "center",
        PrimaryAxisAlign::SpaceBetween => "space-between",
    }
}

fn align_items(align: CounterAxisAlign) -> &'static str {
    match align {
        CounterAxisAlign::Min => "flex-start",
        CounterAxisAlign::Max => "flex-end",
        CounterAxisAlign::Center => "center",
        CounterAxisAlign::Baseline => "baseline",
    }
}

fn text_align(align: TextAlignHorizontal) -> &'static str {
    match align {
        TextAlignHorizontal::Left => "left",
        TextAlignHorizontal::Right => "right",
        TextAlignHorizontal::Center => "center",
        TextAlignHorizontal::Justified => "justify",
    }
}

fn vertical_align(align: TextAlignVertical) -> &'static str {
    match align {
        TextAlignVertical::Top => "top",
        TextAlignVertical::Center => "middle",
        TextAlignVertical::Bottom => "bottom",
    }
}

/// Collapse four paddings (top, right, bottom, left) into the shortest CSS
/// shorthand.
///
/// Four equal paddings give one token, or nothing when they are all zero.
/// Equal vertical and equal horizontal pairs give two tokens. Anything else
/// gives all four.
pub fn padding_shorthand(padding: [f64; 4], unit: UnitType) -> Option<String> {
    let [top, right, bottom, left] = padding;
    if top == right && top == bottom && top == left {
        return (top > 0.0).then(|| format_size(top, unit));
    }
    if top == bottom && left == right {
        return Some(format!("{} {}", format_size(top, unit), format_size(left, unit)));
    }
    Some(
        padding
            .iter()
            .map(|&p| format_size(p, unit))
            .collect::<Vec<_>>()
            .join(" "),
    )
}

fn container_rules(decls: &mut Declarations, node: &SceneNode, layout: &Container, unit: UnitType) {
    decls.push_border_radius(node, unit);

    let (main, cross) = match layout.layout_mode {
        LayoutMode::None => {
            decls.push_literal_size(node);
            decls.push_background(&layout.fills);
            decls.push_border(node, unit);
            return;
        }
        LayoutMode::Horizontal => (("width", node.width), ("height", node.height)),
        LayoutMode::Vertical => (("height", node.height), ("width", node.width)),
    };

    decls.push("display", "flex");
    decls.push(
        "flex-direction",
        if layout.layout_mode == LayoutMode::Horizontal {
            "row"
        } else {
            "column"
        },
    );
    decls.push("justify-content", justify_content(layout.primary_axis_align_items));
    decls.push("align-items", align_items(layout.counter_axis_align_items));
    if node.layout_grow != 0.0 {
        decls.push("flex-grow", format_number(node.layout_grow));
    }
    if layout.primary_axis_sizing_mode == SizingMode::Fixed {
        decls.push(main.0, format_px_floor(main.1));
    }
    if layout.counter_axis_sizing_mode == SizingMode::Fixed {
        decls.push(cross.0, format_px_floor(cross.1));
    }
    if let Some(padding) = padding_shorthand(layout.padding(), unit) {
        decls.push("padding", padding);
    }
    // space-between already distributes the free space
    if layout.primary_axis_align_items != PrimaryAxisAlign::SpaceBetween && layout.item_spacing > 0.0 {
        decls.push("gap", format_size(layout.item_spacing, unit));
    }

    decls.push_background(&layout.fills);
    decls.push_border(node, unit);
}

fn text_rules(decls: &mut Declarations, text: &TextNode, unit: UnitType) {
    decls.push("text-align", text_align(text.text_align_horizontal));
    decls.push("vertical-align", vertical_align(text.text_align_vertical));
    decls.push("font-size", format!("{}px", format_number(text.font_size)));
    if !text.font_name.family.is_empty() {
        decls.push("font-family", text.font_name.family.clone());
    }

    match text.letter_spacing {
        LetterSpacing::Pixels { value } if value != 0.0 => {
            decls.push("letter-spacing", format_size(value, unit))
        }
        LetterSpacing::Percent { value } if value != 0.0 => {
            decls.push("letter-spacing", format!("{}%", format_number(value)))
        }
        LetterSpacing::Pixels { .. } | LetterSpacing::Percent { .. } => {}
    }

    let line_height = match text.line_height {
        LineHeight::Auto => "auto".to_string(),
        LineHeight::Pixels { value } => format_size(value, unit),
        LineHeight::Percent { value } => format!("{}%", format_number(value.round())),
    };
    decls.push("line-height", line_height);

    match text.text_decoration {
        TextDecoration::Underline => decls.push("text-decoration", "underline"),
        TextDecoration::Strikethrough => decls.push("text-decoration", "line-through"),
        TextDecoration::None => {}
    }

    if let Some(paint) = text.fills.first() {
        let color = resolve_color(paint);
        if !color.is_empty() {
            decls.push("color", color);
        }
    }
}

/// Infer the style record of one visible node.
///
/// Class names are `<name><depth><sibling index>` for ordinary nodes,
/// `text<n>` for text, and `<parent name>img<n>` for image-like nodes, where
/// `n` comes from `counter`. The counter only advances when a text or image
/// record is produced.
pub fn infer_style(node: &SceneNode, ctx: &StyleContext<'_>, counter: &mut TextCounter) -> StyleRecord {
    let unit = ctx.unit;
    let mut decls = Declarations::default();

    if is_absolute_positioned(node, ctx.parent) {
        decls.push("position", "absolute");
        decls.push("left", format_size(node.x, unit));
        decls.push("top", format_size(node.y, unit));
    } else if has_absolute_descendant(node) {
        decls.push("position", "relative");
    }

    if !node.is_vector() {
        // An opacity of 0 is indistinguishable from "not declared" on the host.
        if let Some(opacity) = node.opacity.filter(|&o| o > 0.0 && o < 1.0) {
            decls.push("opacity", format_number(opacity));
        }
        if node.rotation != 0.0 {
            decls.push("transform", format!("rotate({}deg)", format_number(node.rotation.floor())));
        }
    }

    if is_image_like(node) {
        tracing::debug!(node = %node.name, "styling as image");
        decls.push(
            "background-image",
            format!(
                "url({}/{}x{})",
                PLACEHOLDER_IMAGE_SERVICE,
                format_number(node.width.round()),
                format_number(node.height.round())
            ),
        );
        decls.push("background-size", "cover");
        let parent_name = ctx.parent.map(|p| p.name.as_str()).unwrap_or_default();
        return StyleRecord::new(format!("{}img{}", parent_name, counter.take()), decls.0);
    }

    match &node.kind {
        NodeKind::Frame(layout) | NodeKind::Instance(layout) | NodeKind::Component(layout) => {
            container_rules(&mut decls, node, layout, unit)
        }
        NodeKind::Rectangle(shape) => {
            decls.push_border_radius(node, unit);
            decls.push_literal_size(node);
            decls.push_background(&shape.fills);
            decls.push_border(node, unit);
        }
        NodeKind::Text(text) => text_rules(&mut decls, text, unit),
        NodeKind::Line(_) => {
            decls.push_literal_size(node);
            decls.push_border(node, unit);
        }
        NodeKind::Group(_)
        | NodeKind::Ellipse(_)
        | NodeKind::Polygon(_)
        | NodeKind::Star(_)
        | NodeKind::Other(_) => decls.push_literal_size(node),
        // Vectors are always image-like.
        NodeKind::Vector(_) => {}
    }

    if decls.is_empty() {
        return StyleRecord::empty();
    }

    let class_name = if node.is_text() {
        format!("text{}", counter.take())
    } else {
        format!("{}{}{}", node.name, ctx.depth, ctx.sibling_index)
    };
    StyleRecord::new(class_name, decls.0)
}
