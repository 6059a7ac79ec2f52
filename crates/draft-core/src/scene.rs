//! The read-only scene graph handed over by the design host.
//!
//! Node kinds form a closed sum type so every rule that dispatches on kind is
//! checked for exhaustiveness. Kinds the host may add later decode to
//! [`NodeKind::Other`], which keeps its children and carries no style. The
//! serde representation follows the host's JSON export: camelCase attribute
//! names and a SCREAMING_SNAKE_CASE `type` discriminator on both nodes and
//! paints.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use smallvec::SmallVec;

use crate::error::{CoreError, Result};

/// Paint list attached to a node. Most nodes carry zero or one paint.
pub type Paints = SmallVec<[Paint; 2]>;

fn default_true() -> bool {
    true
}

/// A node in the design scene graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneNode {
    /// Host identifier, if the export carries one.
    #[serde(default)]
    pub id: String,
    /// Display name as shown in the host's layer list.
    pub name: String,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    /// Rotation in degrees.
    #[serde(default)]
    pub rotation: f64,
    /// Declared opacity; `None` when the kind has no opacity attribute.
    #[serde(default)]
    pub opacity: Option<f64>,
    /// Whether the node opts out of its parent's auto layout.
    #[serde(default)]
    pub layout_positioning: LayoutPositioning,
    /// Flex grow factor inside an auto-layout parent.
    #[serde(default)]
    pub layout_grow: f64,
    /// Kind-specific attributes.
    #[serde(flatten)]
    pub kind: NodeKind,
}

/// Kind-specific node attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Frame(Container),
    Group(Group),
    Rectangle(Shape),
    Ellipse(Shape),
    Polygon(Shape),
    Star(Shape),
    Line(Shape),
    Vector(Shape),
    Text(TextNode),
    Instance(Container),
    Component(Container),
    /// A kind this crate does not model, such as `BOOLEAN_OPERATION` or `SECTION`.
    Other(OtherNode),
}

impl<'de> Deserialize<'de> for NodeKind {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let host_type = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| <D::Error as de::Error>::missing_field("type"))?
            .to_string();
        Self::from_attrs(&host_type, value).map_err(de::Error::custom)
    }
}

impl NodeKind {
    fn from_attrs(host_type: &str, value: Value) -> serde_json::Result<Self> {
        fn attrs<T: DeserializeOwned>(value: Value) -> serde_json::Result<T> {
            serde_json::from_value(value)
        }

        Ok(match host_type {
            "FRAME" => Self::Frame(attrs(value)?),
            "GROUP" => Self::Group(attrs(value)?),
            "RECTANGLE" => Self::Rectangle(attrs(value)?),
            "ELLIPSE" => Self::Ellipse(attrs(value)?),
            "POLYGON" => Self::Polygon(attrs(value)?),
            "STAR" => Self::Star(attrs(value)?),
            "LINE" => Self::Line(attrs(value)?),
            "VECTOR" => Self::Vector(attrs(value)?),
            "TEXT" => Self::Text(attrs(value)?),
            "INSTANCE" => Self::Instance(attrs(value)?),
            "COMPONENT" => Self::Component(attrs(value)?),
            other => {
                let Group { children } = attrs(value)?;
                Self::Other(OtherNode {
                    host_type: other.to_string(),
                    children,
                })
            }
        })
    }

    /// Host name of this kind.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Frame(_) => "FRAME",
            Self::Group(_) => "GROUP",
            Self::Rectangle(_) => "RECTANGLE",
            Self::Ellipse(_) => "ELLIPSE",
            Self::Polygon(_) => "POLYGON",
            Self::Star(_) => "STAR",
            Self::Line(_) => "LINE",
            Self::Vector(_) => "VECTOR",
            Self::Text(_) => "TEXT",
            Self::Instance(_) => "INSTANCE",
            Self::Component(_) => "COMPONENT",
            Self::Other(_) => "OTHER",
        }
    }
}

/// Attributes shared by frames, instances, and component definitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Container {
    pub children: Vec<SceneNode>,
    pub fills: Paints,
    pub strokes: Paints,
    pub stroke_weight: f64,
    pub corner_radius: CornerRadius,
    pub layout_mode: LayoutMode,
    pub primary_axis_align_items: PrimaryAxisAlign,
    pub counter_axis_align_items: CounterAxisAlign,
    pub primary_axis_sizing_mode: SizingMode,
    pub counter_axis_sizing_mode: SizingMode,
    pub padding_top: f64,
    pub padding_right: f64,
    pub padding_bottom: f64,
    pub padding_left: f64,
    pub item_spacing: f64,
}

impl Container {
    /// Padding in top/right/bottom/left order.
    pub fn padding(&self) -> [f64; 4] {
        [
            self.padding_top,
            self.padding_right,
            self.padding_bottom,
            self.padding_left,
        ]
    }
}

/// A plain grouping node with no paint of its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Group {
    pub children: Vec<SceneNode>,
}

/// A node of an unmodelled kind. Only its subtree is kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OtherNode {
    /// The `type` the host reported.
    pub host_type: String,
    pub children: Vec<SceneNode>,
}

/// Attributes of leaf geometry (rectangles, ellipses, lines, vectors, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Shape {
    pub fills: Paints,
    pub strokes: Paints,
    pub stroke_weight: f64,
    pub corner_radius: CornerRadius,
}

/// A text run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextNode {
    pub characters: String,
    pub font_size: f64,
    pub font_name: FontName,
    pub letter_spacing: LetterSpacing,
    pub line_height: LineHeight,
    pub text_align_horizontal: TextAlignHorizontal,
    pub text_align_vertical: TextAlignVertical,
    pub text_decoration: TextDecoration,
    pub fills: Paints,
    pub strokes: Paints,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontName {
    pub family: String,
    pub style: String,
}

/// Letter spacing, tagged by unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LetterSpacing {
    Pixels { value: f64 },
    Percent { value: f64 },
}

impl Default for LetterSpacing {
    fn default() -> Self {
        Self::Pixels { value: 0.0 }
    }
}

/// Line height, tagged by unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineHeight {
    #[default]
    Auto,
    Pixels {
        value: f64,
    },
    Percent {
        value: f64,
    },
}

/// Corner radius: one value for all corners, or one per corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CornerRadius {
    Uniform(f64),
    PerCorner(Corners),
}

impl Default for CornerRadius {
    fn default() -> Self {
        Self::Uniform(0.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Corners {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    #[default]
    None,
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrimaryAxisAlign {
    #[default]
    Min,
    Max,
    Center,
    SpaceBetween,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterAxisAlign {
    #[default]
    Min,
    Max,
    Center,
    Baseline,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SizingMode {
    #[default]
    Fixed,
    Auto,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutPositioning {
    #[default]
    Auto,
    Absolute,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlignHorizontal {
    #[default]
    Left,
    Right,
    Center,
    Justified,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlignVertical {
    #[default]
    Top,
    Center,
    Bottom,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
    Strikethrough,
}

/// A fill or stroke paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    #[serde(flatten)]
    pub kind: PaintKind,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub opacity: Option<f64>,
}

/// Paint kinds understood by style inference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum PaintKind {
    Solid {
        color: Rgb,
    },
    GradientLinear {
        gradient_stops: Vec<ColorStop>,
        /// Row-major 2x3 affine transform `[[a, c, tx], [b, d, ty]]`.
        gradient_transform: [[f64; 3]; 2],
    },
    Image {
        #[serde(default)]
        image_hash: Option<String>,
        #[serde(default)]
        scale_mode: Option<String>,
    },
    /// Radial, angular, diamond, video, and anything newer.
    #[serde(other)]
    Unsupported,
}

/// Color channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub position: f64,
    pub color: Rgba,
}

impl Paint {
    pub fn solid(r: f64, g: f64, b: f64) -> Self {
        Self {
            kind: PaintKind::Solid {
                color: Rgb { r, g, b },
            },
            visible: true,
            opacity: None,
        }
    }

    pub fn linear_gradient(stops: Vec<ColorStop>, transform: [[f64; 3]; 2]) -> Self {
        Self {
            kind: PaintKind::GradientLinear {
                gradient_stops: stops,
                gradient_transform: transform,
            },
            visible: true,
            opacity: None,
        }
    }

    pub fn image() -> Self {
        Self {
            kind: PaintKind::Image {
                image_hash: None,
                scale_mode: Some("FILL".to_string()),
            },
            visible: true,
            opacity: None,
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn is_image(&self) -> bool {
        matches!(self.kind, PaintKind::Image { .. })
    }
}

impl SceneNode {
    fn with_kind(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            visible: true,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            rotation: 0.0,
            opacity: None,
            layout_positioning: LayoutPositioning::Auto,
            layout_grow: 0.0,
            kind,
        }
    }

    pub fn frame(name: impl Into<String>) -> Self {
        Self::with_kind(name, NodeKind::Frame(Container::default()))
    }

    pub fn instance(name: impl Into<String>) -> Self {
        Self::with_kind(name, NodeKind::Instance(Container::default()))
    }

    pub fn component(name: impl Into<String>) -> Self {
        Self::with_kind(name, NodeKind::Component(Container::default()))
    }

    pub fn group(name: impl Into<String>) -> Self {
        Self::with_kind(name, NodeKind::Group(Group::default()))
    }

    pub fn rectangle(name: impl Into<String>) -> Self {
        Self::with_kind(name, NodeKind::Rectangle(Shape::default()))
    }

    pub fn ellipse(name: impl Into<String>) -> Self {
        Self::with_kind(name, NodeKind::Ellipse(Shape::default()))
    }

    pub fn line(name: impl Into<String>) -> Self {
        Self::with_kind(name, NodeKind::Line(Shape::default()))
    }

    pub fn vector(name: impl Into<String>) -> Self {
        Self::with_kind(name, NodeKind::Vector(Shape::default()))
    }

    pub fn text(name: impl Into<String>, characters: impl Into<String>) -> Self {
        Self::with_kind(
            name,
            NodeKind::Text(TextNode {
                characters: characters.into(),
                ..TextNode::default()
            }),
        )
    }

    /// Decode a single node (and its subtree) from the host's JSON export.
    pub fn from_json(json: &str) -> Result<Self> {
        let node: SceneNode = serde_json::from_str(json)?;
        node.validate()?;
        Ok(node)
    }

    /// Decode a selection (a JSON array of nodes).
    pub fn selection_from_json(json: &str) -> Result<Vec<Self>> {
        let nodes: Vec<SceneNode> = serde_json::from_str(json)?;
        for node in &nodes {
            node.validate()?;
        }
        Ok(nodes)
    }

    fn validate(&self) -> Result<()> {
        if self.width < 0.0 || self.height < 0.0 {
            return Err(CoreError::InvalidScene(format!(
                "node '{}' has negative size {}x{}",
                self.name, self.width, self.height
            )));
        }
        self.children().iter().try_for_each(SceneNode::validate)
    }

    /// Child nodes in scene order; empty for leaf kinds.
    pub fn children(&self) -> &[SceneNode] {
        match &self.kind {
            NodeKind::Frame(c) | NodeKind::Instance(c) | NodeKind::Component(c) => &c.children,
            NodeKind::Group(g) => &g.children,
            NodeKind::Other(o) => &o.children,
            NodeKind::Rectangle(_)
            | NodeKind::Ellipse(_)
            | NodeKind::Polygon(_)
            | NodeKind::Star(_)
            | NodeKind::Line(_)
            | NodeKind::Vector(_)
            | NodeKind::Text(_) => &[],
        }
    }

    fn children_mut(&mut self) -> Option<&mut Vec<SceneNode>> {
        match &mut self.kind {
            NodeKind::Frame(c) | NodeKind::Instance(c) | NodeKind::Component(c) => {
                Some(&mut c.children)
            }
            NodeKind::Group(g) => Some(&mut g.children),
            NodeKind::Other(o) => Some(&mut o.children),
            _ => None,
        }
    }

    /// Fill paints; empty for kinds without fills.
    pub fn fills(&self) -> &[Paint] {
        match &self.kind {
            NodeKind::Frame(c) | NodeKind::Instance(c) | NodeKind::Component(c) => &c.fills,
            NodeKind::Rectangle(s)
            | NodeKind::Ellipse(s)
            | NodeKind::Polygon(s)
            | NodeKind::Star(s)
            | NodeKind::Line(s)
            | NodeKind::Vector(s) => &s.fills,
            NodeKind::Text(t) => &t.fills,
            NodeKind::Group(_) | NodeKind::Other(_) => &[],
        }
    }

    /// Stroke paints; empty for kinds without strokes.
    pub fn strokes(&self) -> &[Paint] {
        match &self.kind {
            NodeKind::Frame(c) | NodeKind::Instance(c) | NodeKind::Component(c) => &c.strokes,
            NodeKind::Rectangle(s)
            | NodeKind::Ellipse(s)
            | NodeKind::Polygon(s)
            | NodeKind::Star(s)
            | NodeKind::Line(s)
            | NodeKind::Vector(s) => &s.strokes,
            NodeKind::Text(t) => &t.strokes,
            NodeKind::Group(_) | NodeKind::Other(_) => &[],
        }
    }

    pub fn stroke_weight(&self) -> f64 {
        match &self.kind {
            NodeKind::Frame(c) | NodeKind::Instance(c) | NodeKind::Component(c) => c.stroke_weight,
            NodeKind::Rectangle(s)
            | NodeKind::Ellipse(s)
            | NodeKind::Polygon(s)
            | NodeKind::Star(s)
            | NodeKind::Line(s)
            | NodeKind::Vector(s) => s.stroke_weight,
            NodeKind::Text(_) | NodeKind::Group(_) | NodeKind::Other(_) => 0.0,
        }
    }

    /// Layout attributes, for frames, instances, and component definitions.
    pub fn container(&self) -> Option<&Container> {
        match &self.kind {
            NodeKind::Frame(c) | NodeKind::Instance(c) | NodeKind::Component(c) => Some(c),
            _ => None,
        }
    }

    fn container_mut(&mut self) -> Option<&mut Container> {
        match &mut self.kind {
            NodeKind::Frame(c) | NodeKind::Instance(c) | NodeKind::Component(c) => Some(c),
            _ => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, NodeKind::Text(_))
    }

    pub fn is_vector(&self) -> bool {
        matches!(self.kind, NodeKind::Vector(_))
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, NodeKind::Group(_))
    }

    /// Append a child. Ignored for leaf kinds.
    pub fn with_child(mut self, child: SceneNode) -> Self {
        if let Some(children) = self.children_mut() {
            children.push(child);
        }
        self
    }

    /// Append a fill. Ignored for groups.
    pub fn with_fill(mut self, paint: Paint) -> Self {
        match &mut self.kind {
            NodeKind::Frame(c) | NodeKind::Instance(c) | NodeKind::Component(c) => {
                c.fills.push(paint)
            }
            NodeKind::Rectangle(s)
            | NodeKind::Ellipse(s)
            | NodeKind::Polygon(s)
            | NodeKind::Star(s)
            | NodeKind::Line(s)
            | NodeKind::Vector(s) => s.fills.push(paint),
            NodeKind::Text(t) => t.fills.push(paint),
            NodeKind::Group(_) | NodeKind::Other(_) => {}
        }
        self
    }

    /// Append a stroke and set the stroke weight. Ignored for groups and text.
    pub fn with_stroke(mut self, paint: Paint, weight: f64) -> Self {
        match &mut self.kind {
            NodeKind::Frame(c) | NodeKind::Instance(c) | NodeKind::Component(c) => {
                c.strokes.push(paint);
                c.stroke_weight = weight;
            }
            NodeKind::Rectangle(s)
            | NodeKind::Ellipse(s)
            | NodeKind::Polygon(s)
            | NodeKind::Star(s)
            | NodeKind::Line(s)
            | NodeKind::Vector(s) => {
                s.strokes.push(paint);
                s.stroke_weight = weight;
            }
            NodeKind::Text(_) | NodeKind::Group(_) | NodeKind::Other(_) => {}
        }
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn absolute(mut self) -> Self {
        self.layout_positioning = LayoutPositioning::Absolute;
        self
    }

    /// Set the corner radius. Ignored for kinds without corners.
    pub fn with_corner_radius(mut self, radius: CornerRadius) -> Self {
        match &mut self.kind {
            NodeKind::Frame(c) | NodeKind::Instance(c) | NodeKind::Component(c) => {
                c.corner_radius = radius
            }
            NodeKind::Rectangle(s) => s.corner_radius = radius,
            _ => {}
        }
        self
    }

    /// Apply an edit to the layout attributes. Ignored for non-containers.
    pub fn with_layout(mut self, edit: impl FnOnce(&mut Container)) -> Self {
        if let Some(container) = self.container_mut() {
            edit(container);
        }
        self
    }

    /// Apply an edit to the text attributes. Ignored for non-text kinds.
    pub fn with_text(mut self, edit: impl FnOnce(&mut TextNode)) -> Self {
        if let NodeKind::Text(text) = &mut self.kind {
            edit(text);
        }
        self
    }
}
