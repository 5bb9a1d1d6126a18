//! Figma file document model.
//!
//! Only the fields the generator reads are modeled; everything else in the
//! REST payload is ignored during deserialization. Nodes are read-only once
//! deserialized.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Top-level response of `GET /v1/files/:key`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaFile {
    #[serde(default)]
    pub name: String,
    pub last_modified: Option<String>,
    pub version: Option<String>,
    pub document: Node,
}

/// Figma node type tag.
///
/// Unknown tags are kept verbatim in [`NodeKind::Other`] so newer API
/// payloads still deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    Document,
    Canvas,
    Frame,
    Group,
    Section,
    Component,
    ComponentSet,
    Instance,
    Rectangle,
    Ellipse,
    Line,
    Star,
    RegularPolygon,
    Vector,
    BooleanOperation,
    Text,
    Slice,
    Other(String),
}

impl NodeKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Document => "DOCUMENT",
            Self::Canvas => "CANVAS",
            Self::Frame => "FRAME",
            Self::Group => "GROUP",
            Self::Section => "SECTION",
            Self::Component => "COMPONENT",
            Self::ComponentSet => "COMPONENT_SET",
            Self::Instance => "INSTANCE",
            Self::Rectangle => "RECTANGLE",
            Self::Ellipse => "ELLIPSE",
            Self::Line => "LINE",
            Self::Star => "STAR",
            Self::RegularPolygon => "REGULAR_POLYGON",
            Self::Vector => "VECTOR",
            Self::BooleanOperation => "BOOLEAN_OPERATION",
            Self::Text => "TEXT",
            Self::Slice => "SLICE",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for NodeKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "DOCUMENT" => Self::Document,
            "CANVAS" => Self::Canvas,
            "FRAME" => Self::Frame,
            "GROUP" => Self::Group,
            "SECTION" => Self::Section,
            "COMPONENT" => Self::Component,
            "COMPONENT_SET" => Self::ComponentSet,
            "INSTANCE" => Self::Instance,
            "RECTANGLE" => Self::Rectangle,
            "ELLIPSE" => Self::Ellipse,
            "LINE" => Self::Line,
            "STAR" => Self::Star,
            "REGULAR_POLYGON" => Self::RegularPolygon,
            "VECTOR" => Self::Vector,
            "BOOLEAN_OPERATION" => Self::BooleanOperation,
            "TEXT" => Self::Text,
            "SLICE" => Self::Slice,
            _ => Self::Other(tag),
        }
    }
}

impl From<&str> for NodeKind {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of the document tree. Children are owned by their parent.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub children: Vec<Node>,
    pub absolute_bounding_box: Option<Rect>,

    /// Text content (`TEXT` nodes).
    pub characters: Option<String>,
    /// Text style (`TEXT` nodes).
    pub style: Option<TypeStyle>,

    #[serde(default)]
    pub fills: Vec<Paint>,
    #[serde(default)]
    pub strokes: Vec<Paint>,
    pub stroke_weight: Option<f64>,

    /// Per-corner radii, top-left first.
    pub rectangle_corner_radii: Option<Vec<f64>>,
    pub corner_radius: Option<f64>,
}

impl Node {
    /// True when either the type tag or the display name equals `target`.
    pub fn is_kind_or_named(&self, target: &str) -> bool {
        self.kind.as_str() == target || self.name == target
    }
}

/// Absolute bounding box in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    pub font_family: Option<String>,
    pub font_post_script_name: Option<String>,
    pub font_weight: Option<f64>,
    pub font_size: Option<f64>,
}

/// A fill or stroke layer. Only solid paints carry a `color`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Paint {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    pub opacity: Option<f64>,
    pub color: Option<Rgba>,
}

fn default_visible() -> bool {
    true
}

/// RGBA channels, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "default_alpha")]
    pub a: f64,
}

fn default_alpha() -> f64 {
    1.0
}
