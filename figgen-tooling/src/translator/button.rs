//! Text button extraction.
//!
//! A text button component must contain a `TEXT` node, a `RECTANGLE` node
//! and a node named `buttonShape`. Only the first fill/stroke of each paint
//! list is read, and a single corner radius is taken for all four corners.

use figgen_client::matcher::find_first;
use figgen_client::{Node, NodeKind, Paint, Rect, Rgba};
use serde::Serialize;

use super::TranslateError;

/// Name of the node whose geometry supplies the corner radius.
pub const BUTTON_SHAPE_NAME: &str = "buttonShape";

/// Radii above this are an upstream artifact and treated as zero.
pub const CORNER_RADIUS_SENTINEL: f64 = 99999.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub name: Option<String>,
    pub size: Option<f64>,
}

/// RGBA color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl From<Rgba> for Color {
    fn from(rgba: Rgba) -> Self {
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Insets {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Insets {
    /// Per-edge distance between an outer box and a box nested inside it.
    pub fn between(outer: &Rect, inner: &Rect) -> Self {
        Self {
            top: (outer.y - inner.y).abs(),
            left: (outer.x - inner.x).abs(),
            right: (outer.right() - inner.right()).abs(),
            bottom: (outer.bottom() - inner.bottom()).abs(),
        }
    }
}

/// Template data for one text button.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonConfig {
    pub keyword: String,
    pub title: Option<String>,
    pub font: Option<Font>,
    pub text_color: Option<Color>,
    pub bg_color: Option<Color>,
    pub border_color: Option<Color>,
    pub border_width: Option<f64>,
    pub corner_radius: Option<f64>,
    pub insets: Insets,
}

fn require<'a>(node: &'a Node, kind_or_name: &str) -> Result<&'a Node, TranslateError> {
    find_first(node, kind_or_name).ok_or_else(|| TranslateError::MissingDescendant {
        expected: kind_or_name.to_string(),
        within: node.name.clone(),
    })
}

fn bounding_box(node: &Node) -> Result<&Rect, TranslateError> {
    node.absolute_bounding_box
        .as_ref()
        .ok_or_else(|| TranslateError::MissingBoundingBox {
            node: node.name.clone(),
        })
}

fn first_color(paints: &[Paint]) -> Option<Color> {
    paints.first()?.color.map(Color::from)
}

/// First per-corner radius of `shape`, with the sentinel clamped and zero
/// dropped.
pub fn corner_radius(shape: &Node) -> Option<f64> {
    let radius = shape.rectangle_corner_radii.as_ref()?.first().copied()?;
    let radius = if radius > CORNER_RADIUS_SENTINEL {
        0.0
    } else {
        radius
    };
    (radius != 0.0 && !radius.is_nan()).then_some(radius)
}

pub(crate) fn translate_text_button(
    node: &Node,
    keyword: &str,
) -> Result<ButtonConfig, TranslateError> {
    let text = require(node, NodeKind::Text.as_str())?;
    let rectangle = require(node, NodeKind::Rectangle.as_str())?;
    let shape = require(node, BUTTON_SHAPE_NAME)?;

    let insets = Insets::between(bounding_box(node)?, bounding_box(text)?);

    let font = text.style.as_ref().map(|style| Font {
        name: style.font_post_script_name.clone(),
        size: style.font_size,
    });

    Ok(ButtonConfig {
        keyword: keyword.to_string(),
        title: text.characters.clone(),
        font,
        text_color: first_color(&text.fills),
        bg_color: first_color(&rectangle.fills),
        border_color: first_color(&rectangle.strokes),
        border_width: rectangle.stroke_weight,
        corner_radius: corner_radius(shape),
        insets,
    })
}
