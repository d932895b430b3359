//! Extraction of drawable shapes from an SVG document.
//!
//! Only a handful of basic elements are understood, and attributes are read
//! directly from each element: there is no inheritance from groups, no CSS
//! and no transforms. Missing geometry defaults to zero, and missing paint
//! defaults to `none`.

mod xml;

use std::str::FromStr;

use itertools::Itertools;

use crate::colour::Paint;
use crate::errors::{Error, Result};
use crate::types::{attr_split, strp, strp_length, AttrMap};

/// An XML element name with its (unescaped) attributes
#[derive(Debug, Clone, PartialEq)]
pub struct RawElement {
    pub name: String,
    pub attrs: AttrMap,
    pub src_line: usize,
}

impl RawElement {
    pub fn new(name: &str, attrs: &[(&str, &str)]) -> Self {
        Self {
            name: name.to_string(),
            attrs: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            src_line: 0,
        }
    }

    fn parse_err(&self, key: &str, value: &str, err: Error) -> Error {
        let reason = match err {
            Error::Parse(reason) => reason,
            other => other.to_string(),
        };
        Error::Parse(format!(
            "line {}: <{} {key}=\"{value}\">: {reason}",
            self.src_line, self.name
        ))
    }

    /// Numeric attribute, or `default` if not present
    fn number(&self, key: &str, default: f32) -> Result<f32> {
        match self.attrs.get(key) {
            Some(value) => strp(value).map_err(|e| self.parse_err(key, value, e)),
            None => Ok(default),
        }
    }

    fn paint(&self, key: &str, value: Option<&str>) -> Result<Paint> {
        match value {
            Some(value) => Paint::from_str(value).map_err(|e| self.parse_err(key, value, e)),
            None => Ok(Paint::None),
        }
    }

    /// Value from a `style="name: value; ..."` declaration if present,
    /// otherwise the attribute itself.
    fn presentation_attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .get("style")
            .and_then(|style| {
                style.split(';').find_map(|decl| {
                    let (name, value) = decl.split_once(':')?;
                    (name.trim() == key).then(|| value.trim())
                })
            })
            .or_else(|| self.attrs.get(key))
    }

    fn points(&self) -> Result<Vec<(f32, f32)>> {
        let Some(value) = self.attrs.get("points") else {
            return Ok(Vec::new());
        };
        let numbers: Vec<f32> = attr_split(value)
            .map(|v| strp(&v))
            .collect::<Result<_>>()
            .map_err(|e| self.parse_err("points", value, e))?;
        // tuples() ignores any unpaired final number
        Ok(numbers.into_iter().tuples().collect())
    }
}

/// Fill and stroke settings for a shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub fill: Paint,
    pub stroke: Paint,
    pub stroke_width: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: Paint::None,
            stroke: Paint::None,
            stroke_width: 1.,
        }
    }
}

impl Style {
    fn from_element(el: &RawElement) -> Result<Self> {
        let stroke_width = match el.presentation_attr("stroke-width") {
            Some(value) => strp(value).map_err(|e| el.parse_err("stroke-width", value, e))?,
            None => 1.,
        };
        Ok(Self {
            fill: el.paint("fill", el.presentation_attr("fill"))?,
            stroke: el.paint("stroke", el.presentation_attr("stroke"))?,
            stroke_width,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
    },
    Ellipse {
        cx: f32,
        cy: f32,
        rx: f32,
        ry: f32,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    },
    Polyline(Vec<(f32, f32)>),
    Polygon(Vec<(f32, f32)>),
    /// Unprocessed path data; flattened at render time
    Path(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub style: Style,
    pub src_line: usize,
}

impl Shape {
    /// Build a shape from an element; `None` if the element isn't drawable.
    pub fn from_element(el: &RawElement) -> Result<Option<Self>> {
        let kind = match el.name.as_str() {
            "rect" => ShapeKind::Rect {
                x: el.number("x", 0.)?,
                y: el.number("y", 0.)?,
                width: el.number("width", 0.)?,
                height: el.number("height", 0.)?,
            },
            "circle" => ShapeKind::Circle {
                cx: el.number("cx", 0.)?,
                cy: el.number("cy", 0.)?,
                r: el.number("r", 0.)?,
            },
            "ellipse" => ShapeKind::Ellipse {
                cx: el.number("cx", 0.)?,
                cy: el.number("cy", 0.)?,
                rx: el.number("rx", 0.)?,
                ry: el.number("ry", 0.)?,
            },
            "line" => ShapeKind::Line {
                x1: el.number("x1", 0.)?,
                y1: el.number("y1", 0.)?,
                x2: el.number("x2", 0.)?,
                y2: el.number("y2", 0.)?,
            },
            "polyline" => ShapeKind::Polyline(el.points()?),
            "polygon" => ShapeKind::Polygon(el.points()?),
            "path" => ShapeKind::Path(el.attrs.get("d").unwrap_or_default().to_string()),
            _ => return Ok(None),
        };
        Ok(Some(Self {
            kind,
            style: Style::from_element(el)?,
            src_line: el.src_line,
        }))
    }
}

/// The shapes of an SVG document, with its declared canvas size.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub shapes: Vec<Shape>,
}

impl Document {
    /// Canvas size from `width` / `height`, falling back to the `viewBox` size.
    fn from_svg_element(el: &RawElement) -> Result<Self> {
        let length = |key: &str| -> Result<Option<f32>> {
            el.attrs
                .get(key)
                .map(|v| strp_length(v).map_err(|e| el.parse_err(key, v, e)))
                .transpose()
        };
        let view_box: Option<(f32, f32)> = match el.attrs.get("viewBox") {
            Some(vb) => {
                let parts: Vec<f32> = attr_split(vb)
                    .map(|v| strp(&v))
                    .collect::<Result<_>>()
                    .map_err(|e| el.parse_err("viewBox", vb, e))?;
                match parts[..] {
                    [_, _, w, h] => Some((w, h)),
                    _ => {
                        return Err(Error::Parse(format!(
                            "line {}: viewBox needs 4 values: '{vb}'",
                            el.src_line
                        )))
                    }
                }
            }
            None => None,
        };
        Ok(Self {
            width: length("width")?.or(view_box.map(|vb| vb.0)),
            height: length("height")?.or(view_box.map(|vb| vb.1)),
            shapes: Vec::new(),
        })
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        Self::from_reader(&mut input.as_bytes())
    }
}
