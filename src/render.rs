//! Rasterization of shapes onto a `tiny_skia::Pixmap`.
//!
//! Paths are flattened to point lists first, so they are drawn as polygons
//! (fill) and polylines (stroke). Other shapes use the tiny-skia builders.

use log::{debug, trace, warn};
use tiny_skia::{
    Color, FillRule, Paint as SkPaint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform,
};

use crate::colour::Paint;
use crate::document::{Document, Shape, ShapeKind, Style};
use crate::errors::{Error, Result};
use crate::path::flatten_path;
use crate::RenderConfig;

fn sk_paint(paint: Paint) -> Option<SkPaint<'static>> {
    let (r, g, b, a) = paint.rgba()?;
    let mut sk = SkPaint::default();
    sk.set_color_rgba8(r, g, b, a);
    sk.anti_alias = true;
    Some(sk)
}

/// Path through the given points; `None` if there are fewer than two.
fn polyline_path(points: &[(f32, f32)], close: bool) -> Option<Path> {
    let ((x, y), rest) = points.split_first()?;
    if rest.is_empty() {
        return None;
    }
    let mut pb = PathBuilder::new();
    pb.move_to(*x, *y);
    for (x, y) in rest {
        pb.line_to(*x, *y);
    }
    if close {
        pb.close();
    }
    pb.finish()
}

/// Largest canvas area, in pixels, a renderer will allocate
pub const MAX_CANVAS_PIXELS: u64 = 1 << 26;

pub struct Renderer {
    pixmap: Pixmap,
    strict: bool,
}

impl Renderer {
    /// Create a renderer with a blank canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Paint) -> Result<Self> {
        if u64::from(width) * u64::from(height) > MAX_CANVAS_PIXELS {
            return Err(Error::Render(format!(
                "{width}x{height} canvas exceeds the {MAX_CANVAS_PIXELS} pixel limit"
            )));
        }
        let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
            Error::Render(format!("cannot create a {width}x{height} canvas"))
        })?;
        if let Some((r, g, b, a)) = background.rgba() {
            pixmap.fill(Color::from_rgba8(r, g, b, a));
        }
        Ok(Self {
            pixmap,
            strict: false,
        })
    }

    /// Create a renderer sized for `doc`, with any overrides from `config`.
    pub fn for_document(doc: &Document, config: &RenderConfig) -> Result<Self> {
        let (width, height) = config.canvas_size(doc);
        debug!("canvas size {width}x{height}");
        let mut renderer = Self::new(width, height, config.background)?;
        renderer.strict = config.strict;
        Ok(renderer)
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    fn fill(&mut self, path: &Path, paint: Paint) {
        if let Some(paint) = sk_paint(paint) {
            self.pixmap
                .fill_path(path, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }

    fn stroke(&mut self, path: &Path, paint: Paint, width: f32) {
        if width.is_nan() || width <= 0. {
            return;
        }
        if let Some(paint) = sk_paint(paint) {
            let stroke = Stroke {
                width,
                ..Stroke::default()
            };
            self.pixmap
                .stroke_path(path, &paint, &stroke, Transform::identity(), None);
        }
    }

    fn fill_and_stroke(&mut self, path: Option<Path>, style: &Style) {
        if let Some(path) = path {
            self.fill(&path, style.fill);
            self.stroke(&path, style.stroke, style.stroke_width);
        }
    }

    /// Fill the area enclosed by `points`, treated as a closed polygon.
    pub fn fill_polygon(&mut self, points: &[(f32, f32)], paint: Paint) {
        if let Some(path) = polyline_path(points, true) {
            self.fill(&path, paint);
        }
    }

    /// Stroke the line through `points`, optionally joining the last point
    /// back to the first.
    pub fn stroke_polyline(&mut self, points: &[(f32, f32)], paint: Paint, width: f32, close: bool) {
        if let Some(path) = polyline_path(points, close) {
            self.stroke(&path, paint, width);
        }
    }

    pub fn draw_shape(&mut self, shape: &Shape) -> Result<()> {
        trace!("drawing {:?} from line {}", shape.kind, shape.src_line);
        let style = &shape.style;
        match &shape.kind {
            ShapeKind::Rect {
                x,
                y,
                width,
                height,
            } => {
                if *width > 0. && *height > 0. {
                    let path = Rect::from_xywh(*x, *y, *width, *height).map(PathBuilder::from_rect);
                    self.fill_and_stroke(path, style);
                }
            }
            ShapeKind::Circle { cx, cy, r } => {
                if *r > 0. {
                    self.fill_and_stroke(PathBuilder::from_circle(*cx, *cy, *r), style);
                }
            }
            ShapeKind::Ellipse { cx, cy, rx, ry } => {
                if *rx > 0. && *ry > 0. {
                    let path = Rect::from_xywh(cx - rx, cy - ry, 2. * rx, 2. * ry)
                        .and_then(PathBuilder::from_oval);
                    self.fill_and_stroke(path, style);
                }
            }
            ShapeKind::Line { x1, y1, x2, y2 } => {
                let points = [(*x1, *y1), (*x2, *y2)];
                self.stroke_polyline(&points, style.stroke, style.stroke_width, false);
            }
            ShapeKind::Polyline(points) => {
                self.fill_polygon(points, style.fill);
                self.stroke_polyline(points, style.stroke, style.stroke_width, false);
            }
            ShapeKind::Polygon(points) => {
                self.fill_polygon(points, style.fill);
                self.stroke_polyline(points, style.stroke, style.stroke_width, true);
            }
            ShapeKind::Path(data) => {
                let points = match flatten_path(data) {
                    Ok(points) => points,
                    Err(e) if !self.strict => {
                        warn!("skipping path on line {}: {e}", shape.src_line);
                        return Ok(());
                    }
                    Err(e) => {
                        return Err(Error::Parse(format!("path on line {}: {e}", shape.src_line)))
                    }
                };
                self.fill_polygon(&points, style.fill);
                self.stroke_polyline(&points, style.stroke, style.stroke_width, false);
            }
        }
        Ok(())
    }

    pub fn draw_document(&mut self, doc: &Document) -> Result<()> {
        for shape in &doc.shapes {
            self.draw_shape(shape)?;
        }
        Ok(())
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        self.pixmap
            .encode_png()
            .map_err(|e| Error::Render(format!("PNG encoding failed: {e}")))
    }
}
