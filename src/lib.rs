//! ## svgpix - flatten simple SVG drawings and rasterize them to PNG
//!
//! `svgpix` is normally run as a command line tool, taking an SVG file and
//! writing a PNG image of it.
//!
//! At its core is an interpreter for SVG path data (the `d` attribute of a
//! `<path>` element) which turns `M L H V C S Q T A Z` commands, in absolute
//! and relative forms, into a flat list of absolute points. Bezier curves and
//! elliptical arcs are approximated by 11 evenly-spaced samples each.
//!
//! ## Library use
//!
//! Path data may be flattened directly with [`flatten_path`], or whole
//! documents rendered with the `render_*` functions, configured by a
//! [`RenderConfig`].
//!
//! Only basic shapes are drawn (`rect`, `circle`, `ellipse`, `line`,
//! `polyline`, `polygon` and `path`), using their own `fill`, `stroke` and
//! `stroke-width` attributes; there is no CSS, inheritance or transforms.
//!
//! ## Example
//!
//! ```
//! let points = svgpix::flatten_path("M0,0 L10,0 L10,10 Z").unwrap();
//! assert_eq!(points, vec![(0., 0.), (10., 0.), (10., 10.), (0., 0.)]);
//!
//! let cfg = svgpix::RenderConfig::default();
//! let input = r#"<svg width="20" height="20"><circle cx="10" cy="10" r="5" fill="red"/></svg>"#;
//! let png = svgpix::render_str(input, &cfg).unwrap();
//! assert!(png.starts_with(b"\x89PNG"));
//! ```

use std::io::{BufRead, Cursor, Write};

#[cfg(feature = "cli")]
pub mod cli;
pub mod colour;
pub mod document;
pub mod errors;
pub mod path;
pub mod render;
mod types;

#[cfg(feature = "cli")]
pub use cli::render_file;
pub use colour::Paint;
pub use document::{Document, Shape, ShapeKind};
pub use errors::{Error, Result};
pub use path::{flatten_path, tokenize, PathToken};
pub use render::Renderer;

// Allow users of this as a library to easily retrieve the version of svgpix being used
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Settings for rendering a single document.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Canvas width, overriding the document's own size
    pub width: Option<u32>,
    /// Canvas height, overriding the document's own size
    pub height: Option<u32>,
    /// Canvas width if neither the document nor `width` gives one
    pub default_width: u32,
    /// Canvas height if neither the document nor `height` gives one
    pub default_height: u32,
    /// Colour the canvas is cleared to before drawing
    pub background: Paint,
    /// Fail on the first invalid path rather than skipping it
    pub strict: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            default_width: 200,
            default_height: 200,
            background: Paint::Rgba(255, 255, 255, 0),
            strict: false,
        }
    }
}

impl RenderConfig {
    /// Pixel size of the canvas used to render `doc`.
    pub fn canvas_size(&self, doc: &Document) -> (u32, u32) {
        let pixels = |v: f32| v.max(0.).ceil() as u32;
        (
            self.width
                .or(doc.width.map(pixels))
                .unwrap_or(self.default_width),
            self.height
                .or(doc.height.map(pixels))
                .unwrap_or(self.default_height),
        )
    }
}

/// Render an already-parsed document, returning PNG data.
pub fn render_document(doc: &Document, config: &RenderConfig) -> Result<Vec<u8>> {
    let mut renderer = Renderer::for_document(doc, config)?;
    renderer.draw_document(doc)?;
    renderer.encode_png()
}

/// Reads an SVG document from `reader`, and writes a PNG rendering of it to `writer`.
///
/// The entire stream is read before any data is written to `writer`.
pub fn render_stream(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> Result<()> {
    let doc = Document::from_reader(reader)?;
    writer.write_all(&render_document(&doc, config)?)?;
    Ok(())
}

/// Render an SVG document provided as a string, returning PNG data.
pub fn render_str<T: Into<String>>(input: T, config: &RenderConfig) -> Result<Vec<u8>> {
    let mut input = Cursor::new(input.into());
    let mut output: Vec<u8> = vec![];

    render_stream(&mut input, &mut output, config)?;

    Ok(output)
}
