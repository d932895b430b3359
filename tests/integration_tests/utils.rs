use svgpix::{render_str, RenderConfig};
use tiny_skia::Pixmap;

/// Render `input` with the given config, decoding the resulting PNG
pub fn render_with(input: &str, cfg: &RenderConfig) -> Pixmap {
    let png = render_str(input, cfg).expect("render failure");
    Pixmap::decode_png(&png).expect("output should be a valid PNG")
}

pub fn render(input: &str) -> Pixmap {
    render_with(input, &RenderConfig::default())
}

/// Un-premultiplied RGBA at the given pixel
pub fn rgba(pixmap: &Pixmap, x: u32, y: u32) -> (u8, u8, u8, u8) {
    let c = pixmap
        .pixel(x, y)
        .expect("pixel should be in range")
        .demultiply();
    (c.red(), c.green(), c.blue(), c.alpha())
}

pub fn assert_points_near(actual: &[(f32, f32)], expected: &[(f32, f32)]) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} != {expected:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert!(
            (a.0 - e.0).abs() < 1e-4 && (a.1 - e.1).abs() < 1e-4,
            "\n {a:?}\nnot close to\n {e:?}"
        );
    }
}
