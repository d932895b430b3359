use svgpix::{Paint, RenderConfig};

use crate::utils::{render, render_with, rgba};

#[test]
fn test_canvas_size() {
    let pm = render(r#"<svg width="30" height="20"/>"#);
    assert_eq!((pm.width(), pm.height()), (30, 20));

    let pm = render(r#"<svg viewBox="0 0 64 48"/>"#);
    assert_eq!((pm.width(), pm.height()), (64, 48));

    let pm = render(r#"<svg/>"#);
    assert_eq!((pm.width(), pm.height()), (200, 200));

    let cfg = RenderConfig {
        width: Some(12),
        ..Default::default()
    };
    let pm = render_with(r#"<svg width="30" height="20"/>"#, &cfg);
    assert_eq!((pm.width(), pm.height()), (12, 20));
}

#[test]
fn test_background() {
    let pm = render(r#"<svg width="4" height="4"/>"#);
    assert_eq!(rgba(&pm, 1, 1).3, 0);

    let cfg = RenderConfig {
        background: Paint::rgb(0, 128, 0),
        ..Default::default()
    };
    let pm = render_with(r#"<svg width="4" height="4"/>"#, &cfg);
    assert_eq!(rgba(&pm, 1, 1), (0, 128, 0, 255));
}

#[test]
fn test_shapes_in_document_order() {
    let input = r##"<svg width="40" height="40">
  <rect x="0" y="0" width="40" height="40" fill="#ff0000"/>
  <circle cx="20" cy="20" r="10" fill="blue"/>
  <line x1="0" y1="38" x2="40" y2="38" stroke="lime" stroke-width="4"/>
</svg>"##;
    let pm = render(input);
    assert_eq!(rgba(&pm, 2, 2), (255, 0, 0, 255));
    assert_eq!(rgba(&pm, 20, 20), (0, 0, 255, 255));
    assert_eq!(rgba(&pm, 20, 38), (0, 255, 0, 255));
}

#[test]
fn test_path_triangle() {
    let input = r#"<svg width="20" height="20">
  <path d="M0 0 h20 L0 20 z" fill="black"/>
</svg>"#;
    let pm = render(input);
    assert_eq!(rgba(&pm, 3, 3), (0, 0, 0, 255));
    assert_eq!(rgba(&pm, 17, 17).3, 0);
}

#[test]
fn test_style_attribute() {
    let input = r#"<svg width="10" height="10">
  <rect width="10" height="10" fill="red" style="fill: rgb(0, 0, 255)"/>
</svg>"#;
    let pm = render(input);
    assert_eq!(rgba(&pm, 5, 5), (0, 0, 255, 255));
}

#[test]
fn test_unfilled_shapes_invisible() {
    // fill and stroke both default to none
    let input = r#"<svg width="10" height="10">
  <rect width="10" height="10"/>
  <path d="M0 0 L10 10"/>
</svg>"#;
    let pm = render(input);
    assert!(pm.data().iter().all(|b| *b == 0));
}

#[test]
fn test_defs_not_drawn() {
    let input = r#"<svg width="10" height="10">
  <defs><rect width="10" height="10" fill="red"/></defs>
</svg>"#;
    let pm = render(input);
    assert_eq!(rgba(&pm, 5, 5).3, 0);
}
