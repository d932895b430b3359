use assertables::assert_contains;
use svgpix::{render_str, Error, RenderConfig};

use crate::utils::{render, rgba};

fn strict() -> RenderConfig {
    RenderConfig {
        strict: true,
        ..Default::default()
    }
}

#[test]
fn test_error_bad_xml() {
    let cfg = RenderConfig::default();
    let input = r##"<svg>
    <rect>
    </svg>"##;
    assert!(matches!(render_str(input, &cfg), Err(Error::Document(_))));

    let input = r##"<svg>
    <rect x="y/>
    </svg>"##;
    assert!(render_str(input, &cfg).is_err());
}

#[test]
fn test_error_no_svg() {
    let err = render_str("<rect/>", &RenderConfig::default()).unwrap_err();
    assert_contains!(err.to_string(), "<rect>");
}

#[test]
fn test_error_attr_value() {
    let input = r#"<svg>

  <circle cx="1" cy="2" r="x"/>
</svg>"#;
    let err = render_str(input, &RenderConfig::default()).unwrap_err();
    let msg = err.to_string();
    assert_contains!(msg, "line 3");
    assert_contains!(msg, "<circle r=\"x\">");

    let input = r##"<svg><rect width="1" height="1" fill="#12"/></svg>"##;
    assert!(matches!(
        render_str(input, &RenderConfig::default()),
        Err(Error::Parse(_))
    ));
}

#[test]
fn test_bad_path_skipped() {
    let input = r#"<svg width="10" height="10">
  <path d="M0 0 L10" fill="red"/>
  <rect width="10" height="10" fill="blue"/>
  <path d="Z" fill="red"/>
</svg>"#;
    let pm = render(input);
    assert_eq!(rgba(&pm, 5, 5), (0, 0, 255, 255));

    let err = render_str(input, &strict()).unwrap_err();
    assert_contains!(err.to_string(), "line 2");
    assert_contains!(err.to_string(), "needs 2 numbers, found 1");
}

#[test]
fn test_empty_close_strict() {
    let input = r#"<svg><path d="z" stroke="red"/></svg>"#;
    let err = render_str(input, &strict()).unwrap_err();
    assert_contains!(err.to_string(), "'z' with no preceding point");
}

#[test]
fn test_error_non_finite_values() {
    let cfg = RenderConfig::default();
    for attr in [
        r#"stroke-width="nan""#,
        r#"stroke-width="inf""#,
        r#"style="stroke-width: NaN""#,
    ] {
        let input = format!(
            r#"<svg width="20" height="20"><path d="M0 0 L10 10" stroke="blue" {attr}/></svg>"#
        );
        let err = render_str(input, &cfg).unwrap_err();
        assert!(matches!(err, Error::Parse(_)), "{attr}: {err}");
        assert_contains!(err.to_string(), "not a finite number");
    }

    let input = r#"<svg><circle cx="5" cy="5" r="infinity" fill="red"/></svg>"#;
    assert!(matches!(render_str(input, &cfg), Err(Error::Parse(_))));
}

#[test]
fn test_error_oversized_canvas() {
    let input = r#"<svg width="100000" height="100000"><rect width="1" height="1" fill="red"/></svg>"#;
    let err = render_str(input, &RenderConfig::default()).unwrap_err();
    assert!(matches!(err, Error::Render(_)));
    assert_contains!(err.to_string(), "pixel limit");

    let cfg = RenderConfig {
        width: Some(u32::MAX),
        ..Default::default()
    };
    assert!(matches!(
        render_str("<svg/>", &cfg),
        Err(Error::Render(_))
    ));
}
