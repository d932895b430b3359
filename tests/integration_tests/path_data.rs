use assertables::assert_in_delta;
use svgpix::path::{cubic_points, SAMPLE_COUNT};
use svgpix::{flatten_path, tokenize, PathToken};

use crate::utils::assert_points_near;

#[test]
fn test_lines_and_close() {
    let points = flatten_path("M0,0 L10,0 L10,10 Z").unwrap();
    assert_eq!(points, vec![(0., 0.), (10., 0.), (10., 10.), (0., 0.)]);
}

#[test]
fn test_relative_absolute_mix() {
    let points = flatten_path("M 5 5 l 10 0 v 10 H 0 m 1 1 h -1 V 2").unwrap();
    assert_eq!(
        points,
        vec![
            (5., 5.),
            (15., 5.),
            (15., 15.),
            (0., 15.),
            (1., 16.),
            (0., 16.),
            (0., 2.)
        ]
    );
}

#[test]
fn test_cubic() {
    let points = flatten_path("M0,0 C0,10 10,10 10,0").unwrap();
    assert_eq!(points.len(), 1 + SAMPLE_COUNT);
    assert_eq!(points[0], (0., 0.));
    assert_eq!(points[1], (0., 0.));
    assert_eq!(points[SAMPLE_COUNT], (10., 0.));
    // symmetric curve peaks at 3/4 of the control point height
    assert_in_delta!(points[6].0, 5., 1e-4);
    assert_in_delta!(points[6].1, 7.5, 1e-4);
}

#[test]
fn test_smooth_reflection() {
    // S after C reflects the previous second control point
    let smooth = flatten_path("M0 0 C0 10 10 10 10 0 S20 -10 20 0").unwrap();
    let explicit = flatten_path("M0 0 C0 10 10 10 10 0 C10 -10 20 -10 20 0").unwrap();
    assert_points_near(&smooth, &explicit);

    // S after a line uses the current point as its first control point
    let smooth = flatten_path("M0 0 L5 5 S10 10 15 5").unwrap();
    let explicit = flatten_path("M0 0 L5 5 C5 5 10 10 15 5").unwrap();
    assert_points_near(&smooth, &explicit);

    let smooth = flatten_path("M0 0 Q5 10 10 0 T20 0").unwrap();
    let explicit = flatten_path("M0 0 Q5 10 10 0 Q15 -10 20 0").unwrap();
    assert_points_near(&smooth, &explicit);
}

#[test]
fn test_arc_semicircle() {
    let points = flatten_path("M0 0 A5 5 0 0 1 10 0").unwrap();
    assert_eq!(points.len(), 1 + SAMPLE_COUNT);
    for (x, y) in &points {
        let r = ((x - 5.).powi(2) + y.powi(2)).sqrt();
        assert_in_delta!(r, 5., 1e-3);
    }
    assert_points_near(&points[1..2], &[(0., 0.)]);
    assert_points_near(&points[SAMPLE_COUNT..], &[(10., 0.)]);
}

#[test]
fn test_curve_endpoints() {
    let pts = cubic_points((1., 2.), (3., 9.), (7., -4.), (12., 5.));
    assert_eq!(pts.len(), SAMPLE_COUNT);
    assert_eq!(pts[0], (1., 2.));
    assert_eq!(pts[SAMPLE_COUNT - 1], (12., 5.));
}

#[test]
fn test_tokenize() {
    let tokens = tokenize("M10-5l2,3");
    assert_eq!(tokens.len(), 6);
    assert!(matches!(tokens[0], PathToken::Command(c) if c.letter() == 'M'));
    assert!(matches!(tokens[2], PathToken::Number(n) if n == -5.));
    assert!(matches!(tokens[3], PathToken::Command(c) if c.relative));
}

#[test]
fn test_truncated() {
    let err = flatten_path("M0,0 L5").unwrap_err();
    assert!(err.is_path_error());
    assert_eq!(
        err.to_string(),
        "Parse error: path command 'L' needs 2 numbers, found 1"
    );
}

#[test]
fn test_empty() {
    assert!(flatten_path("").unwrap().is_empty());
    assert!(flatten_path("   ").unwrap().is_empty());
}
