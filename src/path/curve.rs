//! Sampling of Bezier curves and elliptical arcs into fixed-size point lists.
//!
//! Every curve is sampled at `SAMPLE_COUNT` evenly spaced parameter values,
//! including both ends; there is no adaptive subdivision.

use std::f32::consts::PI;

/// Number of points emitted for each curve or arc segment.
pub const SAMPLE_COUNT: usize = 11;

const EPSILON: f32 = 1e-6;

/// Parameter values `0, 0.1, ... 1.0`.
fn sample_ts() -> impl Iterator<Item = f32> {
    let steps = (SAMPLE_COUNT - 1) as f32;
    (0..SAMPLE_COUNT).map(move |i| i as f32 / steps)
}

fn cubic(t: f32, p0: f32, p1: f32, p2: f32, p3: f32) -> f32 {
    let mt = 1.0 - t;
    mt * mt * mt * p0 + 3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t * p3
}

fn quadratic(t: f32, p0: f32, p1: f32, p2: f32) -> f32 {
    let mt = 1.0 - t;
    mt * mt * p0 + 2.0 * mt * t * p1 + t * t * p2
}

pub fn cubic_points(
    start: (f32, f32),
    cp1: (f32, f32),
    cp2: (f32, f32),
    end: (f32, f32),
) -> Vec<(f32, f32)> {
    sample_ts()
        .map(|t| {
            (
                cubic(t, start.0, cp1.0, cp2.0, end.0),
                cubic(t, start.1, cp1.1, cp2.1, end.1),
            )
        })
        .collect()
}

pub fn quadratic_points(start: (f32, f32), cp: (f32, f32), end: (f32, f32)) -> Vec<(f32, f32)> {
    sample_ts()
        .map(|t| {
            (
                quadratic(t, start.0, cp.0, end.0),
                quadratic(t, start.1, cp.1, end.1),
            )
        })
        .collect()
}

fn line_points(start: (f32, f32), end: (f32, f32)) -> Vec<(f32, f32)> {
    sample_ts()
        .map(|t| {
            (
                start.0 + (end.0 - start.0) * t,
                start.1 + (end.1 - start.1) * t,
            )
        })
        .collect()
}

/// Parameters of an SVG elliptical arc in endpoint form, excluding the
/// start point which comes from the current position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSpec {
    pub rx: f32,
    pub ry: f32,
    /// Rotation of the ellipse x-axis, in degrees
    pub x_axis_rotation: f32,
    pub large_arc: bool,
    pub sweep: bool,
    pub end: (f32, f32),
}

/// Center-form ellipse arc, as derived from an `ArcSpec`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CenterArc {
    pub center: (f32, f32),
    pub rx: f32,
    pub ry: f32,
    /// x-axis rotation in radians
    pub phi: f32,
    pub theta1: f32,
    pub delta_theta: f32,
}

impl CenterArc {
    pub fn point_at(&self, theta: f32) -> (f32, f32) {
        let (sin_t, cos_t) = theta.sin_cos();
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        (
            self.center.0 + self.rx * cos_t * cos_phi - self.ry * sin_t * sin_phi,
            self.center.1 + self.rx * cos_t * sin_phi + self.ry * sin_t * cos_phi,
        )
    }
}

// Implements https://www.w3.org/TR/SVG2/implnote.html#ArcConversionEndpointToCenter
//
// Returns None for arcs which degenerate to a straight line: zero radius,
// or coincident start and end points.
pub fn endpoint_to_center(start: (f32, f32), arc: &ArcSpec) -> Option<CenterArc> {
    let (x1, y1) = start;
    let (x2, y2) = arc.end;
    let (rx, ry) = (arc.rx.abs(), arc.ry.abs());

    if rx < EPSILON || ry < EPSILON || (x1 - x2).hypot(y1 - y2) < EPSILON {
        return None;
    }

    let phi = arc.x_axis_rotation.to_radians();
    let (sin_phi, cos_phi) = phi.sin_cos();

    // Step 1: Compute (x1', y1')
    let dx = (x1 - x2) / 2.0;
    let dy = (y1 - y2) / 2.0;
    let x1_prime = cos_phi * dx + sin_phi * dy;
    let y1_prime = -sin_phi * dx + cos_phi * dy;

    // Scale radii up if they can't span the endpoints
    // https://www.w3.org/TR/SVG2/implnote.html#ArcCorrectionOutOfRangeRadii
    let lambda = (x1_prime * x1_prime) / (rx * rx) + (y1_prime * y1_prime) / (ry * ry);
    let (rx, ry) = if lambda > 1.0 {
        (rx * lambda.sqrt(), ry * lambda.sqrt())
    } else {
        (rx, ry)
    };

    // Step 2: Compute (cx', cy')
    let rx_sq = rx * rx;
    let ry_sq = ry * ry;
    let x1p_sq = x1_prime * x1_prime;
    let y1p_sq = y1_prime * y1_prime;
    let radicand =
        (rx_sq * ry_sq - rx_sq * y1p_sq - ry_sq * x1p_sq) / (rx_sq * y1p_sq + ry_sq * x1p_sq);
    // rounding can leave a tiny negative value after radius scaling
    let root = radicand.max(0.0).sqrt();
    let coeff = if arc.large_arc != arc.sweep { root } else { -root };
    let cx_prime = coeff * (rx * y1_prime) / ry;
    let cy_prime = coeff * -(ry * x1_prime) / rx;

    // Step 3: Compute (cx, cy) from (cx', cy')
    let cx = cos_phi * cx_prime - sin_phi * cy_prime + (x1 + x2) / 2.0;
    let cy = sin_phi * cx_prime + cos_phi * cy_prime + (y1 + y2) / 2.0;

    // Step 4: Compute theta1 and delta_theta angles
    let theta1 = ((y1_prime - cy_prime) / ry).atan2((x1_prime - cx_prime) / rx);
    let theta2 = ((-y1_prime - cy_prime) / ry).atan2((-x1_prime - cx_prime) / rx);
    let mut delta_theta = theta2 - theta1;

    if arc.sweep && delta_theta < 0.0 {
        delta_theta += 2.0 * PI;
    } else if !arc.sweep && delta_theta > 0.0 {
        delta_theta -= 2.0 * PI;
    }

    Some(CenterArc {
        center: (cx, cy),
        rx,
        ry,
        phi,
        theta1,
        delta_theta,
    })
}

pub fn arc_points(start: (f32, f32), arc: &ArcSpec) -> Vec<(f32, f32)> {
    let Some(center_arc) = endpoint_to_center(start, arc) else {
        return line_points(start, arc.end);
    };
    sample_ts()
        .map(|t| center_arc.point_at(center_arc.theta1 + t * center_arc.delta_theta))
        .collect()
}
