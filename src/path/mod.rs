//! Interpretation of SVG path data (the `d` attribute).
//!
//! Path data is first split into tokens, then run through a small state
//! machine which tracks the cursor and the previous curve control point,
//! producing a flat list of absolute points. Curves and arcs are replaced
//! by a fixed number of samples along them.

mod curve;
mod flatten;
mod syntax;

pub use curve::{arc_points, cubic_points, endpoint_to_center, quadratic_points};
pub use curve::{ArcSpec, CenterArc, SAMPLE_COUNT};
pub use flatten::{flatten_path, FlattenState};
pub use syntax::{tokenize, CommandKind, PathCommand, PathToken};
