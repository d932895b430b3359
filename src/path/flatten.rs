use log::{trace, warn};

use super::curve::{arc_points, cubic_points, quadratic_points, ArcSpec};
use super::syntax::{tokenize, CommandKind, PathCommand, PathToken};
use crate::errors::{Error, Result};

/// Cursor state while flattening a single path.
///
/// A new `FlattenState` must be used for each path; nothing carries over
/// from one path to another.
#[derive(Clone, Debug, Default)]
pub struct FlattenState {
    // absolute cursor position, updated by every drawing command
    current_position: (f32, f32),
    // most recently executed command; decides whether 'S' / 'T' reflect
    last_command: Option<PathCommand>,
    // last cubic or quadratic control point (absolute). Only meaningful
    // when `last_command` is from the same curve family.
    control_point: Option<(f32, f32)>,
    points: Vec<(f32, f32)>,
}

/// Read-only walk over the token list, handing out numeric arguments.
struct TokenCursor<'a> {
    tokens: &'a [PathToken],
    index: usize,
}

impl<'a> TokenCursor<'a> {
    fn new(tokens: &'a [PathToken]) -> Self {
        Self { tokens, index: 0 }
    }

    fn next_token(&mut self) -> Option<PathToken> {
        let token = self.tokens.get(self.index).copied();
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    /// Take exactly `N` numbers for `cmd`; a command letter or the end of
    /// data before that is a truncation error.
    fn take_args<const N: usize>(&mut self, cmd: PathCommand) -> Result<[f32; N]> {
        debug_assert_eq!(N, cmd.kind.arity(), "argument count for '{}'", cmd.letter());
        let mut args = [0.; N];
        for (found, arg) in args.iter_mut().enumerate() {
            match self.tokens.get(self.index) {
                Some(PathToken::Number(n)) => {
                    *arg = *n;
                    self.index += 1;
                }
                _ => {
                    return Err(Error::TruncatedArgs {
                        command: cmd.letter(),
                        expected: N,
                        found,
                    })
                }
            }
        }
        Ok(args)
    }
}

impl FlattenState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_position(&self) -> (f32, f32) {
        self.current_position
    }

    pub fn points(&self) -> &[(f32, f32)] {
        &self.points
    }

    pub fn into_points(self) -> Vec<(f32, f32)> {
        self.points
    }

    /// Resolve a coordinate pair against the current position if relative.
    fn resolve(&self, cmd: PathCommand, x: f32, y: f32) -> (f32, f32) {
        if cmd.relative {
            (self.current_position.0 + x, self.current_position.1 + y)
        } else {
            (x, y)
        }
    }

    fn move_to(&mut self, pos: (f32, f32)) {
        self.current_position = pos;
        self.points.push(pos);
    }

    /// Reflection of the previous control point through the current
    /// position, if `prior` says the previous command was a matching curve.
    fn reflected_control_point(&self, prior: fn(&CommandKind) -> bool) -> (f32, f32) {
        let (px, py) = self.current_position;
        match (self.last_command, self.control_point) {
            (Some(last), Some((cx, cy))) if prior(&last.kind) => (2. * px - cx, 2. * py - cy),
            _ => (px, py),
        }
    }

    fn cubic_to(&mut self, cp1: (f32, f32), cp2: (f32, f32), end: (f32, f32)) {
        self.points.extend(cubic_points(self.current_position, cp1, cp2, end));
        self.current_position = end;
        self.control_point = Some(cp2);
    }

    fn quadratic_to(&mut self, cp: (f32, f32), end: (f32, f32)) {
        self.points.extend(quadratic_points(self.current_position, cp, end));
        self.current_position = end;
        self.control_point = Some(cp);
    }

    fn process_command(&mut self, cmd: PathCommand, tokens: &mut TokenCursor) -> Result<()> {
        match cmd.kind {
            CommandKind::MoveTo | CommandKind::LineTo => {
                let [x, y] = tokens.take_args::<2>(cmd)?;
                self.move_to(self.resolve(cmd, x, y));
            }
            CommandKind::HorizontalTo => {
                let [x] = tokens.take_args::<1>(cmd)?;
                let (px, py) = self.current_position;
                let x = if cmd.relative { px + x } else { x };
                self.move_to((x, py));
            }
            CommandKind::VerticalTo => {
                let [y] = tokens.take_args::<1>(cmd)?;
                let (px, py) = self.current_position;
                let y = if cmd.relative { py + y } else { y };
                self.move_to((px, y));
            }
            CommandKind::CubicTo => {
                let [x1, y1, x2, y2, x, y] = tokens.take_args::<6>(cmd)?;
                let cp1 = self.resolve(cmd, x1, y1);
                let cp2 = self.resolve(cmd, x2, y2);
                let end = self.resolve(cmd, x, y);
                self.cubic_to(cp1, cp2, end);
            }
            CommandKind::SmoothCubicTo => {
                let [x2, y2, x, y] = tokens.take_args::<4>(cmd)?;
                let cp1 = self.reflected_control_point(CommandKind::is_cubic);
                let cp2 = self.resolve(cmd, x2, y2);
                let end = self.resolve(cmd, x, y);
                self.cubic_to(cp1, cp2, end);
            }
            CommandKind::QuadraticTo => {
                let [x1, y1, x, y] = tokens.take_args::<4>(cmd)?;
                let cp = self.resolve(cmd, x1, y1);
                let end = self.resolve(cmd, x, y);
                self.quadratic_to(cp, end);
            }
            CommandKind::SmoothQuadraticTo => {
                let [x, y] = tokens.take_args::<2>(cmd)?;
                let cp = self.reflected_control_point(CommandKind::is_quadratic);
                let end = self.resolve(cmd, x, y);
                self.quadratic_to(cp, end);
            }
            CommandKind::ArcTo => {
                let [rx, ry, x_axis_rotation, large_arc, sweep, x, y] =
                    tokens.take_args::<7>(cmd)?;
                let arc = ArcSpec {
                    rx,
                    ry,
                    x_axis_rotation,
                    large_arc: large_arc != 0.,
                    sweep: sweep != 0.,
                    end: self.resolve(cmd, x, y),
                };
                self.points.extend(arc_points(self.current_position, &arc));
                self.current_position = arc.end;
            }
            CommandKind::ClosePath => {
                let first = *self
                    .points
                    .first()
                    .ok_or(Error::EmptyPathClose(cmd.letter()))?;
                self.points.push(first);
            }
        }
        Ok(())
    }

    /// Run every command in `tokens`, appending to the point list.
    pub fn evaluate(&mut self, tokens: &[PathToken]) -> Result<()> {
        let mut cursor = TokenCursor::new(tokens);
        while let Some(token) = cursor.next_token() {
            match token {
                PathToken::Command(cmd) => {
                    trace!("path command '{}' at {:?}", cmd.letter(), self.current_position);
                    self.process_command(cmd, &mut cursor)?;
                    self.last_command = Some(cmd);
                }
                PathToken::Number(_) => {
                    // Implicit repetition of a command isn't supported, so
                    // any surplus numbers are dropped.
                    warn!("path data: ignoring number {token} with no command");
                    self.last_command = None;
                }
            }
        }
        Ok(())
    }
}

/// Flatten SVG path data into a list of absolute points.
///
/// Straight-line commands contribute one point each, while every curve and
/// arc contributes a fixed number of samples (including its start point).
pub fn flatten_path(data: &str) -> Result<Vec<(f32, f32)>> {
    let tokens = tokenize(data);
    let mut state = FlattenState::new();
    state.evaluate(&tokens)?;
    Ok(state.into_points())
}
