use std::fmt;

use log::trace;

use crate::types::fstr;

/// The kinds of drawing command available in path data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandKind {
    MoveTo,
    LineTo,
    HorizontalTo,
    VerticalTo,
    CubicTo,
    SmoothCubicTo,
    QuadraticTo,
    SmoothQuadraticTo,
    ArcTo,
    ClosePath,
}

impl CommandKind {
    /// Number of numeric arguments which must follow the command letter.
    pub const fn arity(&self) -> usize {
        match self {
            Self::MoveTo | Self::LineTo | Self::SmoothQuadraticTo => 2,
            Self::HorizontalTo | Self::VerticalTo => 1,
            Self::QuadraticTo | Self::SmoothCubicTo => 4,
            Self::CubicTo => 6,
            Self::ArcTo => 7,
            Self::ClosePath => 0,
        }
    }

    const fn letter(&self) -> char {
        match self {
            Self::MoveTo => 'M',
            Self::LineTo => 'L',
            Self::HorizontalTo => 'H',
            Self::VerticalTo => 'V',
            Self::CubicTo => 'C',
            Self::SmoothCubicTo => 'S',
            Self::QuadraticTo => 'Q',
            Self::SmoothQuadraticTo => 'T',
            Self::ArcTo => 'A',
            Self::ClosePath => 'Z',
        }
    }

    /// True for the commands whose control point a following 'S'/'s' reflects.
    pub const fn is_cubic(&self) -> bool {
        matches!(self, Self::CubicTo | Self::SmoothCubicTo)
    }

    /// True for the commands whose control point a following 'T'/'t' reflects.
    pub const fn is_quadratic(&self) -> bool {
        matches!(self, Self::QuadraticTo | Self::SmoothQuadraticTo)
    }
}

/// A single path command; lowercase letters give relative commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathCommand {
    pub kind: CommandKind,
    pub relative: bool,
}

impl PathCommand {
    pub const fn new(kind: CommandKind, relative: bool) -> Self {
        Self { kind, relative }
    }

    pub fn from_char(c: char) -> Option<Self> {
        use CommandKind::*;
        let kind = match c.to_ascii_uppercase() {
            'M' => MoveTo,
            'L' => LineTo,
            'H' => HorizontalTo,
            'V' => VerticalTo,
            'C' => CubicTo,
            'S' => SmoothCubicTo,
            'Q' => QuadraticTo,
            'T' => SmoothQuadraticTo,
            'A' => ArcTo,
            'Z' => ClosePath,
            _ => return None,
        };
        Some(Self::new(kind, c.is_ascii_lowercase()))
    }

    pub fn letter(&self) -> char {
        let c = self.kind.letter();
        if self.relative {
            c.to_ascii_lowercase()
        } else {
            c
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathToken {
    Command(PathCommand),
    Number(f32),
}

impl fmt::Display for PathToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathToken::Command(cmd) => write!(f, "{}", cmd.letter()),
            PathToken::Number(n) => write!(f, "{}", fstr(*n)),
        }
    }
}

/// Scanner over raw path data.
///
/// Numbers follow the pattern `-?[0-9]+\.?[0-9]*`; there is no support for
/// a leading '+', a leading '.', or exponents. Characters which can't start
/// a command or a number are skipped.
struct PathSyntax {
    data: Vec<char>,
    index: usize,
}

impl PathSyntax {
    fn new(data: &str) -> Self {
        Self {
            data: data.chars().collect(),
            index: 0,
        }
    }

    fn current(&self) -> Option<char> {
        self.data.get(self.index).copied()
    }

    fn peek(&self) -> Option<char> {
        self.data.get(self.index + 1).copied()
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    fn at_end(&self) -> bool {
        self.index >= self.data.len()
    }

    fn at_number(&self) -> bool {
        match self.current() {
            Some(c) if c.is_ascii_digit() => true,
            Some('-') => self.peek().is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        }
    }

    fn skip_digits(&mut self, s: &mut String) {
        while let Some(ch) = self.current() {
            if !ch.is_ascii_digit() {
                break;
            }
            s.push(ch);
            self.advance();
        }
    }

    fn read_number(&mut self) -> Option<f32> {
        let mut s = String::new();
        if self.current() == Some('-') {
            s.push('-');
            self.advance();
        }
        self.skip_digits(&mut s);
        if self.current() == Some('.') {
            s.push('.');
            self.advance();
            self.skip_digits(&mut s);
        }
        s.parse().ok()
    }

    fn next_token(&mut self) -> Option<PathToken> {
        while let Some(c) = self.current() {
            if let Some(cmd) = PathCommand::from_char(c) {
                self.advance();
                return Some(PathToken::Command(cmd));
            }
            if self.at_number() {
                if let Some(n) = self.read_number() {
                    return Some(PathToken::Number(n));
                }
                continue;
            }
            if !(c.is_ascii_whitespace() || c == ',') {
                trace!("path data: ignoring '{c}' at offset {}", self.index);
            }
            self.advance();
        }
        None
    }
}

impl Iterator for PathSyntax {
    type Item = PathToken;

    fn next(&mut self) -> Option<Self::Item> {
        if self.at_end() {
            None
        } else {
            self.next_token()
        }
    }
}

/// Split path data into command and number tokens.
///
/// Whitespace and commas only act as separators, and adjacent numbers need
/// no separator if the boundary is unambiguous (`10-5` is `10` then `-5`).
/// Anything unrecognised is dropped without error.
pub fn tokenize(data: &str) -> Vec<PathToken> {
    PathSyntax::new(data).collect()
}
