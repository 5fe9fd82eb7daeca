//! A cubie-level model of the 3x3x3 Rubik's Cube.
//!
//! A [`cube::Cube`] is a value holding 27 [`cube::Cubie`]s, each of which
//! owns its grid position and six outward faces. Turning a side never
//! mutates anything; it hands back a brand-new cube, so a search agent can
//! branch over many successors of one parent state without aliasing. What
//! agents and renderers get to observe is the six 3x3 colour grids from
//! [`cube::Cube::facelet_grids`].
//!
//! [`operators::OPERATORS`] packages the twelve quarter turns as named
//! precondition/transition pairs for generic search frameworks, and
//! [`operators::scramble`] walks random operators to produce practice
//! states.

#![warn(clippy::pedantic)]

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::math::{Axis, Matrix, Vector};

pub mod cube;
pub mod facelets;
pub mod math;
pub mod operators;

// Note... X is left to right, Y is front to back, and Z is down to up
// The coordinate system is right-handed

/// A sticker colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Colour {
    White,
    Green,
    Red,
    Blue,
    Orange,
    Yellow,
}

impl Colour {
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Colour::White => 'W',
            Colour::Green => 'G',
            Colour::Red => 'R',
            Colour::Blue => 'B',
            Colour::Orange => 'O',
            Colour::Yellow => 'Y',
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One of the six sides of the cube, identified by the axis and sign of its
/// outward normal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Up,
    Front,
    Right,
    Back,
    Left,
    Down,
}

/// Every side, in the canonical order used for facelet extraction and
/// display.
pub const SIDES: [Side; 6] = [
    Side::Up,
    Side::Front,
    Side::Right,
    Side::Back,
    Side::Left,
    Side::Down,
];

impl Side {
    /// The axis this side's outward normal lies along.
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Side::Up | Side::Down => Axis::Z,
            Side::Front | Side::Back => Axis::Y,
            Side::Right | Side::Left => Axis::X,
        }
    }

    /// Which end of [`Side::axis`] the side sits on.
    #[must_use]
    pub fn sign(self) -> i32 {
        match self {
            Side::Up | Side::Back | Side::Right => 1,
            Side::Down | Side::Front | Side::Left => -1,
        }
    }

    /// The outward unit normal of the side.
    #[must_use]
    pub fn normal(self) -> Vector<3> {
        Vector::unit(self.axis(), self.sign())
    }

    /// The matrix of one clockwise quarter turn of this side, as seen
    /// looking at the side from outside the cube.
    #[must_use]
    pub fn rotation(self) -> Matrix<3, 3> {
        // Each column is the image of a basis vector
        match self {
            Side::Up => Matrix::new([[0, -1, 0], [1, 0, 0], [0, 0, 1]]),
            Side::Front => Matrix::new([[0, 0, -1], [0, 1, 0], [1, 0, 0]]),
            Side::Right => Matrix::new([[1, 0, 0], [0, 0, -1], [0, 1, 0]]),
            Side::Back => Matrix::new([[0, 0, 1], [0, 1, 0], [-1, 0, 0]]),
            Side::Left => Matrix::new([[1, 0, 0], [0, 0, 1], [0, -1, 0]]),
            Side::Down => Matrix::new([[0, 1, 0], [-1, 0, 0], [0, 0, 1]]),
        }
    }

    /// The colour the side shows when the cube is solved.
    #[must_use]
    pub fn solved_colour(self) -> Colour {
        match self {
            Side::Up => Colour::White,
            Side::Front => Colour::Blue,
            Side::Right => Colour::Red,
            Side::Back => Colour::Green,
            Side::Left => Colour::Orange,
            Side::Down => Colour::Yellow,
        }
    }

    /// The one-letter label used in move notation.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Side::Up => 'U',
            Side::Front => 'F',
            Side::Right => 'R',
            Side::Back => 'B',
            Side::Left => 'L',
            Side::Down => 'D',
        }
    }

    /// The full name of the side, for display.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Side::Up => "Up",
            Side::Front => "Front",
            Side::Right => "Right",
            Side::Back => "Back",
            Side::Left => "Left",
            Side::Down => "Down",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown side label {0:?}, expected one of U, F, R, B, L, or D")]
pub struct ParseSideError(String);

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" => Ok(Side::Up),
            "F" => Ok(Side::Front),
            "R" => Ok(Side::Right),
            "B" => Ok(Side::Back),
            "L" => Ok(Side::Left),
            "D" => Ok(Side::Down),
            _ => Err(ParseSideError(s.to_owned())),
        }
    }
}
