//! Cube states and the quarter-turn transition.

use std::sync::LazyLock;

use itertools::iproduct;
use log::trace;
use thiserror::Error;

use crate::{
    Colour, SIDES, Side,
    facelets::{self, FaceletGrid},
    math::{Axis, Matrix, Vector},
};

/// One square face of a cubie: the direction it points in the cubie's
/// current orientation, and its sticker colour. Faces buried inside the
/// cube carry no colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    normal: Vector<3>,
    colour: Option<Colour>,
}

impl Face {
    fn new(normal: Vector<3>) -> Face {
        Face {
            normal,
            colour: None,
        }
    }

    /// The direction this face currently points.
    #[must_use]
    pub fn normal(&self) -> Vector<3> {
        self.normal
    }

    /// The sticker colour, or `None` for an internal face.
    #[must_use]
    pub fn colour(&self) -> Option<Colour> {
        self.colour
    }

    #[must_use]
    fn rotated(&self, rotation: &Matrix<3, 3>) -> Face {
        Face {
            normal: rotation * &self.normal,
            colour: self.colour,
        }
    }
}

/// One of the 27 sub-cubes making up the cube.
///
/// A cubie owns its position on the `{-1, 0, 1}` grid and exactly six
/// faces, one per axis direction of its starting orientation. Turning
/// rotates position and face normals together, so the stickers ride along
/// with the cubie wherever it goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cubie {
    position: Vector<3>,
    faces: [Face; 6],
}

impl Cubie {
    /// A colourless cubie at `position`. Every cubie is built with its own
    /// fresh face array; no two cubies ever share faces.
    #[must_use]
    pub fn new(position: Vector<3>) -> Cubie {
        let faces = [
            Vector::unit(Axis::X, -1),
            Vector::unit(Axis::X, 1),
            Vector::unit(Axis::Y, -1),
            Vector::unit(Axis::Y, 1),
            Vector::unit(Axis::Z, -1),
            Vector::unit(Axis::Z, 1),
        ]
        .map(Face::new);

        Cubie { position, faces }
    }

    /// Whether the cubie currently lies in the layer of `side`, recomputed
    /// from its position on every call.
    #[must_use]
    pub fn in_side(&self, side: Side) -> bool {
        self.position.component(side.axis()) == side.sign()
    }

    #[must_use]
    pub fn position(&self) -> Vector<3> {
        self.position
    }

    #[must_use]
    pub fn faces(&self) -> &[Face; 6] {
        &self.faces
    }

    /// The colour this cubie shows on `side`: the sticker of the face
    /// whose normal points straight out of that side, if it has one.
    #[must_use]
    pub fn sticker(&self, side: Side) -> Option<Colour> {
        let normal = side.normal();

        self.faces
            .iter()
            .find(|face| face.normal == normal)
            .and_then(|face| face.colour)
    }

    #[must_use]
    fn rotated(&self, rotation: &Matrix<3, 3>) -> Cubie {
        Cubie {
            position: rotation * &self.position,
            faces: self.faces.map(|face| face.rotated(rotation)),
        }
    }

    fn paint(&mut self, side: Side, colour: Colour) {
        let normal = side.normal();

        for face in &mut self.faces {
            if face.normal == normal {
                face.colour = Some(colour);
            }
        }
    }
}

/// Ways a loose collection of cubies can fail to form a cube.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CubeError {
    #[error("Invalid cubie count, expected 27 but got {0}")]
    WrongCubieCount(usize),
    #[error("Cubie position is off the grid, expected coordinates in -1..=1 but got {0:?}")]
    PositionOffGrid([i32; 3]),
    #[error("Two cubies occupy the same position: {0:?}")]
    DuplicatePosition([i32; 3]),
    #[error("Cubie at {0:?} does not have exactly one face along each axis direction")]
    MalformedFaces([i32; 3]),
    #[error("Cubie at {0:?} is missing a sticker on a face pointing out of the cube")]
    MissingSticker([i32; 3]),
}

/// A full cube state.
///
/// Cubes are immutable values. [`Cube::turned`] returns a successor and
/// leaves the receiver untouched, which is what lets a search agent expand
/// many children of one parent without copies stepping on each other.
///
/// Equality between cubes is visual: two cubes are equal exactly when
/// every facelet grid matches. Distinct cubie arrangements that show the
/// same colours everywhere compare equal, which is the notion a goal test
/// wants. Use [`Cube::cubies`] to compare arrangements positionally.
#[derive(Clone, Debug)]
pub struct Cube {
    cubies: [Cubie; 27],
}

static SOLVED_FACELETS: LazyLock<[FaceletGrid; 6]> =
    LazyLock::new(|| Cube::solved().facelet_grids());

fn grid_points() -> [Vector<3>; 27] {
    let mut points = [Vector::zero(); 27];
    let walk = iproduct!([1, 0, -1], [1, 0, -1], [1, 0, -1]);

    for (point, (x, y, z)) in points.iter_mut().zip(walk) {
        *point = Vector::new([[x, y, z]]);
    }

    points
}

impl Cube {
    /// The canonical solved cube: every side uniformly shows its own
    /// colour.
    #[must_use]
    pub fn solved() -> Cube {
        let mut cubies = grid_points().map(Cubie::new);

        for cubie in &mut cubies {
            for side in SIDES {
                if cubie.in_side(side) {
                    cubie.paint(side, side.solved_colour());
                }
            }
        }

        Cube { cubies }
    }

    /// Assemble a cube from loose cubies.
    ///
    /// # Errors
    ///
    /// Fails unless exactly 27 cubies cover every grid position once, each
    /// with one face along each axis direction and a sticker on every face
    /// pointing out of the cube.
    pub fn from_cubies(cubies: Vec<Cubie>) -> Result<Cube, CubeError> {
        let count = cubies.len();
        let cubies: [Cubie; 27] = cubies
            .try_into()
            .map_err(|_| CubeError::WrongCubieCount(count))?;

        let mut seen = [[[false; 3]; 3]; 3];

        for cubie in &cubies {
            let position = cubie.position().into_inner();

            if position.iter().any(|c| !(-1..=1).contains(c)) {
                return Err(CubeError::PositionOffGrid(position));
            }

            let index = |c: i32| match c {
                -1 => 0,
                0 => 1,
                _ => 2,
            };
            let [x, y, z] = position;
            let slot = &mut seen[index(x)][index(y)][index(z)];

            if *slot {
                return Err(CubeError::DuplicatePosition(position));
            }
            *slot = true;

            for side in SIDES {
                let along = cubie
                    .faces()
                    .iter()
                    .filter(|face| face.normal() == side.normal())
                    .count();

                if along != 1 {
                    return Err(CubeError::MalformedFaces(position));
                }

                if cubie.in_side(side) && cubie.sticker(side).is_none() {
                    return Err(CubeError::MissingSticker(position));
                }
            }
        }

        Ok(Cube { cubies })
    }

    /// Turn `side` by `turns` clockwise quarter turns, producing the
    /// successor state. Only the nine cubies in that side's layer move;
    /// every other cubie is carried over bit for bit.
    ///
    /// `turns` is reduced modulo 4, so 0 is the identity, 3 is a
    /// counter-clockwise quarter turn, and `turned(side, t)` equals
    /// `turned(side, t % 4)` for any `t`.
    #[must_use]
    pub fn turned(&self, side: Side, turns: u32) -> Cube {
        let turns = turns % 4;
        trace!("Turning the {} side {turns} quarter turns", side.name());

        let rotation = side.rotation().pow(turns);

        Cube {
            cubies: self.cubies.map(|cubie| {
                if cubie.in_side(side) {
                    cubie.rotated(&rotation)
                } else {
                    cubie
                }
            }),
        }
    }

    /// Whether `side` may currently be turned. Every turn is legal in
    /// every state; search frameworks expect the feasibility check to
    /// exist anyway.
    #[expect(clippy::unused_self)]
    #[must_use]
    pub fn can_turn(&self, _side: Side, _turns: u32) -> bool {
        true
    }

    /// The six 3x3 colour grids in [`SIDES`] order. This is the whole
    /// observable of a state; cubie positions and normals are bookkeeping
    /// for producing it.
    #[must_use]
    pub fn facelet_grids(&self) -> [FaceletGrid; 6] {
        facelets::extract(self)
    }

    /// Whether every side uniformly shows its solved colour.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.facelet_grids() == *SOLVED_FACELETS
    }

    /// All 27 cubies in construction order. A turn keeps each cubie in its
    /// original slot, so zipping the arrays of two states pairs up the
    /// same physical cubie.
    #[must_use]
    pub fn cubies(&self) -> &[Cubie; 27] {
        &self.cubies
    }
}

/// Visual equality over the facelet grids, re-extracted per comparison.
impl PartialEq for Cube {
    fn eq(&self, other: &Cube) -> bool {
        self.facelet_grids() == other.facelet_grids()
    }
}

impl Eq for Cube {}
