//! Extraction of the facelet observable from a cube state.
//!
//! One fixed walk over the grid orders the stickers of every side at once.
//! The walk reads Up, Front, and Left in their natural viewing order and
//! sees Right, Back, and Down mirrored left to right, so those three sides
//! flip each collected row before it lands in the grid. Renderers and goal
//! tests both consume the grids produced here; nothing else about a state
//! is observable.

use std::array;

use itertools::{Itertools, iproduct};

use crate::{Colour, SIDES, Side, cube::Cube, math::Vector};

/// One side of the cube as a 3x3 grid of colours, top row first, columns
/// in the reading order of an observer facing that side.
pub type FaceletGrid = [[Colour; 3]; 3];

pub(crate) fn extract(cube: &Cube) -> [FaceletGrid; 6] {
    SIDES.map(|side| side_grid(cube, side))
}

/// The fixed walk ordering collected stickers: top layer to bottom, back
/// row to front, left column to right.
fn canonical_points() -> impl Iterator<Item = Vector<3>> {
    iproduct!([1, 0, -1], [1, 0, -1], [-1, 0, 1]).map(|(z, y, x)| Vector::new([[x, y, z]]))
}

/// The walk sees these sides mirrored left to right.
fn mirrored(side: Side) -> bool {
    matches!(side, Side::Right | Side::Back | Side::Down)
}

fn side_grid(cube: &Cube, side: Side) -> FaceletGrid {
    let colours = canonical_points()
        .filter(|point| point.component(side.axis()) == side.sign())
        .map(|point| {
            let cubie = cube
                .cubies()
                .iter()
                .find(|cubie| cubie.position() == point)
                .expect("every grid point holds exactly one cubie");

            cubie
                .sticker(side)
                .expect("cubies in a side's layer have a sticker facing out of it")
        })
        .collect_vec();

    to_rows(&colours, mirrored(side))
}

fn to_rows(colours: &[Colour], mirrored: bool) -> FaceletGrid {
    debug_assert_eq!(colours.len(), 9);

    array::from_fn(|row| {
        array::from_fn(|column| {
            let column = if mirrored { 2 - column } else { column };
            colours[row * 3 + column]
        })
    })
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::{
        Colour::{Blue, Green, Orange, Red, White, Yellow},
        SIDES,
        math::Vector,
    };

    use super::{canonical_points, to_rows};

    #[test]
    fn canonical_walk_covers_every_point_once() {
        let points = canonical_points().collect_vec();

        assert_eq!(points.len(), 27);
        assert!(points.iter().all_unique());
        // Starts at the top back left, ends at the bottom front right
        assert_eq!(points[0], Vector::new([[-1, 1, 1]]));
        assert_eq!(points[26], Vector::new([[1, -1, -1]]));
    }

    #[test]
    fn each_side_owns_nine_walk_points() {
        for side in SIDES {
            let count = canonical_points()
                .filter(|point| point.component(side.axis()) == side.sign())
                .count();

            assert_eq!(count, 9);
        }
    }

    #[test]
    fn mirrored_sides_flip_each_row() {
        let run = [White, Green, Red, Blue, Orange, Yellow, White, Green, Red];

        assert_eq!(
            to_rows(&run, false),
            [
                [White, Green, Red],
                [Blue, Orange, Yellow],
                [White, Green, Red]
            ]
        );
        assert_eq!(
            to_rows(&run, true),
            [
                [Red, Green, White],
                [Yellow, Orange, Blue],
                [Red, Green, White]
            ]
        );
    }
}
