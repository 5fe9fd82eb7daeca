//! The operator catalog and scrambling.
//!
//! An [`Operator`] bundles a label, a side, and a turn count into the
//! precondition/transition pair a search framework works with. The fixed
//! [`OPERATORS`] catalog holds the twelve quarter turns; scrambles walk
//! random catalog entries to produce practice states.

use std::{fmt, sync::LazyLock};

use log::debug;

use crate::{SIDES, Side, cube::Cube};

/// A named move: a feasibility test over states plus the state transition
/// it guards. Each operator owns its side and turn count outright, so two
/// operators never interfere with each other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Operator {
    name: String,
    side: Side,
    turns: u32,
}

impl Operator {
    /// An operator turning `side` by `turns` clockwise quarter turns,
    /// reduced modulo 4. The label follows move notation: the side letter
    /// alone is one clockwise turn, a trailing `2` is a half turn, and a
    /// trailing `'` is a counter-clockwise turn.
    #[must_use]
    pub fn new(side: Side, turns: u32) -> Operator {
        let turns = turns % 4;
        let mut name = String::from(side.letter());

        match turns {
            0 => name.push('0'),
            2 => name.push('2'),
            3 => name.push('\''),
            _ => {}
        }

        Operator { name, side, turns }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Whether this operator may be applied to `cube`.
    #[must_use]
    pub fn is_applicable(&self, cube: &Cube) -> bool {
        cube.can_turn(self.side, self.turns)
    }

    /// Apply the transition, producing the successor state.
    #[must_use]
    pub fn apply(&self, cube: &Cube) -> Cube {
        cube.turned(self.side, self.turns)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The fixed catalog: a clockwise and a counter-clockwise quarter turn of
/// each side. All twelve are applicable in every state.
pub static OPERATORS: LazyLock<Vec<Operator>> = LazyLock::new(|| {
    [1, 3]
        .into_iter()
        .flat_map(|turns| SIDES.into_iter().map(move |side| Operator::new(side, turns)))
        .collect()
});

/// Look up a catalog operator by its label.
#[must_use]
pub fn find_operator(name: &str) -> Option<&'static Operator> {
    OPERATORS.iter().find(|operator| operator.name == name)
}

/// Scramble `cube` by applying `length` random catalog operators, feeding
/// each successor state into the next draw.
#[must_use]
pub fn scramble(cube: &Cube, length: usize) -> Cube {
    scramble_with(&mut fastrand::Rng::new(), cube, length)
}

/// [`scramble`] with a caller-supplied generator, for reproducible states.
#[must_use]
pub fn scramble_with(rng: &mut fastrand::Rng, cube: &Cube, length: usize) -> Cube {
    let mut state = cube.clone();

    for _ in 0..length {
        let operator = &OPERATORS[rng.usize(..OPERATORS.len())];
        debug!("Scramble applies {operator}");
        state = operator.apply(&state);
    }

    state
}
