use std::collections::HashSet;

use cube_core::{
    SIDES, Side,
    cube::Cube,
    operators::{OPERATORS, scramble, scramble_with},
};
use itertools::{Itertools, iproduct};
use log::info;

#[test_log::test]
fn test_four_quarter_turns_restore_any_state() {
    let scrambled = scramble_with(&mut fastrand::Rng::with_seed(7), &Cube::solved(), 25);

    for side in SIDES {
        let mut state = scrambled.clone();
        for _ in 0..4 {
            state = state.turned(side, 1);
        }

        assert_eq!(state, scrambled);
        assert_eq!(state.cubies(), scrambled.cubies());
    }
}

#[test_log::test]
fn test_turn_counts_reduce_modulo_four() {
    let cube = Cube::solved().turned(Side::Front, 1).turned(Side::Up, 2);

    for side in SIDES {
        for turns in 0..=8 {
            assert_eq!(
                cube.turned(side, turns).cubies(),
                cube.turned(side, turns % 4).cubies()
            );
        }
    }
}

#[test_log::test]
fn test_turns_move_exactly_one_layer() {
    let cube = scramble_with(&mut fastrand::Rng::with_seed(99), &Cube::solved(), 12);

    for side in SIDES {
        let turned = cube.turned(side, 1);
        let mut in_layer = 0;

        for (before, after) in cube.cubies().iter().zip(turned.cubies().iter()) {
            if before.in_side(side) {
                in_layer += 1;
            } else {
                assert_eq!(before, after);
            }
        }

        assert_eq!(in_layer, 9);
    }
}

#[test_log::test]
fn test_cubies_always_tile_the_grid() {
    let grid: HashSet<[i32; 3]> = iproduct!([-1, 0, 1], [-1, 0, 1], [-1, 0, 1])
        .map(|(x, y, z)| [x, y, z])
        .collect();

    let mut rng = fastrand::Rng::with_seed(2024);
    for length in [0, 1, 5, 40] {
        let positions: HashSet<[i32; 3]> = scramble_with(&mut rng, &Cube::solved(), length)
            .cubies()
            .iter()
            .map(|cubie| cubie.position().into_inner())
            .collect();

        assert_eq!(positions, grid);
    }

    let positions: HashSet<[i32; 3]> = scramble(&Cube::solved(), 30)
        .cubies()
        .iter()
        .map(|cubie| cubie.position().into_inner())
        .collect();

    assert_eq!(positions, grid);
}

#[test_log::test]
fn test_every_colour_keeps_nine_facelets() {
    let cube = scramble_with(&mut fastrand::Rng::with_seed(5), &Cube::solved(), 33);
    let grids = cube.facelet_grids();

    let counts = grids.iter().flatten().flatten().counts();
    assert_eq!(counts.len(), 6);
    assert!(counts.values().all(|&count| count == 9));
}

#[test_log::test]
fn test_inverse_and_full_turns_solve_back() {
    let there_and_back = Cube::solved().turned(Side::Right, 1).turned(Side::Right, 3);
    assert!(there_and_back.is_solved());

    let mut cube = Cube::solved();
    for _ in 0..4 {
        cube = cube.turned(Side::Up, 1);
    }

    assert!(cube.is_solved());
    assert_eq!(cube.cubies(), Cube::solved().cubies());
}

#[test_log::test]
fn test_goal_test_is_visual() {
    assert!(Cube::solved().is_solved());
    assert_eq!(Cube::solved(), Cube::solved());

    let turned = Cube::solved().turned(Side::Front, 1);
    assert!(!turned.is_solved());
    assert_ne!(turned, Cube::solved());

    info!("Checking that the goal rejects every single-operator successor");
    for operator in OPERATORS.iter() {
        assert!(!operator.apply(&Cube::solved()).is_solved());
    }
}

#[test_log::test]
fn test_right_turn_grid_layout() {
    use cube_core::Colour::{Blue, Green, Orange, Red, White, Yellow};

    let [up, front, right, back, left, down] =
        Cube::solved().turned(Side::Right, 1).facelet_grids();

    assert_eq!(up, [[White, White, Blue]; 3]);
    assert_eq!(front, [[Blue, Blue, Yellow]; 3]);
    assert_eq!(right, [[Red; 3]; 3]);
    assert_eq!(back, [[White, Green, Green]; 3]);
    assert_eq!(left, [[Orange; 3]; 3]);
    assert_eq!(down, [[Green, Yellow, Yellow]; 3]);
}

#[test_log::test]
fn test_up_turn_grid_layout() {
    use cube_core::Colour::{Blue, Green, Orange, Red, White, Yellow};

    let [up, front, right, back, left, down] = Cube::solved().turned(Side::Up, 1).facelet_grids();

    assert_eq!(up, [[White; 3]; 3]);
    assert_eq!(front, [[Red; 3], [Blue; 3], [Blue; 3]]);
    assert_eq!(right, [[Green; 3], [Red; 3], [Red; 3]]);
    assert_eq!(back, [[Orange; 3], [Green; 3], [Green; 3]]);
    assert_eq!(left, [[Blue; 3], [Orange; 3], [Orange; 3]]);
    assert_eq!(down, [[Yellow; 3]; 3]);
}
