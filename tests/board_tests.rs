//! Board tests - grid access and bonus layout symmetry

use proptest::prelude::*;

use scrambles::core::Board;
use scrambles::types::{tile_bonus, Bonus, TileCode, BOARD_SIZE};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    for y in 0..BOARD_SIZE as i32 {
        for x in 0..BOARD_SIZE as i32 {
            assert!(board.is_free(x, y), "Cell ({}, {}) should be free", x, y);
            assert_eq!(board.get(x, y), Some(None));
        }
    }
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_SIZE as i32, 0), None);
    assert_eq!(board.get(0, BOARD_SIZE as i32), None);
    assert!(board.is_out_of_bounds(15, 15));
    assert!(!board.is_occupied(-1, -1));
}

#[test]
fn test_board_set_clear() {
    let mut board = Board::new();
    assert!(board.set(5, 10, TileCode::from_char('k')));
    assert!(!board.set(15, 0, TileCode::from_char('k')));
    assert!(board.is_occupied(5, 10));
    board.clear();
    assert!(board.is_free(5, 10));
}

#[test]
fn test_center_is_double_word() {
    assert_eq!(tile_bonus(7, 7), Bonus::DoubleWord);
    assert_eq!(Board::new().bonus(7, 7), Bonus::DoubleWord);
}

#[test]
fn test_bonus_symmetry_exhaustive() {
    for y in 0..15 {
        for x in 0..15 {
            let b = tile_bonus(x, y);
            assert_eq!(b, tile_bonus(14 - x, 14 - y), "point symmetry at ({x},{y})");
            assert_eq!(b, tile_bonus(y, x), "diagonal symmetry at ({x},{y})");
            assert_eq!(b, tile_bonus(14 - x, y), "mirror symmetry at ({x},{y})");
        }
    }
}

proptest! {
    #[test]
    fn bonus_layout_has_octant_symmetry(x in 0i32..15, y in 0i32..15) {
        let b = tile_bonus(x, y);
        prop_assert_eq!(b, tile_bonus(14 - x, 14 - y));
        prop_assert_eq!(b, tile_bonus(y, x));
    }

    #[test]
    fn out_of_range_cells_are_normal(x in -50i32..50, y in -50i32..50) {
        prop_assume!(!(0..15).contains(&x) || !(0..15).contains(&y));
        prop_assert_eq!(tile_bonus(x, y), Bonus::Normal);
    }

    #[test]
    fn index_and_coords_round_trip(x in 0i32..15, y in 0i32..15) {
        let index = Board::index(x, y).unwrap();
        prop_assert_eq!(Board::coords(index), (x, y));
    }
}
