#![allow(missing_docs)]
#![allow(clippy::indexing_slicing, clippy::arithmetic_side_effects)]
//! Host-level tests for the serpentine coordinate mapper.

use letter_panel::layout::SerpentineLayout;

type Panel5x5 = SerpentineLayout<25, 5, 5>;

#[test]
fn even_rows_map_left_to_right() {
    assert_eq!(Panel5x5::index(0, 0), 0);
    assert_eq!(Panel5x5::index(0, 1), 1);
    assert_eq!(Panel5x5::index(0, 4), 4);
    assert_eq!(Panel5x5::index(2, 0), 10);
    assert_eq!(Panel5x5::index(2, 4), 14);
    assert_eq!(Panel5x5::index(4, 0), 20);
    assert_eq!(Panel5x5::index(4, 4), 24);
}

#[test]
fn odd_rows_map_right_to_left() {
    assert_eq!(Panel5x5::index(1, 0), 9);
    assert_eq!(Panel5x5::index(1, 4), 5);
    assert_eq!(Panel5x5::index(3, 0), 19);
    assert_eq!(Panel5x5::index(3, 4), 15);
}

#[test]
fn even_rows_ascend_and_odd_rows_descend() {
    for row in 0..5 {
        for col in 1..5 {
            let previous = Panel5x5::index(row, col - 1);
            let current = Panel5x5::index(row, col);
            if row % 2 == 0 {
                assert!(previous < current, "row {row} should ascend");
            } else {
                assert!(previous > current, "row {row} should descend");
            }
        }
    }
}

#[test]
fn index_is_a_bijection_over_the_grid() {
    let mut seen = [false; 25];
    for row in 0..5 {
        for col in 0..5 {
            let index = Panel5x5::index(row, col);
            assert!(index < 25, "index in range");
            assert!(!seen[index], "({row}, {col}) collides at {index}");
            seen[index] = true;
        }
    }
    assert!(seen.iter().all(|&covered| covered));
}

#[test]
fn generalizes_to_non_square_grids() {
    type Panel3x2 = SerpentineLayout<6, 3, 2>;
    // Row 0: 0 1 2, row 1 reversed: 5 4 3.
    assert_eq!(Panel3x2::index(0, 0), 0);
    assert_eq!(Panel3x2::index(0, 2), 2);
    assert_eq!(Panel3x2::index(1, 0), 5);
    assert_eq!(Panel3x2::index(1, 1), 4);
    assert_eq!(Panel3x2::index(1, 2), 3);
}

#[test]
fn dimensions_are_exposed() {
    assert_eq!(Panel5x5::WIDTH, 5);
    assert_eq!(Panel5x5::HEIGHT, 5);
    assert_eq!(Panel5x5::LEN, 25);
}

#[test]
#[should_panic(expected = "row out of bounds")]
fn index_panics_on_out_of_bounds_row() {
    let _ = Panel5x5::index(5, 0);
}

#[test]
#[should_panic(expected = "column out of bounds")]
fn index_panics_on_out_of_bounds_column() {
    let _ = Panel5x5::index(0, 5);
}

#[test]
#[should_panic(expected = "W*H must equal N")]
fn index_panics_on_mismatched_dimensions() {
    let _ = SerpentineLayout::<24, 5, 5>::index(0, 0);
}
