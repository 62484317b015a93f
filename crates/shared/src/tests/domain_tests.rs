use super::*;

#[test]
fn four_turns_in_either_direction_restore_orientation() {
    for start in Orientation::CLOCKWISE {
        assert_eq!(start.left().left().left().left(), start);
        assert_eq!(start.right().right().right().right(), start);
    }
}

#[test]
fn left_and_right_follow_the_compass() {
    assert_eq!(Orientation::North.left(), Orientation::West);
    assert_eq!(Orientation::West.left(), Orientation::South);
    assert_eq!(Orientation::North.right(), Orientation::East);
    assert_eq!(Orientation::West.right(), Orientation::North);
    assert_eq!(Orientation::South.left().right(), Orientation::South);
}

#[test]
fn delta_points_north_towards_increasing_y() {
    assert_eq!(Orientation::North.delta(), (0, 1));
    assert_eq!(Orientation::East.delta(), (1, 0));
    assert_eq!(Orientation::South.delta(), (0, -1));
    assert_eq!(Orientation::West.delta(), (-1, 0));
}

#[test]
fn grid_bounds_are_half_open() {
    assert!(Coordinate::new(0, 0).is_on_grid());
    assert!(Coordinate::new(GRID_SIZE - 1, GRID_SIZE - 1).is_on_grid());
    assert!(!Coordinate::new(GRID_SIZE, 0).is_on_grid());
    assert!(!Coordinate::new(0, -1).is_on_grid());
}

#[test]
fn on_grid_constructor_rejects_off_grid_values() {
    assert_eq!(Coordinate::on_grid(2, 3).expect("on grid"), Coordinate::new(2, 3));
    let err = Coordinate::on_grid(5, 0).expect_err("off grid");
    assert!(matches!(err, CommandError::InvalidArgument(_)));
}

#[test]
fn offset_reports_overflow_as_none() {
    assert_eq!(Coordinate::new(1, 1).offset((0, 1)), Some(Coordinate::new(1, 2)));
    assert_eq!(Coordinate::new(i32::MAX, 0).offset((1, 0)), None);
}

#[test]
fn coordinate_parses_with_loose_whitespace() {
    let parsed: Coordinate = " 3 , 4 ".parse().expect("coordinate");
    assert_eq!(parsed, Coordinate::new(3, 4));
    assert_eq!(parsed.to_string(), "3,4");
}

#[test]
fn malformed_coordinates_fail_with_invalid_argument() {
    for raw in ["", "3", "a,1", "1,", "1,2,3", "99999999999,0"] {
        let err = raw.parse::<Coordinate>().expect_err(raw);
        assert!(matches!(err, CommandError::InvalidArgument(_)), "{raw}: {err:?}");
    }
}

#[test]
fn orientation_parses_case_insensitively() {
    assert_eq!("north".parse::<Orientation>().expect("north"), Orientation::North);
    assert_eq!(" West ".parse::<Orientation>().expect("west"), Orientation::West);
    assert!("N".parse::<Orientation>().is_err());
    assert_eq!(Orientation::South.to_string(), "SOUTH");
}
