use super::*;

#[test]
fn parses_place_with_orientation() {
    let command: Command = "PLACE 1,2,NORTH".parse().expect("place");
    assert_eq!(
        command,
        Command::Place {
            position: Coordinate::new(1, 2),
            orientation: Orientation::North,
        }
    );
    assert_eq!(command.handle_name(), "on_place");
}

#[test]
fn place_keeps_off_grid_coordinates_for_the_controller_to_reject() {
    let command: Command = "place 7, -1, east".parse().expect("place");
    assert_eq!(
        command,
        Command::Place {
            position: Coordinate::new(7, -1),
            orientation: Orientation::East,
        }
    );
}

#[test]
fn parses_argumentless_commands_case_insensitively() {
    assert_eq!("move".parse::<Command>().expect("move"), Command::Move);
    assert_eq!("  LEFT ".parse::<Command>().expect("left"), Command::Left);
    assert_eq!("Right".parse::<Command>().expect("right"), Command::Right);
    assert_eq!("REPORT".parse::<Command>().expect("report"), Command::Report);
}

#[test]
fn parses_robot_reference() {
    let command: Command = "ROBOT 2".parse().expect("robot");
    assert_eq!(command, Command::Robot(2));
    assert_eq!(command.handle_name(), "on_robot");
}

#[test]
fn rejects_malformed_lines() {
    assert_eq!("   ".parse::<Command>(), Err(CommandError::Empty));
    assert_eq!(
        "JUMP".parse::<Command>(),
        Err(CommandError::UnknownCommand("JUMP".to_string()))
    );
    for line in ["PLACE", "PLACE 1,2", "PLACE 1,2,UP", "MOVE 3", "ROBOT", "ROBOT one"] {
        let err = line.parse::<Command>().expect_err(line);
        assert!(matches!(err, CommandError::InvalidArgument(_)), "{line}: {err:?}");
    }
}

#[test]
fn description_renders_as_report_line() {
    let description = RobotDescription {
        id: RobotId(1),
        position: Coordinate::new(0, 2),
        orientation: Orientation::West,
    };
    assert_eq!(description.to_string(), "0,2,WEST");
}

#[test]
fn description_serializes_orientation_in_upper_case() {
    let description = RobotDescription {
        id: RobotId(1),
        position: Coordinate::new(3, 4),
        orientation: Orientation::South,
    };
    let json = serde_json::to_value(description).expect("json");
    assert_eq!(
        json,
        serde_json::json!({
            "id": 1,
            "position": { "x": 3, "y": 4 },
            "orientation": "SOUTH"
        })
    );
}
