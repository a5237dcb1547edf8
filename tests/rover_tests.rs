use roversim::*;

#[test]
fn test_move_advances_along_each_heading() {
    let field = ObstacleField::new();
    let cases = [
        (Direction::North, Position::new(0, 1)),
        (Direction::South, Position::new(0, -1)),
        (Direction::East, Position::new(1, 0)),
        (Direction::West, Position::new(-1, 0)),
    ];

    for (heading, expected) in cases {
        let mut rover = Rover::new(0, 0, heading);
        assert_eq!(rover.advance(&field), StepOutcome::Completed);
        assert_eq!(rover.position(), expected);
        assert_eq!(rover.heading(), heading);
    }
}

#[test]
fn test_blocked_move_changes_nothing() {
    let mut field = ObstacleField::new();
    field.add(1, 3).unwrap();

    let mut rover = Rover::new(1, 2, Direction::North);
    let outcome = rover.advance(&field);

    assert_eq!(
        outcome,
        StepOutcome::Blocked {
            obstacle: Position::new(1, 3)
        }
    );
    assert_eq!(rover.position(), Position::new(1, 2));
    assert_eq!(rover.heading(), Direction::North);

    // Still blocked on retry; still a no-op.
    assert!(rover.advance(&field).is_blocked());
    assert_eq!(rover.position(), Position::new(1, 2));
}

#[test]
fn test_turns_never_change_position() {
    // The adjacent blocked cell has no bearing on turns.
    let mut field = ObstacleField::new();
    field.add(4, -6).unwrap();

    let mut rover = Rover::new(4, -7, Direction::East);

    rover.turn_left();
    assert_eq!(rover.position(), Position::new(4, -7));
    assert_eq!(rover.heading(), Direction::North);

    rover.turn_right();
    rover.turn_right();
    assert_eq!(rover.position(), Position::new(4, -7));
    assert_eq!(rover.heading(), Direction::South);

    rover.turn_left();
    assert_eq!(rover.position(), Position::new(4, -7));
    assert_eq!(rover.heading(), Direction::East);
}

#[test]
fn test_rover_may_start_on_an_obstacle() {
    let mut field = ObstacleField::new();
    field.add(0, 0).unwrap();
    field.add(0, 1).unwrap();

    let mut rover = Rover::new(0, 0, Direction::North);
    let status = rover.status_report(&field);
    assert!(status.obstacle_detected);

    // Moving off the start cell is gated by the target, not the origin.
    assert!(rover.advance(&field).is_blocked());
    rover.turn_right();
    assert_eq!(rover.advance(&field), StepOutcome::Completed);
    assert_eq!(rover.position(), Position::new(1, 0));
    assert!(!rover.status_report(&field).obstacle_detected);
}

#[test]
fn test_grid_is_unbounded() {
    let field = ObstacleField::new();
    let mut rover = Rover::new(i32::MAX - 1, 0, Direction::East);
    assert_eq!(rover.advance(&field), StepOutcome::Completed);
    assert_eq!(rover.position().x, i32::MAX);

    let mut rover = Rover::new(0, i32::MIN + 1, Direction::South);
    assert_eq!(rover.advance(&field), StepOutcome::Completed);
    assert_eq!(rover.position().y, i32::MIN);
}
