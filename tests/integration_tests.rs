use roversim::*;

fn canonical_plan() -> MissionPlan {
    MissionPlan {
        start: Position::new(0, 0),
        heading: Direction::East,
        obstacles: vec![Position::new(2, 2), Position::new(3, 5)],
        commands: parse_script("MMRMLM").unwrap(),
    }
}

#[test]
fn test_mission_end_to_end() {
    let report = run_mission(&canonical_plan()).unwrap();

    assert_eq!(report.final_position, Position::new(3, -1));
    assert_eq!(report.final_heading, Direction::East);
    assert!(!report.status.obstacle_detected);
    assert_eq!(
        report.status.to_string(),
        "Rover is at (3, -1) facing East. No obstacles detected."
    );

    assert_eq!(report.stats.commands_executed, 6);
    assert_eq!(report.stats.moves_completed, 4);
    assert_eq!(report.stats.moves_blocked, 0);
    assert_eq!(report.stats.turns, 2);
}

#[test]
fn test_mission_trace_matches_expected_poses() {
    let report = run_mission(&canonical_plan()).unwrap();

    let expected = [
        (Position::new(1, 0), Direction::East),
        (Position::new(2, 0), Direction::East),
        (Position::new(2, 0), Direction::South),
        (Position::new(2, -1), Direction::South),
        (Position::new(2, -1), Direction::East),
        (Position::new(3, -1), Direction::East),
    ];

    assert_eq!(report.trace.len(), expected.len());
    for (record, (position, heading)) in report.trace.iter().zip(expected) {
        assert_eq!(record.position, position);
        assert_eq!(record.heading, heading);
        assert_eq!(record.outcome, StepOutcome::Completed);
    }

    // Sequence ids follow queue order.
    let ids: Vec<u32> = report.trace.iter().map(|r| r.command_id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_blocked_move_is_a_no_op() {
    let plan = MissionPlan {
        start: Position::new(1, 2),
        heading: Direction::North,
        obstacles: vec![Position::new(1, 3)],
        commands: vec![CommandKind::Move],
    };

    let report = run_mission(&plan).unwrap();
    assert_eq!(report.final_position, Position::new(1, 2));
    assert_eq!(report.final_heading, Direction::North);
    assert_eq!(report.stats.moves_blocked, 1);
    assert_eq!(report.stats.moves_completed, 0);
    assert_eq!(
        report.trace[0].outcome,
        StepOutcome::Blocked {
            obstacle: Position::new(1, 3)
        }
    );
}

#[test]
fn test_start_on_obstacle_sets_status_flag() {
    // An obstacle may coincide with the start cell; the flag is descriptive
    // and does not forbid occupancy.
    let plan = MissionPlan {
        start: Position::new(2, 2),
        heading: Direction::North,
        obstacles: vec![Position::new(2, 2)],
        commands: vec![CommandKind::TurnLeft],
    };

    let report = run_mission(&plan).unwrap();
    assert_eq!(report.final_position, Position::new(2, 2));
    assert!(report.status.obstacle_detected);
    assert_eq!(
        report.status.to_string(),
        "Rover is at (2, 2) facing West. Obstacle detected."
    );
}

#[test]
fn test_queue_path_matches_direct_run() {
    let plan = canonical_plan();

    let mut queued = RoverAgent::from_plan(&plan).unwrap();
    queued.queue_script("MMRMLM").unwrap();
    assert_eq!(queued.queued_commands(), 6);
    assert_eq!(queued.process_commands(), 6);

    let direct = run_mission(&plan).unwrap();
    assert_eq!(queued.rover().position(), direct.final_position);
    assert_eq!(queued.rover().heading(), direct.final_heading);
    assert_eq!(queued.trace(), direct.trace.as_slice());
}

#[test]
fn test_plan_json_and_inline_build_the_same_mission() {
    let json = r#"{
        "start": {"x": 0, "y": 0},
        "heading": "East",
        "obstacles": [{"x": 2, "y": 2}, {"x": 3, "y": 5}],
        "commands": ["Move", "Move", "TurnRight", "Move", "TurnLeft", "Move"]
    }"#;

    let from_json = MissionPlan::from_json(json).unwrap();
    assert_eq!(from_json, canonical_plan());

    let report = run_mission(&from_json).unwrap();
    assert_eq!(report.final_position, Position::new(3, -1));
}

#[test]
fn test_mission_is_deterministic() {
    let plan = canonical_plan();
    let first = run_mission(&plan).unwrap();
    let second = run_mission(&plan).unwrap();

    assert_eq!(first.trace, second.trace);
    assert_eq!(first.stats, second.stats);
    assert_eq!(first.final_position, second.final_position);
}

#[test]
fn test_obstacle_capacity_is_a_setup_error() {
    let obstacles: Vec<Position> = (0..=grid::MAX_OBSTACLES as i32)
        .map(|x| Position::new(x, 0))
        .collect();
    let plan = MissionPlan {
        start: Position::new(0, 0),
        heading: Direction::North,
        obstacles,
        commands: vec![CommandKind::Move],
    };

    assert!(matches!(
        run_mission(&plan),
        Err(MissionError::Agent(AgentError::Grid(GridError::FieldFull)))
    ));
}
