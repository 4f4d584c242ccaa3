//! Precondition violations and how they are classified.

use dots_and_boxes::{
    Coordinate, Direction, DotsAndBoxes, ErrorKind, GameConfig, GameEngine, GameError, Player,
};

/// Every query and move fails with `InvalidState` before `init`.
#[test]
fn test_call_before_init() {
    let mut game = GameEngine::new();
    let origin = Coordinate::new(0, 0);

    let errors = [
        game.scores().map(|_| ()).unwrap_err(),
        game.size().map(|_| ()).unwrap_err(),
        game.current_player().map(|_| ()).unwrap_err(),
        game.owner_at(origin).map(|_| ()).unwrap_err(),
        game.drawn_edges_at(origin).map(|_| ()).unwrap_err(),
        game.is_game_over().map(|_| ()).unwrap_err(),
        game.result().map(|_| ()).unwrap_err(),
        game.box_count().map(|_| ()).unwrap_err(),
        game.draw_edge(origin, Direction::Top).map(|_| ()).unwrap_err(),
        game.play_edge(origin, Direction::Top).map(|_| ()).unwrap_err(),
    ];

    for err in errors {
        assert_eq!(err, GameError::NotInitialized);
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }
}

#[test]
fn test_init_size_invalid() {
    let mut game = GameEngine::new();
    for size in [0, 1] {
        let err = game.init(size).unwrap_err();
        assert_eq!(err, GameError::InvalidSize(size));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    // Still uninitialized afterwards.
    assert_eq!(game.size().unwrap_err().kind(), ErrorKind::InvalidState);
}

#[test]
fn test_invalid_config_rejected() {
    let config = GameConfig::new(1).with_first_player(Player::Two);
    let err = GameEngine::with_config(&config).unwrap_err();
    assert_eq!(err, GameError::InvalidSize(1));
}

#[test]
fn test_all_valid_sizes_init() {
    for size in 2..=12 {
        let mut game = GameEngine::new();
        game.init(size).unwrap();
        assert_eq!(game.size().unwrap(), size);
        assert_eq!(game.current_player().unwrap(), Some(Player::One));
    }
}

/// A missing direction is an argument error whether or not the grid exists.
#[test]
fn test_direction_missing() {
    let mut game = GameEngine::new();
    let err = game.draw_edge_at(Coordinate::new(0, 0), None).unwrap_err();
    assert_eq!(err, GameError::MissingDirection);
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    game.init(2).unwrap();
    let err = game.draw_edge_at(Coordinate::new(0, 0), None).unwrap_err();
    assert_eq!(err, GameError::MissingDirection);

    // Out-of-range coordinate too: the direction check comes first.
    let err = game.draw_edge_at(Coordinate::new(9, 9), None).unwrap_err();
    assert_eq!(err, GameError::MissingDirection);

    assert_eq!(game.current_player().unwrap(), Some(Player::One));
    assert_eq!(game.drawn_edge_total().unwrap(), 0);
}

#[test]
fn test_direction_from_input() {
    let mut game = GameEngine::new();
    game.init(2).unwrap();

    let err = "".parse::<Direction>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let err = "up".parse::<Direction>().unwrap_err();
    assert_eq!(err, GameError::UnknownDirection("up".to_string()));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let dir: Direction = "left".parse().unwrap();
    assert!(game.draw_edge(Coordinate::new(0, 0), dir).unwrap());
}

#[test]
fn test_coordinate_out_of_range() {
    let mut game = GameEngine::new();
    game.init(3).unwrap();

    for coord in [Coordinate::new(3, 0), Coordinate::new(0, 3), Coordinate::new(7, 7)] {
        let expected = GameError::OutOfBounds { coord, size: 3 };
        assert_eq!(game.owner_at(coord).unwrap_err(), expected);
        assert_eq!(game.drawn_edges_at(coord).unwrap_err(), expected);
        assert_eq!(game.draw_edge(coord, Direction::Top).unwrap_err(), expected);
        assert_eq!(expected.kind(), ErrorKind::InvalidArgument);
    }

    assert_eq!(game.drawn_edge_total().unwrap(), 0);
    assert_eq!(game.current_player().unwrap(), Some(Player::One));
}

/// Boundary edges are legal moves, not lookup failures.
#[test]
fn test_boundary_edges_are_not_errors() {
    let mut game = GameEngine::new();
    game.init(2).unwrap();

    assert!(game.draw_edge(Coordinate::new(0, 0), Direction::Top).unwrap());
    assert!(game.draw_edge(Coordinate::new(0, 0), Direction::Left).unwrap());
    assert!(game.draw_edge(Coordinate::new(1, 1), Direction::Bottom).unwrap());
    assert!(game.draw_edge(Coordinate::new(1, 1), Direction::Right).unwrap());
    assert_eq!(game.drawn_edge_total().unwrap(), 4);
}

#[test]
fn test_error_display() {
    let err = GameError::OutOfBounds { coord: Coordinate::new(4, 1), size: 3 };
    assert_eq!(err.to_string(), "coordinate (4, 1) is outside the 3x3 grid");
    assert_eq!(GameError::NotInitialized.to_string(), "grid is not initialized");
    assert_eq!(GameError::MissingDirection.to_string(), "direction is missing");
}
