use broadside::board::playable_cells;
use broadside::{AttackResponse, Board, BoardError, Coordinates, Orientation, ShotLog, BOARD_SIZE};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn at(v: u8, h: u8) -> Coordinates {
    Coordinates::new(v, h).unwrap()
}

#[test]
fn test_manual_place_and_disable() {
    let mut board = Board::new();
    board.place(3, at(1, 1), Orientation::Horizontal).unwrap();
    board.place(2, at(5, 5), Orientation::Vertical).unwrap();

    assert_eq!(board.receive_attack(at(1, 1)), AttackResponse::Hit);
    assert_eq!(board.receive_attack(at(1, 2)), AttackResponse::Hit);
    assert_eq!(board.receive_attack(at(1, 3)), AttackResponse::DisabledShip);
    assert_eq!(board.ships_afloat(), 1);

    assert_eq!(board.receive_attack(at(2, 2)), AttackResponse::Missed);
    assert_eq!(board.receive_attack(at(5, 5)), AttackResponse::Hit);
    assert_eq!(board.receive_attack(at(6, 5)), AttackResponse::GameEnd);
    assert!(board.all_disabled());
}

#[test]
fn test_repeat_and_off_board_shots_miss() {
    let mut board = Board::new();
    board.place(2, at(1, 1), Orientation::Horizontal).unwrap();

    assert_eq!(board.receive_attack(at(1, 1)), AttackResponse::Hit);
    assert_eq!(board.receive_attack(at(1, 1)), AttackResponse::Missed);
    assert_eq!(board.receive_attack(at(0, 1)), AttackResponse::Missed);
    assert_eq!(board.receive_attack(at(11, 15)), AttackResponse::Missed);
    assert_eq!(board.ships_afloat(), 1);
}

#[test]
fn test_placement_errors() {
    let mut board = Board::new();
    assert!(matches!(
        board.place(3, at(1, 9), Orientation::Horizontal),
        Err(BoardError::ShipOutOfBounds { size: 3, .. })
    ));
    board.place(3, at(2, 2), Orientation::Vertical).unwrap();
    assert_eq!(
        board.place(4, at(3, 1), Orientation::Horizontal),
        Err(BoardError::ShipOverlaps)
    );
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(board.place_random(&mut rng, 11), Err(BoardError::UnableToPlaceShip(11)));
}

#[test]
fn test_place_random_all_ships_no_overlap() {
    let mut rng = SmallRng::seed_from_u64(42);
    let (board, failures) = Board::random(&mut rng, [5, 4, 3, 3, 2]);
    assert!(failures.is_empty());
    assert_eq!(board.ship_count(), 5);

    let occupied = playable_cells().filter(|&c| board.occupied(c)).count();
    assert_eq!(occupied, 17, "all ships should be placed without overlap");
}

#[test]
fn test_sweeping_the_board_ends_the_game() {
    let mut rng = SmallRng::seed_from_u64(7);
    let (mut board, _) = Board::random(&mut rng, [5, 4, 3, 3, 2]);
    let mut disabled = 0;
    let mut last = AttackResponse::Missed;
    for cell in playable_cells() {
        last = board.receive_attack(cell);
        if last == AttackResponse::DisabledShip {
            disabled += 1;
        }
        if last == AttackResponse::GameEnd {
            break;
        }
    }
    assert_eq!(last, AttackResponse::GameEnd);
    assert_eq!(disabled, 4);
}

#[test]
fn test_shot_log_tracks_untried_cells() {
    let mut log = ShotLog::new();
    assert_eq!(log.untried().len(), (BOARD_SIZE as usize).pow(2));
    log.record(at(3, 4), AttackResponse::Hit);
    log.record(at(0, 0), AttackResponse::Missed);
    assert!(log.tried(at(3, 4)));
    assert_eq!(log.result(at(3, 4)), Some(AttackResponse::Hit));
    assert_eq!(log.untried().len(), 99);
    assert!(log.render().contains('X'));
}
