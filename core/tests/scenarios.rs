use sweeper_core::*;

#[test]
fn fresh_game_is_hidden_and_annotated() {
    let game = Game::new(Difficulty::Expert.config(), 2024);

    assert_eq!(game.state(), GameState::InProgress);
    assert_eq!(game.total_cells(), 18 * 12);
    for index in 0..usize::from(game.total_cells()) {
        let cell = game.cell_at(index).expect("in range");
        assert!(!cell.revealed());
        assert!(!cell.flagged());
        assert!(cell.adjacent_mines() <= 8);
        assert_eq!(game.cell_view(index), Some(CellView::Hidden));
    }
    assert_eq!(game.cell_at(usize::from(game.total_cells())), None);
    assert_eq!(game.mines_remaining(), 50);
}

#[test]
fn two_phase_tap_on_single_row() {
    // 0 0 0 1 * 1 0
    let mut game = Game::with_mines(1, 7, &[4]).expect("valid layout");

    assert_eq!(game.reveal(0), Ok(GameState::InProgress));
    assert_eq!(game.flood_reveal(0), Ok(vec![0, 1, 2, 3]));
    assert_eq!(game.cell_view(3), Some(CellView::Count(1)));
    assert_eq!(game.cell_view(4), Some(CellView::Hidden));
    assert_eq!(game.state(), GameState::InProgress);

    assert_eq!(game.reveal(4), Ok(GameState::Lost));
    assert_eq!(game.detonated(), Some(4));
    assert_eq!(game.cell_view(4), Some(CellView::Detonated));
}

#[test]
fn mine_at_row_end_leaves_only_safe_cells() {
    let mut game = Game::with_mines(1, 5, &[4]).expect("valid layout");

    game.reveal(0).unwrap();
    assert_eq!(game.flood_reveal(0), Ok(vec![0, 1, 2, 3]));
    assert!(!game.cell_at(4).unwrap().revealed());
    // every safe cell is open, nothing left to find
    assert_eq!(game.state(), GameState::Won);
    assert_eq!(game.reveal(4), Ok(GameState::Won));
}

#[test]
fn empty_two_by_two_wins_by_hand() {
    let mut game = Game::with_mines(2, 2, &[]).expect("valid layout");

    assert_eq!(game.reveal(0), Ok(GameState::InProgress));
    assert_eq!(game.reveal(1), Ok(GameState::InProgress));
    assert_eq!(game.reveal(2), Ok(GameState::InProgress));
    assert_eq!(game.reveal(3), Ok(GameState::Won));
    assert_eq!(game.safe_revealed(), 4);
}

#[test]
fn empty_two_by_two_wins_by_flood() {
    let mut game = Game::with_mines(2, 2, &[]).expect("valid layout");

    let outcome = game.open(2).expect("in range");

    assert_eq!(outcome.state, GameState::Won);
    assert_eq!(outcome.revealed.len(), 4);
    assert_eq!(outcome.revealed[0], 2);
}

#[test]
fn flood_on_large_empty_board_terminates() {
    let mut game = Game::with_mines(200, 200, &[]).expect("valid layout");

    let mut revealed = game.flood_reveal(0).expect("in range");

    assert_eq!(revealed.len(), 40_000);
    revealed.sort_unstable();
    revealed.dedup();
    assert_eq!(revealed.len(), 40_000);
    assert_eq!(game.state(), GameState::Won);
}

#[test]
fn replay_with_seed_is_reproducible() {
    let config = Difficulty::Intermediate.config();
    let mut a = Game::new(config, 99);
    let mut b = Game::new(config, 99);

    for _ in 0..3 {
        let mines_a: Vec<_> = a.board().mine_indices().collect();
        let mines_b: Vec<_> = b.board().mine_indices().collect();
        assert_eq!(mines_a, mines_b);
        a.play();
        b.play();
    }
}

#[test]
fn finished_game_ignores_input_but_keeps_ticking() {
    let mut game = Game::with_mines(2, 2, &[1]).expect("valid layout");
    game.tick_elapsed_seconds();
    game.reveal(1).unwrap();

    assert_eq!(game.toggle_flag(0), Ok(MarkOutcome::NoChange));
    assert_eq!(game.flood_reveal(0), Ok(vec![]));
    game.tick_elapsed_seconds();

    assert_eq!(game.state(), GameState::Lost);
    assert_eq!(game.elapsed_seconds(), 2);
}

#[test]
fn config_from_json_feeds_game() {
    let config: GameConfig =
        serde_json::from_str(r#"{"rows": 16, "cols": 15, "mineCount": 15}"#).expect("valid json");
    let game = Game::new(config, 5);

    assert_eq!(game.total_cells(), 240);
    assert_eq!(game.total_mines(), 15);
}
