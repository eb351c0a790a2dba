//! Undo log integration tests.
//!
//! Every committed action must be reversible one step at a time, including
//! the auto-reveal it triggered and (under the default policy) stock refills.

use klondike_engine::{
    BoardBuilder, CardId, DropTarget, EngineConfig, EngineEvent, Intent, Klondike, MoveRecord,
    PileId, Rank, RefillPolicy, Rejection, Suit,
};

fn id(suit: Suit, rank: u8) -> CardId {
    CardId::new(suit, Rank::new(rank).unwrap())
}

#[test]
fn test_undo_empty_log() {
    let mut g = Klondike::new_game(EngineConfig::default(), Some(1));

    assert!(!g.can_undo());
    assert_eq!(g.undo().rejection(), Some(Rejection::NothingToUndo));
}

#[test]
fn test_undo_draw() {
    let mut g = Klondike::new_game(EngineConfig::default(), Some(2));
    let before = g.board().clone();

    g.click_stock();
    assert!(g.can_undo());
    assert!(g.undo().is_committed());

    assert_eq!(g.board(), &before);
    assert!(g.history().is_empty());
}

#[test]
fn test_undo_restores_hidden_card() {
    let hidden = id(Suit::Diamonds, 6);
    let queen = id(Suit::Hearts, 12);
    let king = id(Suit::Clubs, 13);
    let board = BoardBuilder::new()
        .face_down(PileId::tableau(3), hidden)
        .face_up(PileId::tableau(3), queen)
        .face_up(PileId::tableau(0), king)
        .build();
    let mut g = Klondike::from_board(EngineConfig::default(), board.clone());

    g.propose_move(queen, DropTarget::Pile(PileId::tableau(0)));
    assert!(g.card(hidden).is_face_up());

    let events = g.undo().into_events();

    assert_eq!(g.board(), &board);
    assert!(g.card(hidden).face_down);
    assert_eq!(
        events[0],
        EngineEvent::CardFlipped { card: hidden, face_down: true }
    );
}

#[test]
fn test_undo_run_move() {
    let run = [id(Suit::Clubs, 9), id(Suit::Diamonds, 8), id(Suit::Spades, 7)];
    let ten = id(Suit::Hearts, 10);
    let board = BoardBuilder::new()
        .face_up_run(PileId::tableau(6), &run)
        .face_up(PileId::tableau(1), ten)
        .build();
    let mut g = Klondike::from_board(EngineConfig::default(), board.clone());

    assert!(g.propose_move(run[0], DropTarget::Pile(PileId::tableau(1))).is_committed());
    assert!(matches!(g.history().last(), Some(MoveRecord::Run { .. })));

    g.handle_intent(Intent::Undo);
    assert_eq!(g.board(), &board);
}

#[test]
fn test_undo_is_lifo() {
    let ace = id(Suit::Hearts, 1);
    let two = id(Suit::Hearts, 2);
    let board = BoardBuilder::new()
        .face_up(PileId::tableau(0), ace)
        .face_up(PileId::tableau(1), two)
        .build();
    let mut g = Klondike::from_board(EngineConfig::default(), board.clone());

    g.double_click(ace);
    let after_first = g.board().clone();
    g.double_click(two);
    assert_eq!(g.history().len(), 2);

    g.undo();
    assert_eq!(g.board(), &after_first);
    g.undo();
    assert_eq!(g.board(), &board);
}

#[test]
fn test_refill_undoable_by_default() {
    let mut g = Klondike::new_game(EngineConfig::default(), Some(8));
    for _ in 0..24 {
        g.click_stock();
    }
    let before_refill = g.board().clone();

    g.click_stock();
    assert_eq!(g.history().last(), Some(&MoveRecord::Refill { count: 24 }));

    assert!(g.undo().is_committed());
    assert_eq!(g.board(), &before_refill);
    assert_eq!(g.history().len(), 24);
}

#[test]
fn test_permanent_refill_clears_log() {
    let config = EngineConfig::default().with_refill_policy(RefillPolicy::Permanent);
    let mut g = Klondike::new_game(config, Some(8));
    for _ in 0..24 {
        g.click_stock();
    }

    g.click_stock();

    assert!(g.history().is_empty());
    assert_eq!(g.undo().rejection(), Some(Rejection::NothingToUndo));
    assert_eq!(g.pile(PileId::STOCK).len(), 24);
}

#[test]
fn test_full_rewind_restores_deal() {
    let mut g = Klondike::new_game(EngineConfig::default(), Some(21));
    let dealt = g.board().clone();

    for _ in 0..30 {
        g.click_stock();
    }
    for card in CardId::all() {
        g.double_click(card);
    }

    while g.can_undo() {
        assert!(g.undo().is_committed());
    }
    assert_eq!(g.board(), &dealt);
}
