//! The Klondike engine: intent handling, move commits, and undo.

use log::{debug, info, trace};

use super::drag::{self, DragSession};
use super::events::{EngineEvent, MoveOutcome, Rejection};
use super::layout;
use crate::core::card::{Card, CardId};
use crate::core::config::{EngineConfig, RefillPolicy};
use crate::core::intent::{DropTarget, Intent, Point};
use crate::core::rng::GameRng;
use crate::core::state::{Board, Run};
use crate::history::{MoveRecord, UndoLog};
use crate::piles::{Pile, PileId, PileKind};
use crate::rules::{self, can_accept, GameStatus};

/// A game of Klondike.
///
/// Owns the board, the undo log and the win state. Every mutation goes
/// through a command method (or `handle_intent`), runs to completion, and
/// leaves the board satisfying the partition invariant.
///
/// ## Example
///
/// ```
/// use klondike_engine::{EngineConfig, Intent, Klondike, PileId};
///
/// let mut game = Klondike::new_game(EngineConfig::default(), Some(42));
/// assert_eq!(game.pile(PileId::STOCK).len(), 24);
///
/// let events = game.handle_intent(Intent::ClickStock);
/// assert!(!events.is_empty());
/// assert_eq!(game.pile(PileId::DISCARD).len(), 1);
///
/// game.handle_intent(Intent::Undo);
/// assert_eq!(game.pile(PileId::STOCK).len(), 24);
/// ```
#[derive(Clone, Debug)]
pub struct Klondike {
    config: EngineConfig,
    board: Board,
    history: UndoLog,
    status: GameStatus,
    seed: Option<u64>,
    drag: Option<DragSession>,
}

impl Klondike {
    /// Shuffle and deal a new game. `None` draws a random seed, which is
    /// kept and reported by `seed()`.
    #[must_use]
    pub fn new_game(config: EngineConfig, seed: Option<u64>) -> Self {
        let mut rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let board = rules::deal(&mut rng);
        info!("Dealt new game with seed {}", rng.seed());

        Self {
            config,
            board,
            history: UndoLog::new(),
            status: GameStatus::Playing,
            seed: Some(rng.seed()),
            drag: None,
        }
    }

    /// Start from an arbitrary board, e.g. one built with `BoardBuilder`.
    ///
    /// Panics if the board breaks the partition invariant.
    #[must_use]
    pub fn from_board(config: EngineConfig, board: Board) -> Self {
        board.verify_partition();
        let status = rules::detect(board.piles());

        Self {
            config,
            board,
            history: UndoLog::new(),
            status,
            seed: None,
            drag: None,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> &Card {
        self.board.card(id)
    }

    #[must_use]
    pub fn pile(&self, id: PileId) -> &Pile {
        self.board.pile(id)
    }

    /// Iterate piles in piling order.
    pub fn piles(&self) -> impl Iterator<Item = (PileId, &Pile)> {
        self.board.piles().iter()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Seed of the current deal. `None` for games built with `from_board`.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[must_use]
    pub fn history(&self) -> &UndoLog {
        &self.history
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.status.is_won() && !self.history.is_empty()
    }

    /// The drag in progress, if any.
    #[must_use]
    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Would moving `card` (and everything above it) onto `dest` be accepted?
    ///
    /// Pure: agrees exactly with `propose_move(card, DropTarget::Pile(dest))`.
    #[must_use]
    pub fn is_move_valid(&self, card: CardId, dest: PileId) -> bool {
        self.plan_move(card, dest).is_ok()
    }

    // === Commands ===

    /// Apply one intent and return the events it produced.
    ///
    /// Rejected intents produce no events.
    pub fn handle_intent(&mut self, intent: Intent) -> Vec<EngineEvent> {
        match intent {
            Intent::NewGame { seed } => self.restart(seed),
            Intent::ClickStock => self.click_stock().into_events(),
            Intent::ClickCard { card } => self.click_card(card).into_events(),
            Intent::DoubleClick { card } => self.double_click(card).into_events(),
            Intent::DragStart { card } => self
                .drag_start(card)
                .map(|session| {
                    vec![EngineEvent::RunSelected {
                        cards: session.run.clone(),
                        from: session.source,
                    }]
                })
                .unwrap_or_default(),
            Intent::DragRelease { card, target } => self.drag_release(card, target).into_events(),
            Intent::Undo => self.undo().into_events(),
        }
    }

    /// Replace this game with a fresh deal, keeping the configuration.
    pub fn restart(&mut self, seed: Option<u64>) -> Vec<EngineEvent> {
        *self = Self::new_game(self.config.clone(), seed);
        vec![EngineEvent::Dealt { seed: self.seed }]
    }

    /// Click on the stock: draw its top card, or refill it when empty.
    pub fn click_stock(&mut self) -> MoveOutcome {
        if self.status.is_won() {
            return MoveOutcome::Rejected(Rejection::GameOver);
        }
        match self.board.pile(PileId::STOCK).top_card() {
            Some(card) => MoveOutcome::Committed(self.commit_draw(card)),
            None => self.refill_stock(),
        }
    }

    /// Turn the discard over into the empty stock.
    ///
    /// Does nothing while the stock still has cards.
    pub fn refill_stock(&mut self) -> MoveOutcome {
        if self.status.is_won() {
            return MoveOutcome::Rejected(Rejection::GameOver);
        }
        if !self.board.pile(PileId::STOCK).is_empty() {
            return MoveOutcome::Rejected(Rejection::StockNotEmpty);
        }
        if self.board.pile(PileId::DISCARD).is_empty() {
            return MoveOutcome::Rejected(Rejection::EmptyStock);
        }
        MoveOutcome::Committed(self.commit_refill())
    }

    /// Single click on a card.
    ///
    /// A stock card draws. A face-down tableau top is turned face-up. Any
    /// other card is not clickable.
    pub fn click_card(&mut self, card: CardId) -> MoveOutcome {
        if self.status.is_won() {
            return MoveOutcome::Rejected(Rejection::GameOver);
        }
        let source = self.board.card(card).pile;
        if source == PileId::STOCK {
            return self.click_stock();
        }

        let hidden_top = source.kind() == PileKind::Tableau
            && self.board.pile(source).top_card() == Some(card)
            && self.board.card(card).face_down;
        if hidden_top {
            MoveOutcome::Committed(self.commit_flip(card))
        } else {
            MoveOutcome::Rejected(Rejection::NotMovable)
        }
    }

    /// Double click: send the card to the first foundation that accepts it.
    pub fn double_click(&mut self, card: CardId) -> MoveOutcome {
        if self.status.is_won() {
            return MoveOutcome::Rejected(Rejection::GameOver);
        }
        let source = self.board.card(card).pile;
        let movable = matches!(source.kind(), PileKind::Tableau | PileKind::Discard)
            && self.board.pile(source).top_card() == Some(card);
        if !movable {
            return MoveOutcome::Rejected(Rejection::NotMovable);
        }

        match PileId::foundations().find(|&f| self.is_move_valid(card, f)) {
            Some(dest) => MoveOutcome::Committed(self.commit_relocation(source, card, dest)),
            None => MoveOutcome::Rejected(Rejection::NoDestination),
        }
    }

    /// Press on a card. Records the run that would travel with it.
    ///
    /// Returns `None`, and clears any previous session, if the card cannot
    /// be picked up.
    pub fn drag_start(&mut self, card: CardId) -> Option<&DragSession> {
        self.drag = if self.status.is_won() {
            None
        } else {
            drag::begin(&self.board, card)
        };
        if let Some(session) = &self.drag {
            trace!("Drag started on {} with {} card(s)", card, session.run.len());
        }
        self.drag.as_ref()
    }

    /// Release a dragged card. Ends the session whatever the outcome.
    pub fn drag_release(&mut self, card: CardId, target: DropTarget) -> MoveOutcome {
        self.drag = None;
        self.propose_move(card, target)
    }

    /// Propose moving `card` and everything above it to `target`.
    ///
    /// A stock card is a click on the stock.
    pub fn propose_move(&mut self, card: CardId, target: DropTarget) -> MoveOutcome {
        if self.status.is_won() {
            return MoveOutcome::Rejected(Rejection::GameOver);
        }
        let source = self.board.card(card).pile;
        if source == PileId::STOCK {
            return self.click_stock();
        }

        let dest = match target {
            DropTarget::Pile(dest) => dest,
            DropTarget::Point(point) => match self.resolve_drop(card, source, point) {
                Ok(dest) => dest,
                Err(reason) => return MoveOutcome::Rejected(reason),
            },
        };

        match self.plan_move(card, dest) {
            Ok(()) => MoveOutcome::Committed(self.commit_relocation(source, card, dest)),
            Err(reason) => MoveOutcome::Rejected(reason),
        }
    }

    /// Undo the most recent action.
    pub fn undo(&mut self) -> MoveOutcome {
        if self.status.is_won() {
            return MoveOutcome::Rejected(Rejection::GameOver);
        }
        let Some(record) = self.history.pop() else {
            return MoveOutcome::Rejected(Rejection::NothingToUndo);
        };
        debug!("Undoing {:?}", record);

        let mut events = Vec::new();
        match record {
            MoveRecord::Single { card, from, to, revealed } => {
                self.revert_relocation(&[card], from, to, revealed, &mut events);
            }
            MoveRecord::Run { cards, from, to, revealed } => {
                self.revert_relocation(&cards, from, to, revealed, &mut events);
            }
            MoveRecord::Draw { card } => {
                self.board.move_exact(PileId::DISCARD, &[card], PileId::STOCK);
                self.board.set_face_down(card, true);
                events.push(EngineEvent::CardMoved {
                    cards: Run::from_slice(&[card]),
                    from: PileId::DISCARD,
                    to: PileId::STOCK,
                });
                events.push(EngineEvent::CardFlipped { card, face_down: true });
            }
            MoveRecord::Flip { card } => {
                self.board.set_face_down(card, true);
                events.push(EngineEvent::CardFlipped { card, face_down: true });
            }
            MoveRecord::Refill { count } => {
                let stock = self.board.drain_pile(PileId::STOCK);
                assert!(
                    stock.len() == count,
                    "Refill recorded {} cards but the stock holds {}",
                    count,
                    stock.len()
                );
                let cards = self.turn_over(stock, PileId::DISCARD, false, &mut events);
                events.insert(
                    0,
                    EngineEvent::CardMoved {
                        cards,
                        from: PileId::STOCK,
                        to: PileId::DISCARD,
                    },
                );
            }
        }

        self.board.verify_partition();
        MoveOutcome::Committed(events)
    }

    // === Internals ===

    /// Validate a move without touching state.
    fn plan_move(&self, card: CardId, dest: PileId) -> Result<(), Rejection> {
        if self.status.is_won() {
            return Err(Rejection::GameOver);
        }
        let run = drag::select_run(&self.board, card).ok_or(Rejection::NotMovable)?;
        if dest == self.board.card(card).pile {
            return Err(Rejection::IllegalDestination);
        }

        let lead = self.board.card(run[0]);
        if can_accept(dest.kind(), lead, self.board.top_card(dest), run.len()) {
            Ok(())
        } else {
            Err(Rejection::IllegalDestination)
        }
    }

    fn resolve_drop(
        &self,
        card: CardId,
        source: PileId,
        point: Point,
    ) -> Result<PileId, Rejection> {
        if drag::select_run(&self.board, card).is_none() {
            return Err(Rejection::NotMovable);
        }
        layout::resolve_drop(&self.config.layout, &self.board, source, point, |pile| {
            self.is_move_valid(card, pile)
        })
        .ok_or(Rejection::NoDestination)
    }

    /// Move the run led by `first` from `from` to `to`, auto-reveal, log.
    fn commit_relocation(&mut self, from: PileId, first: CardId, to: PileId) -> Vec<EngineEvent> {
        let cards = self.board.move_run(from, first, to);
        debug!("Moved {} card(s) from {} to {}", cards.len(), from, to);

        let mut events = vec![EngineEvent::CardMoved {
            cards: cards.clone(),
            from,
            to,
        }];
        let revealed = self.reveal_top(from, &mut events);
        self.history.push(MoveRecord::relocation(cards, from, to, revealed));

        self.finish_commit(&mut events);
        events
    }

    fn commit_draw(&mut self, card: CardId) -> Vec<EngineEvent> {
        let cards = self.board.move_run(PileId::STOCK, card, PileId::DISCARD);
        self.board.set_face_down(card, false);
        debug!("Drew {} from the stock", card);

        let mut events = vec![
            EngineEvent::CardMoved {
                cards,
                from: PileId::STOCK,
                to: PileId::DISCARD,
            },
            EngineEvent::CardFlipped { card, face_down: false },
        ];
        self.history.push(MoveRecord::Draw { card });

        self.finish_commit(&mut events);
        events
    }

    fn commit_flip(&mut self, card: CardId) -> Vec<EngineEvent> {
        self.board.set_face_down(card, false);
        debug!("Turned {} face-up", card);

        let mut events = vec![EngineEvent::CardFlipped { card, face_down: false }];
        self.history.push(MoveRecord::Flip { card });

        self.finish_commit(&mut events);
        events
    }

    fn commit_refill(&mut self) -> Vec<EngineEvent> {
        let discard = self.board.drain_pile(PileId::DISCARD);
        let count = discard.len();
        let mut events = Vec::with_capacity(count + 2);
        let cards = self.turn_over(discard, PileId::STOCK, true, &mut events);
        events.insert(
            0,
            EngineEvent::CardMoved {
                cards,
                from: PileId::DISCARD,
                to: PileId::STOCK,
            },
        );
        events.push(EngineEvent::StockRefilled { count });

        match self.config.refill_policy {
            RefillPolicy::Undoable => self.history.push(MoveRecord::Refill { count }),
            RefillPolicy::Permanent => self.history.clear(),
        }
        debug!("Refilled the stock with {} card(s)", count);

        self.finish_commit(&mut events);
        events
    }

    /// Place `cards` onto `pile` in reverse order with the given orientation.
    /// Returns the cards in their new bottom-to-top order.
    fn turn_over(
        &mut self,
        cards: Vec<CardId>,
        pile: PileId,
        face_down: bool,
        events: &mut Vec<EngineEvent>,
    ) -> Run {
        let mut placed = Run::with_capacity(cards.len());
        for card in cards.into_iter().rev() {
            self.board.place(card, pile);
            self.board.set_face_down(card, face_down);
            events.push(EngineEvent::CardFlipped { card, face_down });
            placed.push(card);
        }
        placed
    }

    /// Turn a tableau's new top face-up. Returns whether it flipped.
    fn reveal_top(&mut self, pile: PileId, events: &mut Vec<EngineEvent>) -> bool {
        if pile.kind() != PileKind::Tableau {
            return false;
        }
        match self.board.top_card(pile) {
            Some(top) if top.face_down => {
                let card = top.id();
                self.board.flip(card);
                events.push(EngineEvent::CardFlipped { card, face_down: false });
                true
            }
            _ => false,
        }
    }

    fn revert_relocation(
        &mut self,
        cards: &[CardId],
        from: PileId,
        to: PileId,
        revealed: bool,
        events: &mut Vec<EngineEvent>,
    ) {
        if revealed {
            let Some(top) = self.board.piles().top_card(from) else {
                panic!("{} recorded a reveal but is empty", from);
            };
            self.board.set_face_down(top, true);
            events.push(EngineEvent::CardFlipped { card: top, face_down: true });
        }
        self.board.move_exact(to, cards, from);
        events.push(EngineEvent::CardMoved {
            cards: Run::from_slice(cards),
            from: to,
            to: from,
        });
    }

    /// Check invariants and the win condition after a commit.
    fn finish_commit(&mut self, events: &mut Vec<EngineEvent>) {
        self.board.verify_partition();
        self.status = rules::detect(self.board.piles());
        if self.status.is_won() {
            info!("Game won after {} logged action(s)", self.history.len());
            events.push(EngineEvent::GameWon);
        }
    }
}
