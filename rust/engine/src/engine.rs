use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::board::{Board, Location};
use crate::cards::Card;
use crate::errors::GameError;
use crate::game::{GameResult, Phase, Reveal, TurnOutcome};
use crate::memory::MemoryStore;
use crate::player::{Player, Scores};

/// Turn engine for one human-vs-computer game of Concentration.
///
/// Owns the board, the computer's memory, the scores and a single seeded RNG.
/// A turn runs through [`pick_first`](Engine::pick_first),
/// [`pick_second`](Engine::pick_second) and [`resolve`](Engine::resolve), in
/// that order; [`play_turn`](Engine::play_turn) does all three.
///
/// # Examples
///
/// ```
/// use concentration_engine::board::Location;
/// use concentration_engine::engine::Engine;
///
/// let mut engine = Engine::new(Some(12345));
/// let first = engine.board().live_locations()[0];
/// let second = engine.board().live_locations()[1];
///
/// let outcome = engine.play_turn(first, second).expect("legal picks");
/// assert_eq!(outcome.turn, 1);
/// assert_eq!(engine.turns_played(), 1);
/// ```
#[derive(Debug)]
pub struct Engine {
    board: Board,
    memory: MemoryStore,
    scores: Scores,
    current: Player,
    phase: Phase,
    rng: ChaCha20Rng,
    seed: u64,
    turns: u32,
}

/// Borrowed view handed to a computer selector for one turn.
pub struct SelectionContext<'a> {
    pub board: &'a Board,
    pub memory: &'a MemoryStore,
    pub rng: &'a mut dyn RngCore,
}

impl Engine {
    /// Shuffles a fresh board and flips a coin for the first player.
    ///
    /// Without a seed a random one is drawn, so every session differs.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let board = Board::shuffled(&mut rng);
        let first = if rng.random_bool(0.5) {
            Player::Human
        } else {
            Player::Computer
        };
        Self::assemble(board, first, rng, seed)
    }

    /// Starts a game on a prepared board with a chosen first player.
    pub fn with_board(board: Board, first: Player, seed: u64) -> Self {
        Self::assemble(board, first, ChaCha20Rng::seed_from_u64(seed), seed)
    }

    fn assemble(board: Board, first: Player, rng: ChaCha20Rng, seed: u64) -> Self {
        let phase = if board.is_complete() {
            Phase::GameOver
        } else {
            Phase::AwaitingFirstPick
        };
        tracing::debug!(seed, first = %first, "game created");
        Self {
            board,
            memory: MemoryStore::new(),
            scores: Scores::default(),
            current: first,
            phase,
            rng,
            seed,
            turns: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn memory(&self) -> &MemoryStore {
        &self.memory
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn turns_played(&self) -> u32 {
        self.turns
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn result(&self) -> Option<GameResult> {
        self.is_over().then(|| GameResult::from_scores(self.scores))
    }

    pub fn selection_context(&mut self) -> SelectionContext<'_> {
        SelectionContext {
            board: &self.board,
            memory: &self.memory,
            rng: &mut self.rng,
        }
    }

    /// Checks whether `loc` would be accepted as the next pick, without changing anything.
    pub fn check_pick(&self, loc: Location) -> Result<Card, GameError> {
        match self.phase {
            Phase::GameOver => Err(GameError::GameOver),
            Phase::Resolving { .. } => Err(self.wrong_phase()),
            Phase::AwaitingSecondPick { first } if first == loc => {
                Err(GameError::SameAsFirstPick)
            }
            _ => self.board.live_card(loc),
        }
    }

    pub fn pick_first(&mut self, loc: Location) -> Result<Card, GameError> {
        match self.phase {
            Phase::AwaitingFirstPick => {}
            Phase::GameOver => return Err(GameError::GameOver),
            _ => return Err(self.wrong_phase()),
        }
        let card = self.check_pick(loc)?;
        self.phase = Phase::AwaitingSecondPick { first: loc };
        Ok(card)
    }

    pub fn pick_second(&mut self, loc: Location) -> Result<Card, GameError> {
        let Phase::AwaitingSecondPick { first } = self.phase else {
            return Err(match self.phase {
                Phase::GameOver => GameError::GameOver,
                _ => self.wrong_phase(),
            });
        };
        let card = self.check_pick(loc)?;
        self.phase = Phase::Resolving { first, second: loc };
        Ok(card)
    }

    /// Applies the match rule to the two face-up cards.
    ///
    /// A match claims both cells, scores the pair for the turn owner, purges
    /// both cards from memory and keeps the turn. A mismatch records both
    /// cards in memory and passes the turn.
    pub fn resolve(&mut self) -> Result<TurnOutcome, GameError> {
        let Phase::Resolving { first, second } = self.phase else {
            return Err(match self.phase {
                Phase::GameOver => GameError::GameOver,
                _ => self.wrong_phase(),
            });
        };
        let c1 = self.board.live_card(first)?;
        let c2 = self.board.live_card(second)?;
        let player = self.current;
        let matched = c1.matches(c2);

        if matched {
            self.board.claim(first)?;
            self.board.claim(second)?;
            self.scores.award_pair(player);
            self.memory.forget(c1);
            self.memory.forget(c2);
        } else {
            self.memory.remember(c1, first);
            self.memory.remember(c2, second);
            self.current = player.other();
        }
        self.turns += 1;
        debug_assert!(self.memory_is_consistent());

        self.phase = if self.board.is_complete() {
            Phase::GameOver
        } else {
            Phase::AwaitingFirstPick
        };

        tracing::debug!(
            turn = self.turns,
            player = %player,
            first = %first,
            second = %second,
            first_card = %c1,
            second_card = %c2,
            matched,
            "turn resolved"
        );

        let result = self.result();
        if let Some(r) = result {
            tracing::info!(
                human = r.scores.human,
                computer = r.scores.computer,
                winner = ?r.winner,
                "game over"
            );
        }

        Ok(TurnOutcome {
            turn: self.turns,
            player,
            first: Reveal {
                location: first,
                card: c1,
            },
            second: Reveal {
                location: second,
                card: c2,
            },
            matched,
            next_player: self.current,
            scores: self.scores,
            result,
        })
    }

    pub fn play_turn(&mut self, first: Location, second: Location) -> Result<TurnOutcome, GameError> {
        self.pick_first(first)?;
        if let Err(e) = self.pick_second(second) {
            self.phase = Phase::AwaitingFirstPick;
            return Err(e);
        }
        self.resolve()
    }

    /// True when every remembered card still lies face-down where memory says it is.
    pub fn memory_is_consistent(&self) -> bool {
        self.memory
            .iter()
            .all(|(card, loc)| self.board.card_at(loc) == Ok(Some(card)))
    }

    fn wrong_phase(&self) -> GameError {
        GameError::InvalidPhase {
            phase: self.phase.name(),
        }
    }
}
