//! Game state module - the session controller
//!
//! Owns the board, the score and the terminal flag, and sequences a turn:
//! slide, then (only if something changed) spawn one tile and re-check game
//! over. A move that changes nothing costs no turn.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::board::{Board, Tile};
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GameAction, INITIAL_TILES, WINNING_TILE};

/// Result of a directional command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveResult {
    /// The board changed and a turn was consumed
    pub changed: bool,
    /// Points gained by this move
    pub score_delta: u32,
    /// Tile spawned after the move, if any
    pub spawned: Option<Tile>,
}

/// Complete game session
///
/// Generic over the random source so tests can inject a fixed stream; the
/// default is a seedable [`StdRng`].
#[derive(Debug, Clone)]
pub struct GameState<R = StdRng> {
    board: Board,
    rng: R,
    score: u32,
    game_over: bool,
    /// Accepted (board-changing) moves in the current game.
    turn: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
}

impl GameState<StdRng> {
    /// Start a new game whose spawns are fully determined by `seed`
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameState<R> {
    /// Start a new game drawing spawns from `rng`. The board starts with two tiles.
    pub fn with_rng(rng: R) -> Self {
        let mut state = Self {
            board: Board::new(),
            rng,
            score: 0,
            game_over: false,
            turn: 0,
            episode_id: 0,
        };
        state.spawn_initial_tiles();
        state
    }

    /// Resume play from an arbitrary board (score starts at 0).
    ///
    /// Useful for scripted scenarios; the terminal flag is computed from the board.
    pub fn from_board(board: Board, rng: R) -> Self {
        let game_over = board.is_game_over();
        Self {
            board,
            rng,
            score: 0,
            game_over,
            turn: 0,
            episode_id: 0,
        }
    }

    fn spawn_initial_tiles(&mut self) {
        for _ in 0..INITIAL_TILES {
            self.board.spawn_tile(&mut self.rng);
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// A tile of at least 2048 is on the board. Play continues regardless.
    pub fn won(&self) -> bool {
        self.board.highest_tile() >= WINNING_TILE
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.write_board(&self.board);
        out.score = self.score;
        out.game_over = self.game_over;
        out.won = self.won();
        out.turn = self.turn;
        out.episode_id = self.episode_id;
        out.highest_tile = self.board.highest_tile();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Slide the board in `direction`.
    ///
    /// Ignored once the game is over. When the slide changes the board, the
    /// score grows by the merged values, one tile spawns and the terminal flag
    /// is recomputed; otherwise nothing at all happens.
    pub fn apply_move(&mut self, direction: Direction) -> MoveResult {
        if self.game_over {
            debug!(direction = direction.as_str(), "move ignored: game is over");
            return MoveResult::default();
        }

        let outcome = self.board.slide(direction);
        if !outcome.changed {
            debug!(direction = direction.as_str(), "move had no effect");
            return MoveResult::default();
        }

        self.score = self.score.saturating_add(outcome.score_delta);
        self.turn = self.turn.wrapping_add(1);
        let spawned = self.board.spawn_tile(&mut self.rng);
        self.game_over = self.board.is_game_over();

        debug!(
            turn = self.turn,
            direction = direction.as_str(),
            merges = outcome.merges,
            score_delta = outcome.score_delta,
            score = self.score,
            "turn applied"
        );
        if self.game_over {
            info!(
                score = self.score,
                turn = self.turn,
                highest_tile = self.board.highest_tile(),
                "game over"
            );
        }

        MoveResult {
            changed: true,
            score_delta: outcome.score_delta,
            spawned,
        }
    }

    /// Apply a game action. Returns whether the board changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.apply_move(direction).changed,
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    /// Throw away the current game and start over with two fresh tiles.
    ///
    /// The random stream continues, so consecutive games differ.
    pub fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.game_over = false;
        self.turn = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.spawn_initial_tiles();
        info!(episode_id = self.episode_id, "game restarted");
    }
}
