//! Match state: the turn-management collaborator around the engine.
//!
//! `Match` owns everything that changes during play (board, side to move,
//! outcome, tally, history). The engine it calls holds nothing between
//! calls.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::core::{Board, Line, Mark, Move};
use crate::rules::{evaluate, Outcome};
use crate::search::{Minimax, SearchConfig, SearchStats};

use super::error::MoveError;
use super::tally::Tally;

/// Match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// The human's mark. The automated side plays the other one.
    pub human: Mark,

    /// Whether the human moves first in every game.
    pub human_starts: bool,

    /// Search settings for the automated side.
    pub search: SearchConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            human: Mark::X,
            human_starts: true,
            search: SearchConfig::default(),
        }
    }
}

impl MatchConfig {
    /// Create a new config with the human playing `mark`.
    pub fn with_human(mut self, mark: Mark) -> Self {
        self.human = mark;
        self
    }

    /// Create a new config choosing who opens each game.
    pub fn with_human_starts(mut self, human_starts: bool) -> Self {
        self.human_starts = human_starts;
        self
    }

    /// Create a new config with custom search settings.
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }
}

/// A series of games between a human and the engine.
#[derive(Clone, Debug)]
pub struct Match {
    config: MatchConfig,
    engine: Minimax,
    board: Board,
    to_move: Mark,
    outcome: Outcome,
    tally: Tally,
    history: Vec<Move>,
}

impl Default for Match {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

impl Match {
    /// Start a match with a fresh first game.
    pub fn new(config: MatchConfig) -> Self {
        let engine = Minimax::new(config.search.clone());
        let to_move = Self::opener(&config);

        Self {
            config,
            engine,
            board: Board::new(),
            to_move,
            outcome: Outcome::InProgress,
            tally: Tally::new(),
            history: Vec::new(),
        }
    }

    fn opener(config: &MatchConfig) -> Mark {
        if config.human_starts {
            config.human
        } else {
            config.human.opponent()
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Cells claimed in the current game, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Whose turn it is. Meaningless once the game is over.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    pub fn human(&self) -> Mark {
        self.config.human
    }

    pub fn automated(&self) -> Mark {
        self.config.human.opponent()
    }

    /// Check if the human may move now.
    pub fn is_human_turn(&self) -> bool {
        !self.outcome.is_terminal() && self.to_move == self.human()
    }

    /// Check if the engine should move now.
    pub fn is_automated_turn(&self) -> bool {
        !self.outcome.is_terminal() && self.to_move == self.automated()
    }

    /// The completed line of the current game, for highlighting.
    pub fn winning_line(&self) -> Option<Line> {
        self.outcome.winning_line()
    }

    /// Check if a cell belongs to the completed line.
    pub fn is_winning_cell(&self, index: usize) -> bool {
        self.winning_line().is_some_and(|line| line.contains(index))
    }

    /// Statistics from the engine's last search.
    pub fn search_stats(&self) -> &SearchStats {
        self.engine.stats()
    }

    /// Claim a cell for the human.
    #[instrument(level = "debug", skip(self))]
    pub fn play_human(&mut self, index: usize) -> Result<Outcome, MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if self.to_move != self.human() {
            return Err(MoveError::NotYourTurn(self.human()));
        }
        let mv = Move::new(index).ok_or(MoveError::OutOfRange(index))?;
        if !self.board.is_open(mv) {
            return Err(MoveError::Occupied(mv));
        }

        Ok(self.apply(mv, self.human()))
    }

    /// Let the engine pick and claim a cell.
    #[instrument(level = "debug", skip(self))]
    pub fn play_automated(&mut self) -> Result<(Move, Outcome), MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let ai = self.automated();
        if self.to_move != ai {
            return Err(MoveError::NotYourTurn(ai));
        }

        let mv = self.engine.best_move(&self.board, ai).ok_or(MoveError::GameOver)?;
        Ok((mv, self.apply(mv, ai)))
    }

    /// Clear the board for another game. The tally is kept.
    pub fn new_game(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.outcome = Outcome::InProgress;
        self.to_move = Self::opener(&self.config);
        debug!(opener = %self.to_move, tally = %self.tally, "new game");
    }

    fn apply(&mut self, mv: Move, mark: Mark) -> Outcome {
        self.board.place(mv, mark);
        self.history.push(mv);
        self.to_move = mark.opponent();
        self.outcome = evaluate(&self.board);

        if self.outcome.is_terminal() {
            self.tally.record(&self.outcome, self.human());
            info!(outcome = %self.outcome, tally = %self.tally, "game over");
        }

        self.outcome
    }
}
