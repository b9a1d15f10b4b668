use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Number of mine hits a fresh session survives.
pub const STARTING_LIVES: u8 = 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    InProgress,
    Lost,
    Won,
}

impl SessionState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Lost | Self::Won)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Outcome of one [`GameSession::attempt_reveal`], echoed back to the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealReport {
    pub state: SessionState,
    pub lives: u8,
    pub was_mine: bool,
}

/// One playthrough: a fixed mine layout, the board the player sees, a lives
/// counter, and the win/lose state. Single-owner; hosts that share a session
/// across threads must serialize access themselves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    field: Minefield,
    board: BoardView,
    lives: u8,
    state: SessionState,
}

impl GameSession {
    /// Starts a session over a freshly generated layout. All randomness comes
    /// from the injected `rng`, so a seeded rng gives a reproducible game.
    pub fn start<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self> {
        let field = DensityGenerator.generate(config, rng)?;
        Ok(Self::from_minefield(field))
    }

    /// Starts a session over a fixed, pre-built layout.
    pub fn from_minefield(field: Minefield) -> Self {
        let board = BoardView::hidden(field.size());
        Self {
            field,
            board,
            lives: STARTING_LIVES,
            state: SessionState::InProgress,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn size(&self) -> Coord2 {
        self.field.size()
    }

    pub fn cell_at(&self, coords: Coord2) -> CellView {
        self.board.cell_at(coords)
    }

    pub fn board(&self) -> &BoardView {
        &self.board
    }

    pub fn hidden_cells_left(&self) -> CellCount {
        self.board.hidden_count()
    }

    /// Reveals one cell and advances the state machine. Rejected attempts
    /// (finished game, out-of-bounds or repeated target) leave the board and
    /// lives exactly as they were.
    pub fn attempt_reveal(&mut self, coords: Coord2) -> Result<RevealReport> {
        if self.state.is_finished() {
            return Err(GameError::AlreadyEnded);
        }

        let was_mine = self.board.reveal(&self.field, coords)?;

        if was_mine {
            self.lives -= 1;
            if self.lives == 0 {
                self.end_game(SessionState::Lost);
            }
        } else if self.board.is_cleared() {
            self.end_game(SessionState::Won);
        }

        Ok(RevealReport {
            state: self.state,
            lives: self.lives,
            was_mine,
        })
    }

    fn end_game(&mut self, state: SessionState) {
        self.state = state;
        self.board.mark_all_mines(&self.field);
    }
}
