use serde::{Deserialize, Serialize};

/// Player-visible state of a single board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    /// Not yet revealed.
    Hidden,
    /// A mine, shown after being revealed or marked at game end.
    Mine,
    /// A revealed safe cell carrying its adjacent-mine count (0..=8).
    Count(u8),
}

impl CellView {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_revealed(self) -> bool {
        !self.is_hidden()
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}
