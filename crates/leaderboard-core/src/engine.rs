//! In-memory leaderboard operations. Loading and saving is the caller's job;
//! everything here mutates a decoded [`Store`] only.

use crate::board::{category_key, player_name, resolve_category, Board, Store};

/// Outcome of a score submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// The score was added; holds the updated board.
    Recorded(Board),
    /// The name was blank. Nothing changed; holds the current board.
    Ignored(Board),
}

impl Submission {
    pub fn board(&self) -> &Board {
        match self {
            Submission::Recorded(b) | Submission::Ignored(b) => b,
        }
    }

    pub fn into_board(self) -> Board {
        match self {
            Submission::Recorded(b) | Submission::Ignored(b) => b,
        }
    }

    pub fn is_recorded(&self) -> bool {
        matches!(self, Submission::Recorded(_))
    }
}

impl Store {
    /// Board for a category; unknown categories are empty.
    pub fn board(&self, category: Option<&str>) -> Board {
        self.boards
            .get(resolve_category(category))
            .cloned()
            .unwrap_or_default()
    }

    /// Add `delta` to a player's running total.
    pub fn submit(&mut self, category: Option<&str>, name: &str, delta: i64) -> Submission {
        let key = resolve_category(category);
        let Some(name) = player_name(name) else {
            return Submission::Ignored(self.board(Some(key)));
        };

        let board = self.boards.entry(key.to_string()).or_default();
        let total = board.entry(name.to_string()).or_insert(0);
        *total = total.saturating_add(delta);
        Submission::Recorded(board.clone())
    }

    /// Empty one category, or every category when none is given.
    pub fn reset(&mut self, category: Option<&str>) -> Board {
        match category_key(category) {
            Some(key) => {
                self.boards.insert(key.to_string(), Board::new());
            }
            None => self.boards.clear(),
        }
        Board::new()
    }
}
