use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Category used whenever a request doesn't name one.
pub const DEFAULT_CATEGORY: &str = "global";

/// Player name -> cumulative score within one category.
pub type Board = BTreeMap<String, i64>;

/// Everything that lives in the store file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub boards: BTreeMap<String, Board>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a pre-category flat board as the default category.
    pub fn from_legacy(board: Board) -> Self {
        let mut boards = BTreeMap::new();
        boards.insert(DEFAULT_CATEGORY.to_string(), board);
        Self { boards }
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}

/// Trim a raw category. Empty means "not given".
pub fn category_key(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|c| !c.is_empty())
}

/// Category a read or write lands in: the given one, else `global`.
pub fn resolve_category(raw: Option<&str>) -> &str {
    category_key(raw).unwrap_or(DEFAULT_CATEGORY)
}

/// Trim a raw player name. Empty means there is nothing to record.
pub fn player_name(raw: &str) -> Option<&str> {
    let name = raw.trim();
    (!name.is_empty()).then_some(name)
}
