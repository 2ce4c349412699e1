//! On-disk representation of the [`Store`].
//!
//! Current files look like `{"boards": {"<category>": {"<name>": <int>}}}`.
//! Files written before categories existed are a bare `{"<name>": <int>}`
//! map; those decode as the `global` category and are flagged so the caller
//! can rewrite them.

use serde_json::Value;

use crate::board::{Board, Store};

/// Result of decoding a store file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    pub store: Store,
    /// The input used the legacy flat schema and should be written back.
    pub migrated: bool,
}

impl Decoded {
    fn empty() -> Self {
        Self::default()
    }
}

/// Decode raw file contents. Never fails: anything unreadable is an empty store.
pub fn decode(bytes: &[u8]) -> Decoded {
    let root: Value = match serde_json::from_slice(bytes) {
        Ok(v) => v,
        Err(_) => return Decoded::empty(),
    };

    let Value::Object(map) = &root else {
        return Decoded::empty();
    };

    if map.contains_key("boards") {
        return match serde_json::from_value::<Store>(root) {
            Ok(store) => Decoded {
                store,
                migrated: false,
            },
            Err(_) => Decoded::empty(),
        };
    }

    match serde_json::from_value::<Board>(root) {
        Ok(board) => Decoded {
            store: Store::from_legacy(board),
            migrated: true,
        },
        Err(_) => Decoded::empty(),
    }
}

/// Decode a file that may not exist.
pub fn decode_file(bytes: Option<&[u8]>) -> Decoded {
    bytes.map(decode).unwrap_or_else(Decoded::empty)
}

pub fn encode(store: &Store) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(store)
}
