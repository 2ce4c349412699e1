//! JSON bodies exchanged over `/api/*`.
//!
//! Request fields are coerced loosely: browsers send scores as numbers or
//! strings depending on where they came from, so anything that reads as an
//! integer is accepted.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::board::Board;
use crate::error::InputError;

/// Body of `POST /api/leaderboard`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreSubmission {
    pub name: String,
    pub score: i64,
    /// Raw category from the body; may be blank.
    pub category: String,
}

impl ScoreSubmission {
    pub fn from_json(body: &[u8]) -> Result<Self, InputError> {
        let value: Value = serde_json::from_slice(body).map_err(|_| InputError::InvalidJson)?;
        let Value::Object(obj) = value else {
            return Err(InputError::InvalidJson);
        };

        let score = match obj.get("score") {
            None => 0,
            Some(v) => coerce_score(v).ok_or(InputError::InvalidScore)?,
        };

        Ok(Self {
            name: field_text(&obj, "name"),
            score,
            category: field_text(&obj, "category"),
        })
    }
}

/// Body of `POST /api/presence`. A missing or broken body is just `{}`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Heartbeat {
    pub id: String,
}

impl Heartbeat {
    pub fn from_json(body: &[u8]) -> Self {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Self::default();
        }
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(obj)) => {
                let id = match obj.get("id") {
                    Some(v) if is_truthy(v) => value_text(v),
                    _ => String::new(),
                };
                Self { id }
            }
            _ => Self::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardUpdate {
    pub ok: bool,
    pub leaderboard: Board,
}

impl BoardUpdate {
    pub fn new(leaderboard: Board) -> Self {
        Self {
            ok: true,
            leaderboard,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnlineCount {
    pub online: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartbeatAck {
    pub ok: bool,
    pub online: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Integer view of a JSON value, if it has one.
pub fn coerce_score(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            let f = n.as_f64()?;
            // truncate toward zero; out-of-range floats are rejected
            (f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64).then(|| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn field_text(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key).map(value_text).unwrap_or_default()
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
