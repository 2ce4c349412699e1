pub mod board;
pub mod codec;
pub mod engine;
pub mod error;
pub mod protocol;

pub use board::{Board, Store, DEFAULT_CATEGORY};
pub use codec::{decode, encode, Decoded};
pub use engine::Submission;
pub use error::InputError;
