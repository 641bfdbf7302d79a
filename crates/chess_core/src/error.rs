use thiserror::Error;

/// Failures reported by the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("invalid FEN `{fen}`: {reason}")]
    InvalidFen { fen: String, reason: String },

    #[error("illegal move {mv} in position {fen}")]
    IllegalMove { mv: String, fen: String },

    #[error("malformed move `{0}`")]
    MalformedMove(String),

    #[error("malformed position command: {0}")]
    MalformedPosition(String),
}
