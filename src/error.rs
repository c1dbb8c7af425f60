//! Error types for reading input and planning deliveries.

use std::io;

use thiserror::Error;

/// Which kind of input line failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Header,
    Parcel,
    Fleet,
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LineKind::Header => "first input line",
            LineKind::Parcel => "parcel line",
            LineKind::Fleet => "fleet line",
        };
        f.write_str(name)
    }
}

/// Errors raised while reading or validating textual input.
#[derive(Debug, Error)]
pub enum InputError {
    /// Wrong token count on a line.
    #[error("parse {kind} error: wrong number of inputs (expected {expected}, got {actual})")]
    TokenCount {
        kind: LineKind,
        expected: usize,
        actual: usize,
    },

    /// A token that should be a non-negative integer is not one.
    #[error("parse {kind} error: wrong {field} input '{value}'")]
    NotAnInteger {
        kind: LineKind,
        field: &'static str,
        value: String,
    },

    #[error("read problem error: '{0}' is not a known problem number")]
    UnknownProblem(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl InputError {
    /// Whether the reader may re-prompt for the same line after this error.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            InputError::TokenCount { .. } | InputError::NotAnInteger { .. } | InputError::UnknownProblem(_)
        )
    }
}

/// Errors raised while partitioning or scheduling a batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("parcel '{id}' weighs {weight}, more than the vehicle capacity of {capacity}")]
    ParcelTooHeavy { id: String, weight: u32, capacity: u32 },

    #[error("fleet has no vehicles")]
    NoVehicles,

    #[error("fleet max speed must be greater than zero")]
    ZeroSpeed,

    #[error("delivery time estimation needs fleet parameters")]
    MissingFleet,

    #[error("cost of parcel '{0}' is too large to compute")]
    CostOverflow(String),
}

/// Errors raised while loading an offer table.
#[derive(Debug, Error)]
pub enum OfferError {
    #[error("cannot read offer table: {0}")]
    Io(#[from] io::Error),

    #[error("cannot parse offer table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("offer '{0}' is defined more than once")]
    DuplicateCode(String),

    #[error("offer '{code}' has a discount of {percent}%, above 100%")]
    PercentOutOfRange { code: String, percent: u32 },
}
