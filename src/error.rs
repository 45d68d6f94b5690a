//! # Error Types
//!
//! This module defines the errors reported when a PRMA sentence cannot be
//! decoded. A failed decode yields exactly one error, describing the first
//! problem encountered; no partially decoded record is ever returned.

use thiserror::Error;

use crate::AlertKind;

/// Represents all possible failures while decoding a PRMA sentence.
#[derive(Error, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DecodeError {
    /// The sentence does not have the shape its alert kind requires.
    ///
    /// Contains the reason, see [`Malformed`].
    #[error("malformed PRMA sentence: {0}")]
    MalformedSentence(#[from] Malformed),

    /// The discriminator field is not one of the four recognized alert kinds.
    ///
    /// Contains the offending token.
    #[error("unknown PRMA alert kind \"{0}\"")]
    UnknownAlertKind(String),

    /// The sentence type handed over by the tokenizer is not `PRMA`.
    ///
    /// Contains the sentence type that was received.
    #[error("unrecognized sentence type \"{0}\"")]
    UnrecognizedSentence(String),
}

/// Reason a sentence was rejected as [`DecodeError::MalformedSentence`]
#[derive(Error, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Malformed {
    /// Fewer fields than the two every PRMA sentence carries
    #[error("expected at least 2 fields, found {0}")]
    TooFewFields(usize),

    /// A field required by the alert kind is absent
    #[error("{kind} sentence is missing field {index}")]
    MissingField {
        /// Alert kind that requires the field
        kind: AlertKind,
        /// Zero-based index of the missing field
        index: usize,
    },

    /// The time of state change is not in `HH:MM:SS.ff` or `HHMMSS.ff` form
    #[error("invalid time of state change \"{0}\"")]
    InvalidTime(String),

    /// The alarm state is not one of the known mnemonics or codes
    #[error("unrecognized alarm state \"{0}\"")]
    InvalidState(String),
}
