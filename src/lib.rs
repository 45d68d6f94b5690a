//! # PRMA Sentence Decoder
//!
//! This library decodes the proprietary `PRMA` alarm/status sentence into a
//! strongly-typed [`PRMA`] record. One sentence type carries four unrelated
//! payloads, selected by the alert kind in its first data field:
//!
//! - Alarm events with a time of state change, alarm state, description and text
//! - Alive (heartbeat) messages carrying only a description
//! - Alarm events addressed by SFI/ISA address
//! - Door and hatch status bitmaps
//!
//! Framing and checksum validation are left to the NMEA tokenizer feeding the
//! decoder: [`PRMA::decode`] takes the data fields following the sentence type,
//! already split on commas.
//!
//! ## Usage
//!
//! ```rust
//! use prma_parser::{AlarmState, AlertKind, PRMA};
//!
//! let fields = ["3", "123456.78", "UA", "SFI123_ISA456", "Alarm"];
//! let prma = PRMA::decode(&fields).unwrap();
//!
//! assert_eq!(prma.kind, AlertKind::AddressedAlarm);
//! assert_eq!(prma.state, AlarmState::Unacknowledged);
//! assert_eq!(prma.description, "SFI123");
//! ```
//!
//! Decoding failures are reported through [`DecodeError`]; the decoder logs
//! rejected sentences at `debug` level through the [`log`] facade.

pub mod error;
pub mod parsing;
mod prma;

pub use error::{DecodeError, Malformed};
pub use prma::*;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
