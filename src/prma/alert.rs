use std::{fmt, str::FromStr};

use nom::{IResult, Parser, branch::alt, bytes::complete::tag, error::ErrorKind};

use crate::{
    error::{DecodeError, Malformed},
    parsing::consumed,
};

/// Declares an enumeration carried on the wire either as a mnemonic token or
/// as its numeric code, e.g. `"UA"` or `"6"`.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $token:literal | $code:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i8)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $code,
            )*
        }

        impl $name {
            /// Returns the mnemonic used on the wire.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)*
                }
            }

            /// Returns the numeric code used on the wire.
            pub fn code(&self) -> i8 {
                *self as i8
            }

            /// Looks up a variant by its numeric code.
            pub fn from_code(code: i8) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// Parses a complete field, either the mnemonic or the numeric code.
            pub(crate) fn from_token(token: &str) -> Option<Self> {
                consumed(Self::parser, ErrorKind::Tag)
                    .parse(token)
                    .ok()
                    .map(|(_, value)| value)
            }

            fn parser(i: &str) -> IResult<&str, Self> {
                alt((
                    alt(($(
                        tag($token).map(|_| Self::$variant),
                    )*)),
                    nom::character::complete::i8.map_opt(Self::from_code),
                ))
                .parse(i)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

token_enum! {
    /// Alert identification, the discriminator heading every PRMA sentence
    ///
    /// Selects which of the four payload layouts follows.
    pub enum AlertKind {
        /// 1 - Alarm event
        "Alarm" | 1 => Alarm,
        /// 2 - Heartbeat of the alarm system
        "Alive" | 2 => Alive,
        /// 3 - Alarm event with the SFI/ISA address in the description
        "Sfi_isa" | 3 => AddressedAlarm,
        /// 4 - Door and hatch status bitmap
        "DoorHatch" | 4 => DoorHatch,
    }
}

token_enum! {
    /// Alarm state
    pub enum AlarmState {
        /// NL - Null state, no state carried by the sentence
        "NL" | -1 => NullState,
        /// OK - Normal, no alarm
        "OK" | 0 => Ok,
        /// INH - Inhibited
        "INH" | 1 => Inhibited,
        /// BLC - Blocked
        "BLC" | 2 => Blocked,
        /// TR - Transferred
        "TR" | 3 => Transferred,
        /// CLR - Cleared, rectified
        "CLR" | 4 => Cleared,
        /// AA - Acknowledged
        "AA" | 5 => Acknowledged,
        /// UA - Unacknowledged
        "UA" | 6 => Unacknowledged,
    }
}

impl FromStr for AlertKind {
    type Err = DecodeError;

    /// ```rust
    /// use prma_parser::AlertKind;
    ///
    /// assert_eq!("Sfi_isa".parse(), Ok(AlertKind::AddressedAlarm));
    /// assert_eq!("3".parse(), Ok(AlertKind::AddressedAlarm));
    /// assert!("9".parse::<AlertKind>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| DecodeError::UnknownAlertKind(s.to_owned()))
    }
}

impl FromStr for AlarmState {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
            .ok_or_else(|| DecodeError::MalformedSentence(Malformed::InvalidState(s.to_owned())))
    }
}
