mod alert;
mod timestamp;

pub use alert::{AlarmState, AlertKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use log::{debug, trace};
use time::Duration;

use crate::error::{DecodeError, Malformed};

/// PRMA - Proprietary alarm and status
///
/// One sentence type carrying four unrelated payloads, selected by the alert
/// kind in the first field:
///
/// ```text
///         1 2         3  4           5
///         | |         |  |           |
///  $PRMA,1,hh:mm:ss.ff,xx,description,text*hh<CR><LF>       Alarm
///  $PRMA,2,description*hh<CR><LF>                           Alive
///  $PRMA,3,hhmmss.ff,xx,SFI_ISA,text*hh<CR><LF>             Addressed alarm
///  $PRMA,4,x,x,...,x*hh<CR><LF>                             Door hatch
/// ```
///
/// Fields that the alert kind does not carry keep a fixed default: a zero
/// time of change, [`AlarmState::NullState`], empty strings and no door hatch
/// status.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PRMA {
    /// Alert identification
    pub kind: AlertKind,
    /// Alarm state
    pub state: AlarmState,
    /// Time of state change, as a duration since midnight
    pub time_of_change: Duration,
    /// Alarm description. For addressed alarms only the SFI address is kept.
    pub description: String,
    /// Alarm text ("Normal", "Alarm", ...)
    pub alarm_text: String,
    /// Door hatch status, `false` = open, `true` = closed
    pub door_hatch_status: Option<Vec<bool>>,
}

impl PRMA {
    /// Sentence type under which the tokenizer hands over PRMA fields.
    pub const SENTENCE_TYPE: &'static str = "PRMA";

    /// Decodes the data fields of a PRMA sentence.
    ///
    /// `fields` are the comma-separated fields following the sentence type,
    /// already stripped of framing and checksum. The first field is the
    /// alert kind.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::MalformedSentence`] when fewer than two fields are
    ///   given, a field required by the alert kind is missing, or the time or
    ///   state field is invalid.
    /// - [`DecodeError::UnknownAlertKind`] when the first field is not an
    ///   alert kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prma_parser::{AlarmState, AlertKind, PRMA};
    ///
    /// let prma = PRMA::decode(&["1", "12:34:56.78", "UA", "Bilge level", "Alarm"]).unwrap();
    /// assert_eq!(prma.kind, AlertKind::Alarm);
    /// assert_eq!(prma.state, AlarmState::Unacknowledged);
    /// assert_eq!(prma.description, "Bilge level");
    /// assert_eq!(prma.door_hatch_status, None);
    /// ```
    pub fn decode<S: AsRef<str>>(fields: &[S]) -> Result<Self, DecodeError> {
        match Self::dispatch(fields) {
            Ok(prma) => {
                trace!("PRMA: decoded {:?} sentence", prma.kind);
                Ok(prma)
            }
            Err(err) => {
                debug!("PRMA: rejected sentence: {}", err);
                Err(err)
            }
        }
    }

    /// Returns the time of state change as a time of day.
    ///
    /// `None` when the duration does not fall within a single day, which a
    /// sender can produce since the sub-fields are not range-checked.
    pub fn time_of_day(&self) -> Option<time::Time> {
        if self.time_of_change.is_negative() || self.time_of_change >= Duration::DAY {
            return None;
        }

        Some(time::Time::MIDNIGHT + self.time_of_change)
    }

    /// Returns the indices of the door hatches reported open.
    ///
    /// Empty for every alert kind other than [`AlertKind::DoorHatch`].
    ///
    /// ```rust
    /// use prma_parser::PRMA;
    ///
    /// let prma = PRMA::decode(&["4", "1", "0", "1", "0"]).unwrap();
    /// assert_eq!(prma.open_door_hatches().collect::<Vec<_>>(), [1, 3]);
    /// ```
    pub fn open_door_hatches(&self) -> impl Iterator<Item = usize> + '_ {
        self.door_hatch_status
            .iter()
            .flatten()
            .enumerate()
            .filter(|(_, closed)| !**closed)
            .map(|(index, _)| index)
    }

    fn dispatch<S: AsRef<str>>(fields: &[S]) -> Result<Self, DecodeError> {
        if fields.len() < 2 {
            return Err(Malformed::TooFewFields(fields.len()).into());
        }

        let kind: AlertKind = fields[0].as_ref().parse()?;

        let prma = match kind {
            AlertKind::Alarm => {
                let (time_of_change, state, description, alarm_text) =
                    Self::alarm_fields(kind, fields)?;

                Self {
                    kind,
                    state,
                    time_of_change,
                    description: description.to_owned(),
                    alarm_text: alarm_text.to_owned(),
                    door_hatch_status: None,
                }
            }
            AlertKind::Alive => Self {
                kind,
                state: AlarmState::NullState,
                time_of_change: Duration::ZERO,
                description: field(kind, fields, 1)?.to_owned(),
                alarm_text: String::new(),
                door_hatch_status: None,
            },
            AlertKind::AddressedAlarm => {
                let (time_of_change, state, description, alarm_text) =
                    Self::alarm_fields(kind, fields)?;
                // only the SFI address in front of the ISA address is kept
                let address = description
                    .split_once('_')
                    .map_or(description, |(sfi, _)| sfi);

                Self {
                    kind,
                    state,
                    time_of_change,
                    description: address.to_owned(),
                    alarm_text: alarm_text.to_owned(),
                    door_hatch_status: None,
                }
            }
            AlertKind::DoorHatch => Self {
                kind,
                state: AlarmState::NullState,
                time_of_change: Duration::ZERO,
                description: String::new(),
                alarm_text: String::new(),
                door_hatch_status: Some(
                    fields[1..].iter().map(|f| f.as_ref() == "1").collect(),
                ),
            },
        };

        Ok(prma)
    }

    /// Fields shared by alarms and addressed alarms, in wire order.
    fn alarm_fields<S: AsRef<str>>(
        kind: AlertKind,
        fields: &[S],
    ) -> Result<(Duration, AlarmState, &str, &str), DecodeError> {
        let time_of_change = timestamp::time_of_change(field(kind, fields, 1)?)?;
        let state: AlarmState = field(kind, fields, 2)?.parse()?;
        let description = field(kind, fields, 3)?;
        let alarm_text = field(kind, fields, 4)?;

        Ok((time_of_change, state, description, alarm_text))
    }
}

/// Decodes a PRMA sentence handed over together with its sentence type.
///
/// This is the entry point for tokenizers that dispatch on the sentence type
/// themselves: any type other than [`PRMA::SENTENCE_TYPE`] is rejected with
/// [`DecodeError::UnrecognizedSentence`], everything else is decoded by
/// [`PRMA::decode`].
///
/// ```rust
/// use prma_parser::{DecodeError, decode_sentence};
///
/// let prma = decode_sentence("PRMA", &["2", "Heartbeat OK"]).unwrap();
/// assert_eq!(prma.description, "Heartbeat OK");
///
/// let result = decode_sentence("GPGGA", &["2", "Heartbeat OK"]);
/// assert_eq!(result, Err(DecodeError::UnrecognizedSentence("GPGGA".into())));
/// ```
pub fn decode_sentence<S: AsRef<str>>(
    sentence_type: &str,
    fields: &[S],
) -> Result<PRMA, DecodeError> {
    if sentence_type != PRMA::SENTENCE_TYPE {
        debug!("PRMA: refusing {} sentence", sentence_type);
        return Err(DecodeError::UnrecognizedSentence(sentence_type.to_owned()));
    }

    PRMA::decode(fields)
}

fn field<S: AsRef<str>>(kind: AlertKind, fields: &[S], index: usize) -> Result<&str, Malformed> {
    fields
        .get(index)
        .map(|f| f.as_ref())
        .ok_or(Malformed::MissingField { kind, index })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_prma_alarm() {
        let prma =
            PRMA::decode(&["1", "12:34:56.78", "AA", "Engine room fire", "Alarm"]).unwrap();

        assert_eq!(prma.kind, AlertKind::Alarm);
        assert_eq!(prma.state, AlarmState::Acknowledged);
        assert_eq!(prma.time_of_change.whole_milliseconds(), 45_296_780);
        assert_eq!(prma.description, "Engine room fire");
        assert_eq!(prma.alarm_text, "Alarm");
        assert_eq!(prma.door_hatch_status, None);
    }

    #[test]
    fn test_prma_alarm_keeps_underscores() {
        let prma =
            PRMA::decode(&["Alarm", "123456.78", "OK", "SFI123_ISA456", "Normal"]).unwrap();
        assert_eq!(prma.description, "SFI123_ISA456");
    }

    #[test]
    fn test_prma_alarm_fields() {
        let cases: [&[&str]; 6] = [
            &["1", "12:34:56.78"],
            &["1", "12:34:56.78", "UA"],
            &["1", "12:34:56.78", "UA", "Bilge"],
            &["1", "1234", "UA", "Bilge", "Alarm"],
            &["1", "12:34:56.78", "SET", "Bilge", "Alarm"],
            &["3", "12:34:56.78", "UA", "SFI1"],
        ];

        for input in cases {
            let result = PRMA::decode(input);
            assert!(
                matches!(result, Err(DecodeError::MalformedSentence(_))),
                "Failed: {input:?}\n\t{result:?}"
            );
        }
    }

    #[test]
    fn test_prma_first_problem_wins() {
        // the time field is inspected before the missing state is noticed
        let result = PRMA::decode(&["1", "bogus"]);
        assert_eq!(result, Err(Malformed::InvalidTime("bogus".into()).into()));

        let result = PRMA::decode(&["1", "12:34:56.78", "XX"]);
        assert_eq!(result, Err(Malformed::InvalidState("XX".into()).into()));

        let result = PRMA::decode(&["1", "12:34:56.78", "UA"]);
        assert_eq!(
            result,
            Err(Malformed::MissingField {
                kind: AlertKind::Alarm,
                index: 3
            }
            .into())
        );
    }

    #[test]
    fn test_prma_addressed_alarm() {
        let cases = [
            ("SFI123_ISA456", "SFI123"),
            ("SFI123", "SFI123"),
            ("SFI123_ISA456_X", "SFI123"),
            ("_ISA456", ""),
            ("", ""),
        ];

        for (description, expected) in cases {
            let prma = PRMA::decode(&["3", "123456.78", "CLR", description, "Normal"]).unwrap();
            assert_eq!(prma.kind, AlertKind::AddressedAlarm);
            assert_eq!(prma.state, AlarmState::Cleared);
            assert_eq!(prma.description, expected, "Failed: {description:?}");
            assert_eq!(prma.alarm_text, "Normal");
            assert_eq!(prma.door_hatch_status, None);
        }
    }

    #[test]
    fn test_prma_alive() {
        let prma = PRMA::decode(&["Alive", "System running", "ignored"]).unwrap();

        assert_eq!(prma.kind, AlertKind::Alive);
        assert_eq!(prma.description, "System running");
        assert_eq!(prma.time_of_change, Duration::ZERO);
        assert_eq!(prma.state, AlarmState::NullState);
        assert_eq!(prma.alarm_text, "");
        assert_eq!(prma.door_hatch_status, None);
    }

    #[test]
    fn test_prma_door_hatch() {
        let cases: [(&[&str], &[bool]); 4] = [
            (&["4", "1"], &[true]),
            (&["4", "0"], &[false]),
            (&["4", "1", "0", "1"], &[true, false, true]),
            (
                &["DoorHatch", "1", "", "true", "01", "1"],
                &[true, false, false, false, true],
            ),
        ];

        for (input, expected) in cases {
            let prma = PRMA::decode(input).unwrap();
            assert_eq!(prma.kind, AlertKind::DoorHatch);
            assert_eq!(
                prma.door_hatch_status.as_deref(),
                Some(expected),
                "Failed: {input:?}"
            );
            assert_eq!(prma.state, AlarmState::NullState);
            assert_eq!(prma.time_of_change, Duration::ZERO);
            assert_eq!(prma.description, "");
            assert_eq!(prma.alarm_text, "");
        }
    }

    #[test]
    fn test_prma_time_of_day() {
        let prma = PRMA::decode(&["1", "23:59:59.99", "OK", "Bilge", "Normal"]).unwrap();
        assert_eq!(
            prma.time_of_day(),
            Some(time::Time::from_hms_milli(23, 59, 59, 990).unwrap())
        );

        let prma = PRMA::decode(&["1", "99:00:00.00", "OK", "Bilge", "Normal"]).unwrap();
        assert_eq!(prma.time_of_change, Duration::hours(99));
        assert_eq!(prma.time_of_day(), None);

        let prma = PRMA::decode(&["2", "Heartbeat"]).unwrap();
        assert_eq!(prma.time_of_day(), Some(time::Time::MIDNIGHT));
    }

    #[test]
    fn test_prma_open_door_hatches() {
        let prma = PRMA::decode(&["4", "0", "1", "1", "0"]).unwrap();
        assert_eq!(prma.open_door_hatches().collect::<Vec<_>>(), [0, 3]);

        let prma = PRMA::decode(&["2", "Heartbeat"]).unwrap();
        assert_eq!(prma.open_door_hatches().count(), 0);
    }

    #[test]
    fn test_decode_sentence() {
        let fields: Vec<String> = ["1", "12:34:56.78", "UA", "Bilge", "Alarm"]
            .into_iter()
            .map(String::from)
            .collect();

        assert!(decode_sentence("PRMA", &fields).is_ok());

        for sentence_type in ["GPGGA", "prma", "", "PRMAX"] {
            assert_eq!(
                decode_sentence(sentence_type, &fields),
                Err(DecodeError::UnrecognizedSentence(sentence_type.into()))
            );
        }
    }
}
