use nom::{IResult, Parser, character::complete::anychar, sequence::preceded};
use time::Duration;

use crate::{error::Malformed, parsing::fixed_width};

/// Normalizes the time of state change into a duration since midnight.
///
/// Alarm systems send this field in one of two fixed-width layouts:
///
/// ```text
///  0 2 3 5 6 8 9
///  | | | | | | |
///  HH:MM:SS.ff     (any field containing ':')
///
///  0 2 4 6 7
///  | | | | |
///  HHMMSS.ff
///  HHMMSSff        (exactly eight characters)
/// ```
///
/// Every sub-field is two decimal digits; `ff` are hundredths of a second.
pub(crate) fn time_of_change(field: &str) -> Result<Duration, Malformed> {
    let result = if field.contains(':') {
        colon_delimited(field)
    } else {
        compact(field)
    };

    result
        .map(|(_, duration)| duration)
        .map_err(|_| Malformed::InvalidTime(field.to_owned()))
}

fn colon_delimited(i: &str) -> IResult<&str, Duration> {
    let (i, hours) = fixed_width(2u8).parse(i)?;
    let (i, minutes) = preceded(anychar, fixed_width(2u8)).parse(i)?;
    let (i, seconds) = preceded(anychar, fixed_width(2u8)).parse(i)?;
    let (i, hundredths) = preceded(anychar, fixed_width(2u8)).parse(i)?;

    Ok((i, since_midnight(hours, minutes, seconds, hundredths)))
}

fn compact(i: &str) -> IResult<&str, Duration> {
    // only `HHMMSSff` lacks the separator in front of the hundredths
    let separated = i.len() != 8;
    let (i, (hours, minutes, seconds)) =
        (fixed_width(2u8), fixed_width(2u8), fixed_width(2u8)).parse(i)?;
    let (i, hundredths) = if separated {
        preceded(anychar, fixed_width(2u8)).parse(i)?
    } else {
        fixed_width(2u8).parse(i)?
    };

    Ok((i, since_midnight(hours, minutes, seconds, hundredths)))
}

fn since_midnight(hours: u8, minutes: u8, seconds: u8, hundredths: u8) -> Duration {
    Duration::hours(hours.into())
        + Duration::minutes(minutes.into())
        + Duration::seconds(seconds.into())
        + Duration::milliseconds(i64::from(hundredths) * 10)
}
