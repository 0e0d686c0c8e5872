//! Conversion between timestamps and the strings used to persist them.
//!
//! A timestamp is written as one of:
//!
//! ```text
//! -                       no timestamp recorded
//! 2022-02-01T02:02:02Z    RFC 3339, UTC, whole seconds (canonical)
//! 2022-02-01 02:02:02     civil time without a zone (legacy, parse only)
//! ```
//!
//! Formatting always produces the canonical form (or `-`). Parsing tries the sentinel,
//! then the canonical form, then the legacy form, in that order.

use jiff::civil::DateTime;
use jiff::tz::TimeZone;
use jiff::{Timestamp, Zoned};
use tracing::trace;

pub mod serde;

/// Written in place of a timestamp that was never set.
pub const EMPTY_TIME: &str = "-";

/// strftime format of the canonical encoding.
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// strptime format of the legacy encoding. Carries no zone information.
pub const LEGACY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(thiserror::Error, Debug)]
pub enum TimeError {
    /// Shaped like a known format, but the values are out of range.
    #[error("cannot parse time '{input}': {source}")]
    Parse {
        input: String,
        #[source]
        source: jiff::Error,
    },

    /// Shaped like neither the canonical nor the legacy format.
    #[error("cannot parse time '{input}': expected '-', YYYY-MM-DDTHH:MM:SSZ or YYYY-MM-DD HH:MM:SS")]
    Layout { input: String },
}

/// Formats and parses timestamps. The time zone is only consulted when parsing
/// legacy values, which carry no zone of their own.
#[derive(Debug, Clone)]
pub struct TimeCodec {
    tz: TimeZone,
}

impl TimeCodec {
    pub fn new(tz: TimeZone) -> TimeCodec {
        TimeCodec { tz }
    }

    /// A codec that interprets legacy values in the system time zone, as resolved
    /// at the time of the call.
    pub fn system() -> TimeCodec {
        TimeCodec::new(TimeZone::system())
    }

    pub fn time_zone(&self) -> &TimeZone {
        &self.tz
    }

    /// Encodes `time` canonically, or as [`EMPTY_TIME`] when there is none.
    /// Sub-second precision is dropped.
    pub fn format(&self, time: Option<&Zoned>) -> String {
        format_time(time)
    }

    /// Decodes a value written by [`TimeCodec::format`], or a legacy civil time.
    ///
    /// Returns `Ok(None)` for [`EMPTY_TIME`]. Canonical values come back in UTC with any
    /// offset applied; legacy values come back in this codec's time zone.
    pub fn parse(&self, input: &str) -> Result<Option<Zoned>, TimeError> {
        if input == EMPTY_TIME {
            return Ok(None);
        }

        let parse_err = |source| TimeError::Parse {
            input: input.to_string(),
            source,
        };

        if is_canonical_layout(input) {
            let ts = input.parse::<Timestamp>().map_err(parse_err)?;
            trace!("'{}' parsed as canonical time", input);
            return Ok(Some(ts.to_zoned(TimeZone::UTC)));
        }

        if fits_layout(input.as_bytes(), LEGACY_LAYOUT) {
            let zdt = DateTime::strptime(LEGACY_TIME_FORMAT, input)
                .and_then(|dt| dt.to_zoned(self.tz.clone()))
                .map_err(parse_err)?;
            trace!("'{}' parsed as legacy time in {:?}", input, self.tz.iana_name());
            return Ok(Some(zdt));
        }

        Err(TimeError::Layout {
            input: input.to_string(),
        })
    }
}

impl Default for TimeCodec {
    fn default() -> Self {
        TimeCodec::system()
    }
}

/// Encodes `time` canonically, or as [`EMPTY_TIME`] when there is none.
/// Sub-second precision is dropped.
pub fn format_time(time: Option<&Zoned>) -> String {
    match time {
        Some(zdt) => zdt.timestamp().strftime(TIME_FORMAT).to_string(),
        None => EMPTY_TIME.to_string(),
    }
}

/// Decodes `input`, reading legacy values in the system time zone. See [`TimeCodec::parse`].
pub fn parse_time(input: &str) -> Result<Option<Zoned>, TimeError> {
    TimeCodec::system().parse(input)
}

// In a layout, `9` matches any ASCII digit and every other byte matches itself.
const CANONICAL_LAYOUT: &[u8] = b"9999-99-99T99:99:99";
const LEGACY_LAYOUT: &[u8] = b"9999-99-99 99:99:99";

fn fits_layout(input: &[u8], layout: &[u8]) -> bool {
    input.len() == layout.len()
        && input.iter().zip(layout).all(|(&c, &l)| match l {
            b'9' => c.is_ascii_digit(),
            _ => c == l,
        })
}

/// RFC 3339 with whole seconds: `YYYY-MM-DDTHH:MM:SS`, optional `.` and fraction digits,
/// then `Z` or `+HH:MM`/`-HH:MM`.
fn is_canonical_layout(input: &str) -> bool {
    let bytes = input.as_bytes();
    if bytes.len() < CANONICAL_LAYOUT.len() {
        return false;
    }

    let (datetime, mut rest) = bytes.split_at(CANONICAL_LAYOUT.len());
    if !fits_layout(datetime, CANONICAL_LAYOUT) {
        return false;
    }

    if let Some((b'.', fraction)) = rest.split_first() {
        let digits = fraction.iter().take_while(|c| c.is_ascii_digit()).count();
        if digits == 0 {
            return false;
        }
        rest = &fraction[digits..];
    }

    rest == b"Z" || fits_layout(rest, b"+99:99") || fits_layout(rest, b"-99:99")
}
