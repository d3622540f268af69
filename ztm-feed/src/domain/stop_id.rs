//! Stop identifier type.

use std::fmt;

use serde::{Serialize, Serializer};

/// Number of characters in a stop id.
pub const STOP_ID_LEN: usize = 6;

/// Number of leading characters shared by every stop of a group.
pub const GROUP_CODE_LEN: usize = STOP_ID_LEN - 2;

/// Error returned when parsing an invalid stop id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop id: {reason}")]
pub struct InvalidStopId {
    reason: &'static str,
}

/// A valid 6-digit stop (boarding point) identifier.
///
/// The first four digits are the code of the station group the stop belongs
/// to; the last two number the stop within its group.
///
/// # Examples
///
/// ```
/// use ztm_feed::domain::StopId;
///
/// let id = StopId::parse("100101").unwrap();
/// assert_eq!(id.as_str(), "100101");
/// assert_eq!(id.group_code(), "1001");
///
/// // Wrong length is rejected
/// assert!(StopId::parse("10010").is_err());
/// assert!(StopId::parse("1001011").is_err());
///
/// // Non-digits are rejected
/// assert!(StopId::parse("1001a1").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId([u8; STOP_ID_LEN]);

impl StopId {
    /// Parse a stop id from a string.
    ///
    /// The input must be exactly 6 ASCII digits.
    pub fn parse(s: &str) -> Result<Self, InvalidStopId> {
        let bytes = s.as_bytes();

        if bytes.len() != STOP_ID_LEN {
            return Err(InvalidStopId {
                reason: "must be exactly 6 characters",
            });
        }

        if !bytes.iter().all(u8::is_ascii_digit) {
            return Err(InvalidStopId {
                reason: "must be ASCII digits 0-9",
            });
        }

        let mut id = [0u8; STOP_ID_LEN];
        id.copy_from_slice(bytes);
        Ok(StopId(id))
    }

    /// Parse a stop id from the start of `s`.
    ///
    /// Succeeds when `s` begins with exactly six digits, i.e. the seventh
    /// character (if any) is not a digit.
    pub fn parse_prefix(s: &str) -> Option<Self> {
        let digits = s.bytes().take_while(u8::is_ascii_digit).count();
        if digits != STOP_ID_LEN {
            return None;
        }
        StopId::parse(&s[..STOP_ID_LEN]).ok()
    }

    /// Returns the stop id as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store ASCII digits
        std::str::from_utf8(&self.0).unwrap()
    }

    /// Returns the code of the group this stop belongs to (the id without
    /// its last two characters).
    pub fn group_code(&self) -> &str {
        &self.as_str()[..GROUP_CODE_LEN]
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.as_str())
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StopId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
