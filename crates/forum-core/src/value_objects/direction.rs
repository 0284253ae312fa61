//! Vote direction - the only two values a caller may cast

use std::fmt;

/// Direction of a cast vote. A cancelled vote (stored value 0) is never a
/// valid *request*; it only exists as stored state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    /// The signed integer this direction writes into a vote row
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }

    /// Strict parse of the wire form: exactly `"1"` or `"-1"`.
    ///
    /// Anything else (floats, `"0"`, `"+1"`, whitespace, out-of-range
    /// integers) is rejected, matching the vote endpoint contract.
    pub fn parse(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('-').unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match s.parse::<i64>().ok()? {
            1 => Some(Self::Up),
            -1 => Some(Self::Down),
            _ => None,
        }
    }

    /// Convert a stored integer back to a direction, if it is one
    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            1 => Some(Self::Up),
            -1 => Some(Self::Down),
            _ => None,
        }
    }
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
