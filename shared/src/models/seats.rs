//! Seat counts

use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest table capacity and largest party size
pub const MAX_SEATS: u8 = 6;

/// A seat count in `0..=MAX_SEATS`.
///
/// Zero is a legal free-seat count (a full table). Capacities and party
/// sizes are additionally required to be non-zero by their constructors.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Seats(u8);

impl Seats {
    pub const ZERO: Seats = Seats(0);
    pub const MAX: Seats = Seats(MAX_SEATS);

    /// Returns `None` above [`MAX_SEATS`]
    pub const fn new(n: u8) -> Option<Self> {
        if n <= MAX_SEATS { Some(Self(n)) } else { None }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Position of this count in a bucket array of length `MAX_SEATS + 1`
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Sum, or `None` if it would exceed [`MAX_SEATS`]
    pub fn checked_add(self, rhs: Seats) -> Option<Seats> {
        Self::new(self.0 + rhs.0)
    }

    pub fn checked_sub(self, rhs: Seats) -> Option<Seats> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    /// Every count from `self` up to and including [`MAX_SEATS`], ascending
    pub fn up_to_max(self) -> impl Iterator<Item = Seats> {
        (self.0..=MAX_SEATS).map(Seats)
    }
}

impl fmt::Display for Seats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Seats> for u8 {
    #[inline]
    fn from(seats: Seats) -> Self {
        seats.0
    }
}

/// Error when a raw count exceeds [`MAX_SEATS`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSeats(pub u8);

impl fmt::Display for InvalidSeats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid seat count {} (max {})", self.0, MAX_SEATS)
    }
}

impl std::error::Error for InvalidSeats {}

impl TryFrom<u8> for Seats {
    type Error = InvalidSeats;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidSeats(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seats(n: u8) -> Seats {
        Seats::new(n).unwrap()
    }

    #[test]
    fn test_bounds() {
        assert_eq!(Seats::new(0), Some(Seats::ZERO));
        assert_eq!(Seats::new(6), Some(Seats::MAX));
        assert_eq!(Seats::new(7), None);
        assert_eq!(Seats::try_from(9), Err(InvalidSeats(9)));
    }

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(seats(2).checked_add(seats(3)), Some(seats(5)));
        assert_eq!(seats(4).checked_add(seats(3)), None);
        assert_eq!(seats(4).checked_sub(seats(3)), Some(seats(1)));
        assert_eq!(seats(1).checked_sub(seats(3)), None);
    }

    #[test]
    fn test_up_to_max() {
        let counts: Vec<u8> = seats(4).up_to_max().map(Seats::get).collect();
        assert_eq!(counts, vec![4, 5, 6]);
        assert_eq!(Seats::MAX.up_to_max().count(), 1);
    }

    #[test]
    fn test_serde_validates() {
        assert_eq!(serde_json::to_string(&seats(3)).unwrap(), "3");
        assert_eq!(serde_json::from_str::<Seats>("5").unwrap(), seats(5));
        assert!(serde_json::from_str::<Seats>("8").is_err());
    }
}
