use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_SHIP_SIZES;
use crate::error::{DecodeError, EncodeError};

use super::{COORDINATE_MAX, MAX_SHIPS};

/// A target cell. Each component must fit in four bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinates {
    vertical: u8,
    horizontal: u8,
}

impl Coordinates {
    pub fn new(vertical: u8, horizontal: u8) -> Result<Self, EncodeError> {
        if vertical > COORDINATE_MAX || horizontal > COORDINATE_MAX {
            return Err(EncodeError::CoordinatesOutOfRange {
                vertical,
                horizontal,
            });
        }
        Ok(Self {
            vertical,
            horizontal,
        })
    }

    /// Build from a packed attack byte; every byte is a valid pair.
    pub(crate) fn from_nibbles(byte: u8) -> Self {
        Self {
            vertical: byte >> 4,
            horizontal: byte & 0x0F,
        }
    }

    pub fn vertical(&self) -> u8 {
        self.vertical
    }

    pub fn horizontal(&self) -> u8 {
        self.horizontal
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.vertical, self.horizontal)
    }
}

/// The defender's verdict on an attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum AttackResponse {
    Missed = 1,
    Hit = 2,
    DisabledShip = 3,
    GameEnd = 0xFF,
}

impl AttackResponse {
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Hits and disabled ships let the attacker go again.
    pub fn keeps_turn(self) -> bool {
        matches!(self, AttackResponse::Hit | AttackResponse::DisabledShip)
    }

    pub fn ends_game(self) -> bool {
        self == AttackResponse::GameEnd
    }
}

impl TryFrom<u8> for AttackResponse {
    type Error = DecodeError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            1 => Ok(AttackResponse::Missed),
            2 => Ok(AttackResponse::Hit),
            3 => Ok(AttackResponse::DisabledShip),
            0xFF => Ok(AttackResponse::GameEnd),
            other => Err(DecodeError::UnknownAttackResponse(other)),
        }
    }
}

/// Ordered ship sizes carried by the game configuration message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShipSizes(Vec<u8>);

impl ShipSizes {
    pub fn new(sizes: Vec<u8>) -> Result<Self, EncodeError> {
        if sizes.len() > MAX_SHIPS {
            return Err(EncodeError::TooManyShips(sizes.len()));
        }
        Ok(Self(sizes))
    }

    /// Sizes read after a one-byte count, so never more than 255 of them.
    pub(crate) fn from_wire(sizes: &[u8]) -> Self {
        Self(sizes.to_vec())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    /// Total number of ship cells in the fleet.
    pub fn total_cells(&self) -> usize {
        self.0.iter().map(|&s| s as usize).sum()
    }
}

impl Default for ShipSizes {
    fn default() -> Self {
        Self(DEFAULT_SHIP_SIZES.to_vec())
    }
}

impl TryFrom<Vec<u8>> for ShipSizes {
    type Error = EncodeError;

    fn try_from(sizes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(sizes)
    }
}

impl FromStr for ShipSizes {
    type Err = EncodeError;

    /// Parses a comma separated list such as `5,4,3,3,2`. An empty string is an empty fleet.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self(Vec::new()));
        }
        let sizes = trimmed
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<u8>()
                    .map_err(|_| EncodeError::InvalidShipSizes(format!("'{}' is not a size 0-255", part.trim())))
            })
            .collect::<Result<Vec<u8>, _>>()?;
        Self::new(sizes)
    }
}

impl fmt::Display for ShipSizes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for size in &self.0 {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{}", size)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_reject_wide_components() {
        assert!(Coordinates::new(15, 15).is_ok());
        assert_eq!(
            Coordinates::new(16, 3),
            Err(EncodeError::CoordinatesOutOfRange {
                vertical: 16,
                horizontal: 3
            })
        );
    }

    #[test]
    fn ship_sizes_parse_and_display() {
        let sizes: ShipSizes = "5, 4,3,3,2".parse().unwrap();
        assert_eq!(sizes.as_slice(), &[5, 4, 3, 3, 2]);
        assert_eq!(sizes.to_string(), "5,4,3,3,2");
        assert_eq!(sizes.total_cells(), 17);
        assert!("".parse::<ShipSizes>().unwrap().is_empty());
        assert!("5,x".parse::<ShipSizes>().is_err());
        assert!("256".parse::<ShipSizes>().is_err());
    }

    #[test]
    fn ship_count_is_capped() {
        assert!(ShipSizes::new(vec![1; 255]).is_ok());
        assert_eq!(ShipSizes::new(vec![1; 256]), Err(EncodeError::TooManyShips(256)));
    }

    #[test]
    fn response_bytes() {
        assert_eq!(AttackResponse::try_from(3).unwrap(), AttackResponse::DisabledShip);
        assert!(AttackResponse::try_from(0).is_err());
        assert_eq!(AttackResponse::GameEnd.as_byte(), 0xFF);
        assert!(AttackResponse::Hit.keeps_turn());
        assert!(!AttackResponse::Missed.keeps_turn());
    }
}
