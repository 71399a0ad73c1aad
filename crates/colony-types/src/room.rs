//! Room Naming
//!
//! Rooms are identified by their coordinates on the world grid, written as a
//! compass pair like "W12N34" or "E0S5". Names are validated on construction
//! so the rest of the workspace can treat a `RoomName` as always well-formed.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Side length of a room grid; coordinates run 0..ROOM_SIZE on each axis.
pub const ROOM_SIZE: u8 = 50;

/// Horizontal hemisphere of a room name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Horizontal {
    West,
    East,
}

/// Vertical hemisphere of a room name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vertical {
    North,
    South,
}

/// A validated room identifier like "W12N34".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomName {
    pub horizontal: Horizontal,
    pub h_index: u16,
    pub vertical: Vertical,
    pub v_index: u16,
}

impl RoomName {
    /// Creates a room name from its four parts.
    pub fn new(horizontal: Horizontal, h_index: u16, vertical: Vertical, v_index: u16) -> Self {
        Self {
            horizontal,
            h_index,
            vertical,
            v_index,
        }
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = match self.horizontal {
            Horizontal::West => 'W',
            Horizontal::East => 'E',
        };
        let v = match self.vertical {
            Vertical::North => 'N',
            Vertical::South => 'S',
        };
        write!(f, "{}{}{}{}", h, self.h_index, v, self.v_index)
    }
}

/// Error type for parsing a `RoomName` from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRoomNameError {
    #[error("invalid room name format: '{0}', expected e.g. 'W12N34'")]
    InvalidFormat(String),
    #[error("invalid room coordinate in '{0}'")]
    InvalidCoordinate(String),
}

impl FromStr for RoomName {
    type Err = ParseRoomNameError;

    /// Parses a room name like "W12N34" or "E0S5".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let horizontal = match chars.next() {
            Some('W') => Horizontal::West,
            Some('E') => Horizontal::East,
            _ => return Err(ParseRoomNameError::InvalidFormat(s.to_string())),
        };

        let rest: String = chars.collect();
        let split = rest
            .find(|c| c == 'N' || c == 'S')
            .ok_or_else(|| ParseRoomNameError::InvalidFormat(s.to_string()))?;
        let (h_digits, v_part) = rest.split_at(split);

        let vertical = match v_part.chars().next() {
            Some('N') => Vertical::North,
            Some('S') => Vertical::South,
            _ => return Err(ParseRoomNameError::InvalidFormat(s.to_string())),
        };
        let v_digits = &v_part[1..];

        if h_digits.is_empty() || v_digits.is_empty() {
            return Err(ParseRoomNameError::InvalidFormat(s.to_string()));
        }

        let h_index = h_digits
            .parse::<u16>()
            .map_err(|_| ParseRoomNameError::InvalidCoordinate(s.to_string()))?;
        let v_index = v_digits
            .parse::<u16>()
            .map_err(|_| ParseRoomNameError::InvalidCoordinate(s.to_string()))?;

        Ok(RoomName {
            horizontal,
            h_index,
            vertical,
            v_index,
        })
    }
}

// Serialize as the compact string form, not a struct.
impl Serialize for RoomName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for RoomName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
