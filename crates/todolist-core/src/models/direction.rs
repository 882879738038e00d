//! Move direction for single-step item reordering.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe direction of a one-step item move.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    /// Move the item one position toward the top of the list
    Up,

    /// Move the item one position toward the bottom of the list
    Down,
}

impl FromStr for MoveDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(MoveDirection::Up),
            "down" => Ok(MoveDirection::Down),
            _ => Err(format!("Invalid move direction: {s}")),
        }
    }
}

impl MoveDirection {
    /// Convert to the form-field string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveDirection::Up => "up",
            MoveDirection::Down => "down",
        }
    }
}
