use self::Direction::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The placement of a popup menu relative to its label.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    #[default]
    /// Below the label, aligned to its left edge.
    BottomLeft,
    /// Below the label, aligned to its right edge.
    BottomRight,
    /// Above the label, aligned to its left edge.
    TopLeft,
    /// Above the label, aligned to its right edge.
    TopRight,
}

impl Direction {
    /// Returns `true` if the menu appears above the label.
    #[inline]
    pub fn is_up(&self) -> bool {
        matches!(self, TopLeft | TopRight)
    }

    /// Returns `true` if the menu is aligned to the right edge of the label.
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, BottomRight | TopRight)
    }

    /// Returns the direction as `str`.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            BottomLeft => "bottom-left",
            BottomRight => "bottom-right",
            TopLeft => "top-left",
            TopRight => "top-right",
        }
    }
}

impl fmt::Display for Direction {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "bottom-left" | "bottom" => Ok(BottomLeft),
            "bottom-right" => Ok(BottomRight),
            "top-left" | "top" => Ok(TopLeft),
            "top-right" => Ok(TopRight),
            _ => Err(ParseDirectionError(s.to_owned())),
        }
    }
}

/// An error which can be returned when parsing a [`Direction`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid popup direction `{0}`")]
pub struct ParseDirectionError(String);
