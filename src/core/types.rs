use serde::{Deserialize, Serialize};

/// A nitrogenous base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Base {
    A,
    C,
    G,
    T,
}

impl Base {
    pub const ALL: [Base; 4] = [Base::A, Base::C, Base::G, Base::T];

    /// Parse a base from a single byte, ignoring case
    #[must_use]
    pub fn from_byte(b: u8) -> Option<Self> {
        match b.to_ascii_uppercase() {
            b'A' => Some(Self::A),
            b'C' => Some(Self::C),
            b'G' => Some(Self::G),
            b'T' => Some(Self::T),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_byte(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::C => b'C',
            Self::G => b'G',
            Self::T => b'T',
        }
    }
}

impl std::fmt::Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", char::from(self.as_byte()))
    }
}

/// Direction along which the grid is read when searching for runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Left to right along each row
    Horizontal,
    /// Top to bottom along each column
    Vertical,
    /// Top-left to bottom-right (\)
    DiagonalDownRight,
    /// Top-right to bottom-left (/)
    DiagonalDownLeft,
}

impl Orientation {
    /// Every orientation, in the order the classifier scans them
    pub const SCAN_ORDER: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::DiagonalDownRight,
        Orientation::DiagonalDownLeft,
    ];
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
            Self::DiagonalDownRight => write!(f, "diagonal (down-right)"),
            Self::DiagonalDownLeft => write!(f, "diagonal (down-left)"),
        }
    }
}
