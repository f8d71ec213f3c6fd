//! Colours and the role-keyed palette.
//!
//! Every colour used by the bar, the layouts and the battery helper comes
//! from a single [`Palette`].  Consumers ask for a [`Role`] rather than a
//! positional index, so reordering the palette never changes which colour a
//! widget receives.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An RGB colour stored as six lowercase hex digits (no leading `#`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

/// Errors from parsing colours or addressing the palette.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex colour: {0:?}")]
    InvalidHex(String),
    #[error("palette index {index} out of range (palette has {len} entries)")]
    OutOfRange { index: usize, len: usize },
}

impl Color {
    /// Parse `#rrggbb` or `rrggbb` (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(s.to_string()));
        }
        Ok(Self(digits.to_ascii_lowercase()))
    }

    /// The colour as `#rrggbb`.
    pub fn hex(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).map_err(DeError::custom)
    }
}

/// A `[normal, alternate]` colour pair.
///
/// The host accepts a pair wherever a single colour is expected and renders
/// it as a vertical gradient.  Most pairs repeat the same colour twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "[Color; 2]", from = "[Color; 2]")]
pub struct ColorPair {
    pub normal: Color,
    pub alternate: Color,
}

impl ColorPair {
    fn new(normal: &str, alternate: &str) -> Result<Self, ColorError> {
        Ok(Self {
            normal: Color::parse(normal)?,
            alternate: Color::parse(alternate)?,
        })
    }

    fn solid(hex: &str) -> Result<Self, ColorError> {
        Self::new(hex, hex)
    }
}

impl From<ColorPair> for [Color; 2] {
    fn from(pair: ColorPair) -> Self {
        [pair.normal, pair.alternate]
    }
}

impl From<[Color; 2]> for ColorPair {
    fn from([normal, alternate]: [Color; 2]) -> Self {
        Self { normal, alternate }
    }
}

/// Symbolic name of a palette entry.
///
/// The declaration order is the palette order, so `Role::index` matches the
/// positional index the host sees in the serialised colour table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Bar background.
    Background,
    Highlight,
    Wine,
    Purple,
    Red,
    Orange,
    Yellow,
    Green,
    White,
    Blue,
}

impl Role {
    /// All roles in palette order.
    pub const ALL: [Role; 10] = [
        Role::Background,
        Role::Highlight,
        Role::Wine,
        Role::Purple,
        Role::Red,
        Role::Orange,
        Role::Yellow,
        Role::Green,
        Role::White,
        Role::Blue,
    ];

    /// Position of this role in the colour table.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// The colour table.
///
/// Built once by [`Palette::new`]; indexing by [`Role`] cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Palette {
    entries: Vec<ColorPair>,
}

impl Palette {
    /// The stock palette.
    pub fn new() -> Result<Self, ColorError> {
        let entries = vec![
            ColorPair::solid("#000000")?,
            ColorPair::new("#b31902", "#e6b553")?,
            ColorPair::solid("#580201")?,
            ColorPair::solid("#ab0068")?,
            ColorPair::solid("#e00702")?,
            ColorPair::solid("#ff6c02")?,
            ColorPair::solid("#fec106")?,
            ColorPair::solid("#149603")?,
            ColorPair::solid("#ffffff")?,
            ColorPair::solid("#0030a8")?,
        ];
        debug_assert_eq!(entries.len(), Role::ALL.len());
        Ok(Self { entries })
    }

    /// The colour pair assigned to `role`.
    pub fn get(&self, role: Role) -> &ColorPair {
        &self.entries[role.index()]
    }

    /// Positional lookup, for hosts that address the table by index.
    pub fn by_index(&self, index: usize) -> Result<&ColorPair, ColorError> {
        self.entries.get(index).ok_or(ColorError::OutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(role, pair)` in palette order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &ColorPair)> {
        Role::ALL.iter().copied().zip(self.entries.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_with_and_without_hash() {
        assert_eq!(Color::parse("#D75F5F").unwrap().hex(), "#d75f5f");
        assert_eq!(Color::parse("fc7703").unwrap().hex(), "#fc7703");
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in ["", "#fff", "#12345g", "1234567", "#"] {
            assert!(Color::parse(bad).is_err(), "{:?} should be rejected", bad);
        }
    }

    #[test]
    fn palette_has_an_entry_for_every_role() {
        let p = Palette::new().unwrap();
        assert!(p.len() >= 10);
        assert_eq!(p.len(), Role::ALL.len());
        for role in Role::ALL {
            assert!(p.by_index(role.index()).is_ok());
        }
    }

    #[test]
    fn roles_resolve_to_expected_colours() {
        let p = Palette::new().unwrap();
        assert_eq!(p.get(Role::Background).normal.hex(), "#000000");
        assert_eq!(p.get(Role::Highlight).normal.hex(), "#b31902");
        assert_eq!(p.get(Role::Highlight).alternate.hex(), "#e6b553");
        assert_eq!(p.get(Role::Red).normal.hex(), "#e00702");
        assert_eq!(p.get(Role::Yellow).normal.hex(), "#fec106");
        assert_eq!(p.get(Role::Blue).normal.hex(), "#0030a8");
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let p = Palette::new().unwrap();
        assert_eq!(
            p.by_index(10),
            Err(ColorError::OutOfRange { index: 10, len: 10 })
        );
    }

    #[test]
    fn pair_serialises_as_two_element_array() {
        let p = Palette::new().unwrap();
        let json = serde_json::to_string(p.get(Role::Highlight)).unwrap();
        assert_eq!(json, r##"["#b31902","#e6b553"]"##);
        let back: ColorPair = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, p.get(Role::Highlight));
    }
}
