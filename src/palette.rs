//! The fixed color palette for collections.
//!
//! Every collection carries exactly one of these colors. The set is closed:
//! validation rejects any color name outside it, and the UI only ever renders
//! colors from this enum.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A member of the enumerated collection color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionColor {
    Sunset,
    Poppy,
    Rosebud,
    Snowflake,
    Candy,
    Firtree,
    Powder,
    Sky,
}

impl CollectionColor {
    /// All palette members, in display order.
    pub const ALL: [CollectionColor; 8] = [
        CollectionColor::Sunset,
        CollectionColor::Poppy,
        CollectionColor::Rosebud,
        CollectionColor::Snowflake,
        CollectionColor::Candy,
        CollectionColor::Firtree,
        CollectionColor::Powder,
        CollectionColor::Sky,
    ];

    /// Canonical lowercase name, as stored in the database.
    pub fn name(&self) -> &'static str {
        match self {
            CollectionColor::Sunset => "sunset",
            CollectionColor::Poppy => "poppy",
            CollectionColor::Rosebud => "rosebud",
            CollectionColor::Snowflake => "snowflake",
            CollectionColor::Candy => "candy",
            CollectionColor::Firtree => "firtree",
            CollectionColor::Powder => "powder",
            CollectionColor::Sky => "sky",
        }
    }

    /// Terminal color used for the collection header and accents.
    pub fn terminal_color(&self) -> Color {
        match self {
            CollectionColor::Sunset => Color::Rgb(255, 140, 66),
            CollectionColor::Poppy => Color::Rgb(224, 60, 60),
            CollectionColor::Rosebud => Color::Rgb(230, 103, 166),
            CollectionColor::Snowflake => Color::Rgb(140, 190, 233),
            CollectionColor::Candy => Color::Rgb(201, 97, 222),
            CollectionColor::Firtree => Color::Rgb(67, 160, 71),
            CollectionColor::Powder => Color::Rgb(121, 134, 203),
            CollectionColor::Sky => Color::Rgb(41, 182, 246),
        }
    }

    /// Next palette member, wrapping around. Used by the color selector.
    pub fn next(&self) -> CollectionColor {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for CollectionColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CollectionColor {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or(())
    }
}
