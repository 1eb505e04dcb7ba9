//! Closed set of color themes.
//!
//! Layers bake theme colors into their entities at build time, so switching
//! theme means rebuilding layouts rather than reading colors per frame.

use crate::error::ThemeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Linear RGB triple in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgb(pub [f32; 3]);

impl Rgb {
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xff) as f32 / 255.0;
        let g = ((hex >> 8) & 0xff) as f32 / 255.0;
        let b = (hex & 0xff) as f32 / 255.0;
        Self([r, g, b])
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> [f32; 4] {
        [self.0[0], self.0[1], self.0[2], a]
    }

    #[inline]
    pub fn scaled(self, k: f32) -> Self {
        Self([self.0[0] * k, self.0[1] * k, self.0[2] * k])
    }
}

// Fixed accent colors shared by several layers regardless of theme
pub const MOON_GOLD: u32 = 0xE8D7A6;
pub const FROSTED_WHITE: u32 = 0xF8F6F2;
pub const CHAMPAGNE_GOLD: u32 = 0xD9C28F;
pub const RUBY: u32 = 0xB02424;
pub const DEEP_EMERALD: u32 = 0x0B4036;
pub const WARM_AMBER: u32 = 0xFFDDAC;
pub const TRUNK_BARK: u32 = 0x1A1A0D;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThemeId {
    #[default]
    AuroraGreen,
    LuxuryGold,
}

impl ThemeId {
    pub const ALL: [ThemeId; 2] = [ThemeId::AuroraGreen, ThemeId::LuxuryGold];

    /// Stable identifier used in snapshots and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeId::AuroraGreen => "AURORA_GREEN",
            ThemeId::LuxuryGold => "LUXURY_GOLD",
        }
    }

    /// The next theme in the cycle.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn theme(self) -> Theme {
        match self {
            ThemeId::AuroraGreen => Theme {
                id: self,
                name: "Festive Emerald",
                background: Rgb::from_hex(0x051F1A),
                fog: Rgb::from_hex(0x051810),
                particles_primary: Rgb::from_hex(DEEP_EMERALD),
                particles_secondary: Rgb::from_hex(MOON_GOLD),
                ornaments: Rgb::from_hex(CHAMPAGNE_GOLD),
                bloom: Rgb::from_hex(WARM_AMBER),
                wireframe: Rgb::from_hex(RUBY),
            },
            ThemeId::LuxuryGold => Theme {
                id: self,
                name: "Royal Gold",
                background: Rgb::from_hex(0x050200),
                fog: Rgb::from_hex(0x1F140A),
                particles_primary: Rgb::from_hex(0xB8860B),
                particles_secondary: Rgb::from_hex(0xFFD700),
                ornaments: Rgb::from_hex(0xF2E5C1),
                bloom: Rgb::from_hex(0xFFAA00),
                wireframe: Rgb::from_hex(0x800000),
            },
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "AURORA_GREEN" | "EMERALD" => Ok(ThemeId::AuroraGreen),
            "LUXURY_GOLD" | "GOLD" => Ok(ThemeId::LuxuryGold),
            _ => Err(ThemeError::Unknown(s.to_string())),
        }
    }
}

/// Named palette of seven semantic colors.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub id: ThemeId,
    pub name: &'static str,
    pub background: Rgb,
    pub fog: Rgb,
    pub particles_primary: Rgb,
    pub particles_secondary: Rgb,
    pub ornaments: Rgb,
    pub bloom: Rgb,
    pub wireframe: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        ThemeId::default().theme()
    }
}
