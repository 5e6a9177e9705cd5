// src/noyau/config.rs
//
// Configuration de l’évaluateur (fixée à la construction, jamais modifiée ensuite).

use std::fmt;
use std::str::FromStr;

/// Garde-fou : longueur maximale d’une expression (en caractères).
pub const LONGUEUR_MAX_DEFAUT: usize = 4096;

/// Unité des angles pour sin/cos/tan/asin/acos/atan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModeAngle {
    #[default]
    Radians,
    Degres,
}

impl ModeAngle {
    /// Convertit un angle saisi vers des radians (seulement utile en Degres).
    pub fn vers_radians(self, x: f64) -> f64 {
        match self {
            ModeAngle::Radians => x,
            ModeAngle::Degres => x.to_radians(),
        }
    }
}

impl fmt::Display for ModeAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeAngle::Radians => write!(f, "rad"),
            ModeAngle::Degres => write!(f, "deg"),
        }
    }
}

impl FromStr for ModeAngle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rad" | "radians" => Ok(ModeAngle::Radians),
            "deg" | "degres" | "degrés" | "degrees" => Ok(ModeAngle::Degres),
            autre => Err(format!("mode d’angle inconnu: '{autre}'")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    pub mode_angle: ModeAngle,
    pub longueur_max: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode_angle: ModeAngle::Radians,
            longueur_max: LONGUEUR_MAX_DEFAUT,
        }
    }
}

impl Config {
    pub fn degres(mut self) -> Self {
        self.mode_angle = ModeAngle::Degres;
        self
    }

    pub fn avec_mode_angle(mut self, mode: ModeAngle) -> Self {
        self.mode_angle = mode;
        self
    }

    pub fn avec_longueur_max(mut self, max: usize) -> Self {
        self.longueur_max = max;
        self
    }
}
