use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which energy model drives the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Five cumulative coffee thresholds picked with the slider.
    #[default]
    Slider,
    /// Two fixed coffees at 07:30 and 14:00, half-hour resolution.
    TwoShot,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Slider => "slider",
            Preset::TwoShot => "two-shot",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Preset::Slider => "Coffee Addiction Curve",
            Preset::TwoShot => "Two-Coffee Strategy",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Preset::Slider => Preset::TwoShot,
            Preset::TwoShot => Preset::Slider,
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Preset {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "slider" => Ok(Preset::Slider),
            "two-shot" | "twoshot" | "fixed" => Ok(Preset::TwoShot),
            _ => Err(anyhow::anyhow!(
                "Unknown preset '{}'. Use: slider, two-shot",
                s
            )),
        }
    }
}
