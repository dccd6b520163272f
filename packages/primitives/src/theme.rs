//! Background themes.
use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The background theme of the dashboard.
///
/// Themes are persisted and configured by their kebab-case name, for example
/// `gradient-blue`.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Debug, Clone, Copy, Default, Display)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    #[display("gradient-blue")]
    GradientBlue,
    #[display("gradient-sunset")]
    GradientSunset,
    #[display("gradient-ocean")]
    GradientOcean,
    #[display("gradient-forest")]
    GradientForest,
    #[display("color-dark")]
    ColorDark,
    #[display("color-light")]
    ColorLight,
    #[display("color-purple")]
    ColorPurple,
    #[display("color-green")]
    ColorGreen,
}

impl Theme {
    pub const ALL: [Theme; 8] = [
        Theme::GradientBlue,
        Theme::GradientSunset,
        Theme::GradientOcean,
        Theme::GradientForest,
        Theme::ColorDark,
        Theme::ColorLight,
        Theme::ColorPurple,
        Theme::ColorGreen,
    ];
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("unknown theme: {0:?}")]
pub struct UnknownThemeError(pub String);

impl FromStr for Theme {
    type Err = UnknownThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.to_string() == s.trim())
            .ok_or_else(|| UnknownThemeError(s.to_owned()))
    }
}
