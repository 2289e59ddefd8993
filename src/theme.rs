//! Display theme handling.
//!
//! Three mutually exclusive modes: light, dark, and system-following.
//! Switching modes applies immediately to every component because they all
//! pull colors from the shared [`ThemeService`]. The system mode is resolved
//! once, before the first frame is drawn, so the initial paint never flashes
//! the wrong palette.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The user-selectable theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ThemeMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            _ => Err(()),
        }
    }
}

/// The concrete colors a resolved theme paints with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub fg: Color,
    pub dim: Color,
    pub accent: Color,
    pub success: Color,
    pub destructive: Color,
    pub surface: Color,
}

const LIGHT: Theme = Theme {
    fg: Color::Black,
    dim: Color::DarkGray,
    accent: Color::Blue,
    success: Color::Green,
    destructive: Color::Red,
    surface: Color::White,
};

const DARK: Theme = Theme {
    fg: Color::White,
    dim: Color::Gray,
    accent: Color::Cyan,
    success: Color::LightGreen,
    destructive: Color::LightRed,
    surface: Color::Black,
};

/// Shared theme state.
///
/// Constructed once at startup from configuration, before the terminal enters
/// the alternate screen; components read the resolved [`Theme`] every frame.
#[derive(Debug, Clone)]
pub struct ThemeService {
    mode: ThemeMode,
    system_prefers_dark: bool,
}

impl ThemeService {
    /// Resolve the system preference and build the service.
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            system_prefers_dark: detect_system_dark(),
        }
    }

    #[cfg(test)]
    fn with_system_preference(mode: ThemeMode, system_prefers_dark: bool) -> Self {
        Self {
            mode,
            system_prefers_dark,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Select a mode. Takes effect on the next frame for every component.
    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
    }

    /// Advance to the next mode: light -> dark -> system -> light.
    pub fn cycle_mode(&mut self) {
        self.mode = match self.mode {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        };
    }

    /// The colors currently in effect.
    pub fn theme(&self) -> Theme {
        match self.mode {
            ThemeMode::Light => LIGHT,
            ThemeMode::Dark => DARK,
            ThemeMode::System => {
                if self.system_prefers_dark {
                    DARK
                } else {
                    LIGHT
                }
            }
        }
    }
}

/// Best-effort detection of a dark terminal background.
///
/// Terminals that set `COLORFGBG` report "fg;bg" color indices; a background
/// index below 8 is a dark color. Without the variable we assume dark, the
/// overwhelmingly common terminal default.
fn detect_system_dark() -> bool {
    match std::env::var("COLORFGBG") {
        Ok(value) => value
            .rsplit(';')
            .next()
            .and_then(|bg| bg.parse::<u8>().ok())
            .map(|bg| bg < 8)
            .unwrap_or(true),
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_system() {
        assert_eq!(ThemeMode::default(), ThemeMode::System);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert_eq!("DARK".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert!("solarized".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_explicit_modes_ignore_system_preference() {
        let service = ThemeService::with_system_preference(ThemeMode::Light, true);
        assert_eq!(service.theme(), LIGHT);

        let service = ThemeService::with_system_preference(ThemeMode::Dark, false);
        assert_eq!(service.theme(), DARK);
    }

    #[test]
    fn test_system_mode_follows_preference() {
        let service = ThemeService::with_system_preference(ThemeMode::System, true);
        assert_eq!(service.theme(), DARK);

        let service = ThemeService::with_system_preference(ThemeMode::System, false);
        assert_eq!(service.theme(), LIGHT);
    }

    #[test]
    fn test_mode_cycling() {
        let mut service = ThemeService::with_system_preference(ThemeMode::Light, true);

        service.cycle_mode();
        assert_eq!(service.mode(), ThemeMode::Dark);

        service.cycle_mode();
        assert_eq!(service.mode(), ThemeMode::System);

        service.cycle_mode();
        assert_eq!(service.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_set_mode_applies_immediately() {
        let mut service = ThemeService::with_system_preference(ThemeMode::Dark, true);
        service.set_mode(ThemeMode::Light);
        assert_eq!(service.theme(), LIGHT);
    }
}
