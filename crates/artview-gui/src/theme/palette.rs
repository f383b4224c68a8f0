//! Light and dark palettes.

use iced::Color;
use iced::theme::Palette;
use serde::{Deserialize, Serialize};

// =============================================================================
// THEME MODE
// =============================================================================

/// Theme mode for light/dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// All available modes.
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// PALETTE CREATION
// =============================================================================

/// Iced palette for the given mode.
///
/// Iced derives its `ExtendedPalette` from this; [`GalleryColors`] derives
/// the rest.
///
/// [`GalleryColors`]: super::GalleryColors
pub fn gallery_palette(theme_mode: ThemeMode) -> Palette {
    match theme_mode {
        ThemeMode::Light => light(),
        ThemeMode::Dark => dark(),
    }
}

/// Warm paper background with a museum-red accent.
fn light() -> Palette {
    Palette {
        background: Color::from_rgb(0.98, 0.97, 0.96),
        text: Color::from_rgb(0.12, 0.11, 0.10),
        primary: Color::from_rgb(0.64, 0.10, 0.14),
        success: Color::from_rgb(0.20, 0.60, 0.35),
        warning: Color::from_rgb(0.92, 0.62, 0.08),
        danger: Color::from_rgb(0.80, 0.22, 0.22),
    }
}

fn dark() -> Palette {
    Palette {
        background: Color::from_rgb(0.09, 0.08, 0.08),
        text: Color::from_rgb(0.94, 0.93, 0.91),
        primary: Color::from_rgb(0.86, 0.36, 0.36),
        success: Color::from_rgb(0.35, 0.75, 0.50),
        warning: Color::from_rgb(0.96, 0.72, 0.25),
        danger: Color::from_rgb(0.95, 0.42, 0.42),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        for mode in ThemeMode::ALL {
            assert_eq!(mode.toggled().toggled(), mode);
            assert_ne!(mode.toggled(), mode);
        }
    }

    #[test]
    fn test_serde_uses_snake_case() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            mode: ThemeMode,
        }

        let out = toml::to_string(&Wrapper {
            mode: ThemeMode::Dark,
        })
        .unwrap();
        assert_eq!(out.trim(), "mode = \"dark\"");
    }

    #[test]
    fn test_dark_palette_is_darker() {
        let light = gallery_palette(ThemeMode::Light);
        let dark = gallery_palette(ThemeMode::Dark);
        assert!(dark.background.r < light.background.r);
        assert!(dark.text.r > light.text.r);
    }
}
