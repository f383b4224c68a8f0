//! Gallery color extension trait.
//!
//! Adds the colors Artview needs beyond Iced's `ExtendedPalette`, derived
//! from the active palette so both modes stay consistent.
//!
//! ```rust,ignore
//! use crate::theme::GalleryColors;
//!
//! .style(|theme: &Theme| container::Style {
//!     background: Some(theme.gallery().row_selected.into()),
//!     ..Default::default()
//! })
//! ```

use iced::{Color, Theme};

// =============================================================================
// GALLERY COLOR SET
// =============================================================================

/// App-specific colors not covered by Iced's ExtendedPalette.
#[derive(Debug, Clone, Copy)]
pub struct GalleryColorSet {
    // === Accent Tints ===
    /// Light tint of the accent (hover backgrounds)
    pub accent_primary_light: Color,
    /// Medium tint of the accent (text selection)
    pub accent_primary_medium: Color,

    // === Table ===
    /// Background of a selected row
    pub row_selected: Color,
    /// Background of odd rows
    pub row_alternate: Color,

    // === Status ===
    /// Error banner background
    pub status_error_light: Color,

    // === Borders ===
    pub border_default: Color,
    pub border_subtle: Color,
    /// Focused element border (accent)
    pub border_focused: Color,

    // === Backgrounds ===
    /// Headers and panels
    pub background_secondary: Color,
    /// Cards and popovers
    pub background_elevated: Color,

    // === Text ===
    pub text_secondary: Color,
    /// Hints, counts, placeholder cells
    pub text_muted: Color,
    pub text_disabled: Color,
    /// Text on accent backgrounds
    pub text_on_accent: Color,

    // === Interactive ===
    pub accent_hover: Color,
    pub accent_pressed: Color,
    pub accent_disabled: Color,

    // === Special ===
    pub shadow: Color,
    pub shadow_strong: Color,
    /// Transparent layer behind the bulk-select popover
    pub backdrop: Color,
}

// =============================================================================
// EXTENSION TRAIT
// =============================================================================

/// Extension trait for gallery-specific colors.
///
/// Use inside style closures that receive a `&Theme`.
pub trait GalleryColors {
    /// Get the gallery color set for this theme.
    fn gallery(&self) -> GalleryColorSet;
}

impl GalleryColors for Theme {
    fn gallery(&self) -> GalleryColorSet {
        let palette = self.extended_palette();
        let is_dark = palette.is_dark;
        let primary = palette.primary.base.color;

        GalleryColorSet {
            accent_primary_light: if is_dark {
                Color { a: 0.15, ..primary }
            } else {
                blend_color(primary, Color::WHITE, 0.90)
            },
            accent_primary_medium: if is_dark {
                Color { a: 0.25, ..primary }
            } else {
                blend_color(primary, Color::WHITE, 0.70)
            },

            row_selected: if is_dark {
                Color { a: 0.18, ..primary }
            } else {
                blend_color(primary, Color::WHITE, 0.88)
            },
            row_alternate: palette.background.base.color,

            status_error_light: if is_dark {
                Color {
                    a: 0.15,
                    ..palette.danger.base.color
                }
            } else {
                blend_color(palette.danger.base.color, Color::WHITE, 0.85)
            },

            border_default: palette.background.strong.color,
            border_subtle: if is_dark {
                Color::from_rgb(0.20, 0.19, 0.19)
            } else {
                Color::from_rgb(0.90, 0.89, 0.87)
            },
            border_focused: primary,

            background_secondary: palette.background.weak.color,
            background_elevated: if is_dark {
                Color::from_rgb(0.15, 0.14, 0.14)
            } else {
                Color::WHITE
            },

            text_secondary: if is_dark {
                Color::from_rgb(0.80, 0.79, 0.77)
            } else {
                Color::from_rgb(0.30, 0.29, 0.28)
            },
            text_muted: if is_dark {
                Color::from_rgb(0.60, 0.59, 0.57)
            } else {
                Color::from_rgb(0.50, 0.49, 0.47)
            },
            text_disabled: if is_dark {
                Color::from_rgb(0.40, 0.39, 0.38)
            } else {
                Color::from_rgb(0.68, 0.67, 0.65)
            },
            text_on_accent: Color::WHITE,

            accent_hover: palette.primary.strong.color,
            accent_pressed: if is_dark {
                blend_color(primary, Color::BLACK, 0.20)
            } else {
                blend_color(primary, Color::BLACK, 0.15)
            },
            accent_disabled: if is_dark {
                Color::from_rgb(0.30, 0.29, 0.29)
            } else {
                Color::from_rgb(0.84, 0.83, 0.81)
            },

            shadow: Color::from_rgba(0.0, 0.0, 0.0, if is_dark { 0.25 } else { 0.08 }),
            shadow_strong: Color::from_rgba(0.0, 0.0, 0.0, if is_dark { 0.40 } else { 0.16 }),
            backdrop: Color::from_rgba(0.0, 0.0, 0.0, if is_dark { 0.20 } else { 0.06 }),
        }
    }
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Blend two colors together.
///
/// `factor` of 0.0 returns `base`, 1.0 returns `blend`.
fn blend_color(base: Color, blend: Color, factor: f32) -> Color {
    Color::from_rgb(
        base.r + (blend.r - base.r) * factor,
        base.g + (blend.g - base.g) * factor,
        base.b + (blend.b - base.b) * factor,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        let base = Color::from_rgb(0.2, 0.4, 0.6);
        assert_eq!(blend_color(base, Color::WHITE, 0.0), base);
        let white = blend_color(base, Color::WHITE, 1.0);
        assert!((white.r - 1.0).abs() < 1e-6);
        assert!((white.b - 1.0).abs() < 1e-6);
    }
}
