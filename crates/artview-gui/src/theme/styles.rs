//! Theme creation and widget style functions.
//!
//! Style functions receive `&Theme` and read colors from it, so they follow
//! the active mode without extra parameters:
//!
//! ```rust,ignore
//! button(text("Clear selection")).style(button_secondary)
//! ```

use iced::widget::{button, container, text_input};
use iced::{Border, Color, Shadow, Theme, Vector};

use super::colors::GalleryColors;
use super::palette::{ThemeMode, gallery_palette};
use super::spacing;

// =============================================================================
// THEME CREATION
// =============================================================================

/// Build the Artview theme for `theme_mode`.
pub fn gallery_theme(theme_mode: ThemeMode) -> Theme {
    let name = format!("Gallery {}", theme_mode.label());
    Theme::custom(name, gallery_palette(theme_mode))
}

// =============================================================================
// BUTTON STYLES
// =============================================================================

fn button_border(width: f32, color: Color) -> Border {
    Border {
        radius: spacing::BORDER_RADIUS_SM.into(),
        width,
        color,
    }
}

/// Primary button style - main actions.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let gallery = theme.gallery();

    match status {
        button::Status::Active => button::Style {
            background: Some(palette.primary.base.color.into()),
            text_color: gallery.text_on_accent,
            border: button_border(0.0, Color::TRANSPARENT),
            shadow: Shadow {
                color: gallery.shadow,
                offset: Vector::new(0.0, 1.0),
                blur_radius: 2.0,
            },
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(gallery.accent_hover.into()),
            text_color: gallery.text_on_accent,
            border: button_border(0.0, Color::TRANSPARENT),
            shadow: Shadow {
                color: gallery.shadow_strong,
                offset: Vector::new(0.0, 2.0),
                blur_radius: 4.0,
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(gallery.accent_pressed.into()),
            text_color: gallery.text_on_accent,
            border: button_border(0.0, Color::TRANSPARENT),
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: Some(gallery.accent_disabled.into()),
            text_color: gallery.text_muted,
            border: button_border(0.0, Color::TRANSPARENT),
            ..Default::default()
        },
    }
}

/// Secondary button style - alternative actions.
pub fn button_secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let gallery = theme.gallery();

    match status {
        button::Status::Active => button::Style {
            background: Some(gallery.background_elevated.into()),
            text_color: gallery.text_secondary,
            border: button_border(spacing::BORDER_WIDTH_THIN, gallery.border_default),
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette.background.base.color.into()),
            text_color: gallery.text_secondary,
            border: button_border(spacing::BORDER_WIDTH_THIN, gallery.text_disabled),
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(gallery.background_secondary.into()),
            text_color: gallery.text_secondary,
            border: button_border(spacing::BORDER_WIDTH_THIN, gallery.border_default),
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: Some(gallery.background_secondary.into()),
            text_color: gallery.text_disabled,
            border: button_border(spacing::BORDER_WIDTH_THIN, gallery.border_subtle),
            ..Default::default()
        },
    }
}

/// Ghost button style - icon buttons and pagination.
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let gallery = theme.gallery();

    let (background, text_color) = match status {
        button::Status::Active => (None, palette.primary.base.color),
        button::Status::Hovered => (
            Some(gallery.accent_primary_light.into()),
            palette.primary.base.color,
        ),
        button::Status::Pressed => (
            Some(gallery.accent_primary_medium.into()),
            gallery.accent_pressed,
        ),
        button::Status::Disabled => (None, gallery.text_disabled),
    };

    button::Style {
        background,
        text_color,
        border: button_border(0.0, Color::TRANSPARENT),
        ..Default::default()
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Card container style - the table surface.
pub fn container_card(theme: &Theme) -> container::Style {
    let gallery = theme.gallery();

    container::Style {
        background: Some(gallery.background_elevated.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_MD.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: gallery.border_subtle,
        },
        shadow: Shadow {
            color: gallery.shadow,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

/// Popover container style - floats above the table.
pub fn container_popover(theme: &Theme) -> container::Style {
    let gallery = theme.gallery();

    container::Style {
        background: Some(gallery.background_elevated.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_LG.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: gallery.border_default,
        },
        shadow: Shadow {
            color: gallery.shadow_strong,
            offset: Vector::new(0.0, 4.0),
            blur_radius: 16.0,
        },
        ..Default::default()
    }
}

/// Sidebar container style - the selected rows panel.
pub fn container_sidebar(theme: &Theme) -> container::Style {
    let gallery = theme.gallery();

    container::Style {
        background: Some(gallery.background_secondary.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_MD.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: gallery.border_subtle,
        },
        ..Default::default()
    }
}

/// Error banner style.
pub fn container_banner_error(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let gallery = theme.gallery();

    container::Style {
        background: Some(gallery.status_error_light.into()),
        text_color: Some(palette.background.base.text),
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: palette.danger.base.color,
        },
        ..Default::default()
    }
}

// =============================================================================
// TEXT INPUT STYLES
// =============================================================================

/// Default text input style.
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();
    let gallery = theme.gallery();

    let (background, border) = match status {
        text_input::Status::Active => (
            gallery.background_elevated,
            button_border(spacing::BORDER_WIDTH_THIN, gallery.border_default),
        ),
        text_input::Status::Hovered => (
            gallery.background_elevated,
            button_border(spacing::BORDER_WIDTH_THIN, gallery.text_disabled),
        ),
        text_input::Status::Focused { .. } => (
            gallery.background_elevated,
            button_border(spacing::BORDER_WIDTH_MEDIUM, gallery.border_focused),
        ),
        text_input::Status::Disabled => (
            gallery.background_secondary,
            button_border(spacing::BORDER_WIDTH_THIN, gallery.border_default),
        ),
    };

    text_input::Style {
        background: background.into(),
        border,
        icon: gallery.text_muted,
        placeholder: gallery.text_disabled,
        value: if matches!(status, text_input::Status::Disabled) {
            gallery.text_muted
        } else {
            palette.background.base.text
        },
        selection: gallery.accent_primary_medium,
    }
}
