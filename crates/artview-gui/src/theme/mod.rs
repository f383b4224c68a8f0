//! Gallery theme for Artview.
//!
//! - Light and dark palettes (`palette`)
//! - Derived colors beyond Iced's extended palette (`colors`)
//! - Widget style functions (`styles`)
//! - Spacing constants (`spacing`)
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::theme::{GalleryColors, SPACING_MD, button_primary};
//!
//! button(text("Submit")).style(button_primary).padding(SPACING_MD);
//!
//! container(content).style(|theme: &Theme| container::Style {
//!     background: Some(theme.gallery().background_secondary.into()),
//!     ..Default::default()
//! });
//! ```

pub mod colors;
pub mod palette;
pub mod spacing;
pub mod styles;

pub use colors::{GalleryColorSet, GalleryColors};
pub use palette::{ThemeMode, gallery_palette};
pub use spacing::{
    BORDER_RADIUS_LG, BORDER_RADIUS_MD, BORDER_RADIUS_SM, BORDER_WIDTH_MEDIUM, BORDER_WIDTH_THIN,
    CHECKBOX_COLUMN_WIDTH, POPOVER_WIDTH, SELECTION_PANEL_WIDTH, SPACING_LG, SPACING_MD,
    SPACING_SM, SPACING_XS, TABLE_CELL_PADDING_X, TABLE_CELL_PADDING_Y,
};
pub use styles::{
    button_ghost, button_primary, button_secondary, container_banner_error, container_card,
    container_popover, container_sidebar, gallery_theme, text_input_default,
};
