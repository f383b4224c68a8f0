//! Spacing constants for consistent layout.
//!
//! All values are in pixels.

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - icon margins, button rows
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding
pub const SPACING_LG: f32 = 24.0;

// =============================================================================
// BORDERS
// =============================================================================

/// Buttons, inputs, checkboxes
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Cards, panels
pub const BORDER_RADIUS_MD: f32 = 6.0;

/// Popovers
pub const BORDER_RADIUS_LG: f32 = 8.0;

pub const BORDER_WIDTH_THIN: f32 = 1.0;

pub const BORDER_WIDTH_MEDIUM: f32 = 2.0;

// =============================================================================
// COMPONENT SIZES
// =============================================================================

/// Horizontal padding inside table cells
pub const TABLE_CELL_PADDING_X: f32 = 12.0;

/// Vertical padding inside table cells
pub const TABLE_CELL_PADDING_Y: f32 = 8.0;

/// Checkbox column, wide enough for the header checkbox and its chevron
pub const CHECKBOX_COLUMN_WIDTH: f32 = 72.0;

/// Bulk-select popover width
pub const POPOVER_WIDTH: f32 = 260.0;

/// Selected rows panel width
pub const SELECTION_PANEL_WIDTH: f32 = 300.0;
