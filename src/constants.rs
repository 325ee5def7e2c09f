//! Sizing, timing, and styling constants for the widgets.

use std::time::Duration;

/// Default channel slider width
pub const SLIDER_WIDTH: f64 = 256.0;

/// Default width of the A/R/G/B numeric editors
pub const ARGB_EDITOR_WIDTH: f64 = 65.0;

/// Default width of the hex editor in the mixer
pub const HEX_EDITOR_WIDTH: f64 = 120.0;

/// Hex editor width in the entry
pub const ENTRY_EDITOR_WIDTH: f32 = 96.0;

/// Default width of the entry's color preview button
pub const PREVIEW_BUTTON_WIDTH: f64 = 40.0;

/// 1D slider track height
pub const SLIDER_HEIGHT: f32 = 16.0;

/// Thumb radius on 1D sliders
pub const THUMB_RADIUS: f64 = 7.0;

/// Border radius for slider tracks and editors
pub const RADIUS: f32 = 4.0;

/// Gap between widget elements
pub const GAP: f32 = 8.0;

/// Input font size
pub const INPUT_FONT: f32 = 13.0;

/// Label font size
pub const LABEL_FONT: f32 = 12.0;

/// Dialog title font size (1.5× the body text)
pub const TITLE_FONT: f32 = 21.0;

/// Padding inside the dialog frame
pub const DIALOG_PADDING: f32 = 16.0;

/// Space between the OK and Cancel buttons
pub const BUTTON_SPACING: f32 = 10.0;

/// Length of the show and hide animations
pub const DIALOG_ANIMATION: Duration = Duration::from_millis(400);

/// Frame scale at the start of showing and the end of hiding
pub const DIALOG_HIDDEN_SCALE: f64 = 0.75;

/// Interval between animation frames
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Checkerboard cell size (for alpha backgrounds)
pub const CHECKER_CELL: f64 = 5.0;
