// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the overlay: base colors, opacity scale, spacing and
//! sizing. Styles derive every concrete color from these plus the host's
//! accent color, so theming stays in one place.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Default accent, the translucent blue of the original widget.
    pub const ACCENT: Color = Color {
        r: 12.0 / 255.0,
        g: 83.0 / 255.0,
        b: 175.0 / 255.0,
        a: 0.9,
    };

    /// Inactive portion of the seek track (#AEB3B7).
    pub const TRACK: Color = Color {
        r: 174.0 / 255.0,
        g: 179.0 / 255.0,
        b: 183.0 / 255.0,
        a: 1.0,
    };

    /// Overlay backdrop base, a desaturated slate.
    pub const BACKDROP: Color = Color {
        r: 45.0 / 255.0,
        g: 59.0 / 255.0,
        b: 62.0 / 255.0,
        a: 1.0,
    };
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Backdrop behind the controls.
    pub const BACKDROP: f32 = 0.4;
    /// Hovered interactive surfaces.
    pub const HOVER: f32 = 0.8;
    /// Pressed interactive surfaces.
    pub const PRESSED: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Small icon edge (seek-bar fullscreen button).
    pub const ICON_SM: f32 = 16.0;
    /// Primary play/pause/replay icon edge.
    pub const ICON_MD: f32 = 24.0;
    /// Loading spinner edge.
    pub const ICON_XL: f32 = 48.0;

    /// Diameter of the round primary button.
    pub const PLAY_BUTTON: f32 = 56.0;
    /// Time-label font size.
    pub const LABEL_TEXT: f32 = 13.0;
    /// Seek slider rail width.
    pub const RAIL: f32 = 4.0;
}

// ============================================================================
// Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const PILL: f32 = 999.0;
}

/// Multiplies a color's alpha by the overlay fade factor.
///
/// Iced has no subtree-opacity wrapper, so the fade is threaded through
/// every style color instead.
#[must_use]
pub fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}
