//! # Theme Configuration
//!
//! Centralized color configuration for the fitness dashboard. All visual
//! styling should use these constants so the palette stays consistent across
//! both screens.

use eframe::egui::Color32;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Text and typography colors
    pub typography: TypographyColors,
    /// Background and container colors
    pub layout: LayoutColors,
    /// Weight gauge colors
    pub gauge: GaugeColors,
    /// Score chart colors
    pub chart: ChartColors,
    /// Health status card colors
    pub health: HealthColors,
}

/// Text and typography colors
#[derive(Debug, Clone)]
pub struct TypographyColors {
    /// Primary text (values, headings)
    pub primary: Color32,
    /// Secondary text (labels)
    pub secondary: Color32,
    /// Muted text (hints, sub-labels)
    pub muted: Color32,
    /// Accent text (links, selected date)
    pub accent: Color32,
    /// White text for dark/colored backgrounds
    pub white: Color32,
}

/// Background and container colors
#[derive(Debug, Clone)]
pub struct LayoutColors {
    /// Screen background
    pub background: Color32,
    /// Info card background on the home screen
    pub card_background: Color32,
    /// Sub-value chip background inside info cards
    pub chip_background: Color32,
    /// Hairline separator
    pub separator: Color32,
    /// Tinted background for the date box and share button
    pub accent_background: Color32,
    /// Dimmed backdrop behind modals
    pub modal_backdrop: Color32,
}

/// Weight gauge colors
#[derive(Debug, Clone)]
pub struct GaugeColors {
    /// Foreground arc fill
    pub foreground: Color32,
    /// Stripe color of the background track texture
    pub stripe: Color32,
    /// Base color of the background track between stripes
    pub track_base: Color32,
    /// Separator mark between filled and unfilled arc
    pub separator: Color32,
}

/// Score chart colors
#[derive(Debug, Clone)]
pub struct ChartColors {
    /// Unfilled bar background
    pub bar_background: Color32,
    /// Dark top border on every bar
    pub bar_border: Color32,
    /// Highlighted "this week" bar
    pub bar_highlight: Color32,
    /// Diagonal stripe color on historical bars
    pub bar_stripe: Color32,
}

/// Health status card colors
#[derive(Debug, Clone)]
pub struct HealthColors {
    /// Card background
    pub card_background: Color32,
    /// "You are healthy" text and heart icon
    pub healthy: Color32,
    /// Filled segments of the health bar
    pub segment_filled: Color32,
    /// Unfilled segment of the health bar
    pub segment_empty: Color32,
    /// "Good" status on the muscle mass card
    pub status_good: Color32,
    /// Flame icon next to "Current Score"
    pub flame: Color32,
}

/// The active theme, matching the mobile design's light palette.
pub const CURRENT_THEME: Theme = Theme {
    typography: TypographyColors {
        primary: Color32::from_rgb(34, 34, 34),
        secondary: Color32::from_rgb(85, 85, 85),
        muted: Color32::from_rgb(170, 170, 170),
        accent: Color32::from_rgb(33, 150, 243),
        white: Color32::WHITE,
    },
    layout: LayoutColors {
        background: Color32::WHITE,
        card_background: Color32::from_rgb(249, 249, 249),
        chip_background: Color32::from_rgb(224, 224, 224),
        separator: Color32::from_rgb(234, 234, 234),
        accent_background: Color32::from_rgb(240, 248, 255),
        modal_backdrop: Color32::from_rgba_premultiplied(0, 0, 0, 128),
    },
    gauge: GaugeColors {
        foreground: Color32::from_rgb(33, 118, 255),
        stripe: Color32::from_rgb(209, 209, 209),
        track_base: Color32::from_rgb(244, 244, 244),
        separator: Color32::BLACK,
    },
    chart: ChartColors {
        bar_background: Color32::from_rgb(240, 240, 240),
        bar_border: Color32::from_rgb(34, 34, 34),
        bar_highlight: Color32::from_rgb(33, 150, 243),
        bar_stripe: Color32::from_rgb(187, 187, 187),
    },
    health: HealthColors {
        card_background: Color32::from_rgb(247, 247, 247),
        healthy: Color32::from_rgb(46, 204, 113),
        segment_filled: Color32::from_rgb(34, 34, 34),
        segment_empty: Color32::from_rgb(238, 238, 238),
        status_good: Color32::from_rgb(0, 122, 255),
        flame: Color32::from_rgb(255, 152, 0),
    },
};

/// Convenience constants for the most commonly used colors
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    pub const TEXT_ACCENT: Color32 = CURRENT_THEME.typography.accent;
    pub const TEXT_WHITE: Color32 = CURRENT_THEME.typography.white;

    pub const BACKGROUND: Color32 = CURRENT_THEME.layout.background;
    pub const CHIP_BACKGROUND: Color32 = CURRENT_THEME.layout.chip_background;
    pub const SEPARATOR: Color32 = CURRENT_THEME.layout.separator;
    pub const ACCENT_BACKGROUND: Color32 = CURRENT_THEME.layout.accent_background;
    pub const MODAL_BACKDROP: Color32 = CURRENT_THEME.layout.modal_backdrop;
}
