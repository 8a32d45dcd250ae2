//! # Theme Configuration
//!
//! Centralized colors for the wallet screens. All visual styling should use
//! these constants so both screens stay consistent.
//!
//! ## Usage
//! ```rust,ignore
//! use crate::ui::components::theme::colors;
//!
//! let fill = colors::PRIMARY_BUTTON;
//! ```

use eframe::egui::Color32;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Interactive element colors (buttons, arrows)
    pub interactive: InteractiveColors,
    /// Screen backgrounds and cards
    pub layout: LayoutColors,
    /// Text and typography colors
    pub typography: TypographyColors,
    /// Alert dialog accents per notification kind
    pub alerts: AlertColors,
}

/// Colors for interactive elements
#[derive(Debug, Clone)]
pub struct InteractiveColors {
    /// Load/Unload/Submit buttons
    pub primary_button: Color32,
    /// Cancel buttons
    pub secondary_button: Color32,
    /// Outline drawn around hovered buttons
    pub hover_border: Color32,
    /// Carousel arrow buttons
    pub arrow_fill: Color32,
}

/// Layout and container colors
#[derive(Debug, Clone)]
pub struct LayoutColors {
    /// Load screen background
    pub load_background: Color32,
    /// Unload screen background
    pub unload_background: Color32,
    pub card_background: Color32,
    pub card_border: Color32,
    /// Dimmed backdrop behind modals
    pub modal_backdrop: Color32,
    /// Note card face
    pub note_face: Color32,
    pub note_border: Color32,
}

/// Text and typography colors
#[derive(Debug, Clone)]
pub struct TypographyColors {
    pub primary: Color32,
    pub secondary: Color32,
    pub white: Color32,
}

#[derive(Debug, Clone)]
pub struct AlertColors {
    pub success: Color32,
    pub error: Color32,
    pub not_allowed: Color32,
}

/// The active theme: purple load screen, light unload screen
pub const CURRENT_THEME: Theme = Theme {
    interactive: InteractiveColors {
        primary_button: Color32::from_rgb(0, 123, 255),
        secondary_button: Color32::from_rgb(108, 117, 125),
        hover_border: Color32::from_rgb(126, 120, 229),
        arrow_fill: Color32::from_rgba_premultiplied(255, 255, 255, 200),
    },
    layout: LayoutColors {
        load_background: Color32::from_rgb(128, 0, 128),
        unload_background: Color32::from_rgb(248, 249, 250),
        card_background: Color32::WHITE,
        card_border: Color32::from_rgb(220, 220, 220),
        modal_backdrop: Color32::from_rgba_premultiplied(0, 0, 0, 128),
        note_face: Color32::from_rgb(236, 226, 198),
        note_border: Color32::from_rgb(120, 96, 60),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(51, 51, 51),
        secondary: Color32::from_rgb(102, 102, 102),
        white: Color32::WHITE,
    },
    alerts: AlertColors {
        success: Color32::from_rgb(40, 167, 69),
        error: Color32::from_rgb(220, 53, 69),
        not_allowed: Color32::from_rgb(255, 140, 0),
    },
};

impl Theme {
    /// Accent color for an alert of the given kind
    pub fn alert_accent(&self, kind: shared::NotificationKind) -> Color32 {
        match kind {
            shared::NotificationKind::Success => self.alerts.success,
            shared::NotificationKind::Error => self.alerts.error,
            shared::NotificationKind::ActionNotAllowed => self.alerts.not_allowed,
        }
    }
}

/// Convenience constants for the most commonly used colors
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    pub const PRIMARY_BUTTON: Color32 = CURRENT_THEME.interactive.primary_button;
    pub const SECONDARY_BUTTON: Color32 = CURRENT_THEME.interactive.secondary_button;
    pub const HOVER_BORDER: Color32 = CURRENT_THEME.interactive.hover_border;
    pub const ARROW_FILL: Color32 = CURRENT_THEME.interactive.arrow_fill;

    pub const LOAD_BACKGROUND: Color32 = CURRENT_THEME.layout.load_background;
    pub const UNLOAD_BACKGROUND: Color32 = CURRENT_THEME.layout.unload_background;
    pub const CARD_BACKGROUND: Color32 = CURRENT_THEME.layout.card_background;
    pub const CARD_BORDER: Color32 = CURRENT_THEME.layout.card_border;
    pub const MODAL_BACKDROP: Color32 = CURRENT_THEME.layout.modal_backdrop;
    pub const NOTE_FACE: Color32 = CURRENT_THEME.layout.note_face;
    pub const NOTE_BORDER: Color32 = CURRENT_THEME.layout.note_border;

    pub const TEXT_PRIMARY: Color32 = CURRENT_THEME.typography.primary;
    pub const TEXT_SECONDARY: Color32 = CURRENT_THEME.typography.secondary;
    pub const TEXT_WHITE: Color32 = CURRENT_THEME.typography.white;
}
